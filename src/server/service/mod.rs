//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Ownership checks, uniqueness rules and aggregation
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Registration and category deletion run in one transaction

pub mod auth;
pub mod budget;
pub mod category;
pub mod dashboard;
pub mod ledger;
pub mod user;
