//! HTTP request handlers.
//!
//! Handlers authenticate through `AuthGuard`, convert request DTOs into validated
//! parameter types, call the matching service and map domain models back to DTOs.
//! Each handler carries its `utoipa::path` documentation.

pub mod auth;
pub mod budget;
pub mod category;
pub mod dashboard;
pub mod expense;
pub mod income;
pub mod query;
pub mod user;
