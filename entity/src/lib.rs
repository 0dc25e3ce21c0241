//! SeaORM entity models for the finance database schema.

pub mod prelude;

pub mod category;
pub mod expense;
pub mod income;
pub mod monthly_budget;
pub mod user;
