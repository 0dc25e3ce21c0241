//! Request and response bodies of the HTTP API.

pub mod api;
pub mod auth;
pub mod budget;
pub mod category;
pub mod chart;
pub mod dashboard;
pub mod expense;
pub mod income;
pub mod period;
pub mod user;
