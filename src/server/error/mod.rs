//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints. Every response body
//! follows the `ErrorDto` shape.

pub mod auth;
pub mod budget;
pub mod category;
pub mod config;
pub mod ledger;
pub mod user;
pub mod validation;

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, budget::BudgetError, category::CategoryError, config::ConfigError,
        ledger::LedgerError, user::UserError, validation::ValidationError,
    },
};

const INTERNAL_ERROR_MESSAGE: &str = "Erro interno do servidor";

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Domain-specific errors handle their own
/// response mapping, while infrastructure errors become 500 responses.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` (401 Unauthorized, 403 Forbidden).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Invalid request body, parameter or business rule input. Always 400.
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    #[error(transparent)]
    UserErr(#[from] UserError),

    #[error(transparent)]
    CategoryErr(#[from] CategoryError),

    /// Income or expense error.
    #[error(transparent)]
    LedgerErr(#[from] LedgerError),

    #[error(transparent)]
    BudgetErr(#[from] BudgetError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Failure signing a JSON Web Token.
    #[error(transparent)]
    TokenErr(#[from] jsonwebtoken::errors::Error),

    /// Failure binding or serving the listener socket.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - Variable - Domain errors delegate to their own `into_response()`
/// - 500 Internal Server Error - For infrastructure errors
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::ValidationErr(err) => err.into_response(),
            Self::UserErr(err) => err.into_response(),
            Self::CategoryErr(err) => err.into_response(),
            Self::LedgerErr(err) => err.into_response(),
            Self::BudgetErr(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
    }
}

/// Builds an `ErrorDto` response without field errors.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    error_response_with_fields(status, message, BTreeMap::new())
}

/// Builds an `ErrorDto` response carrying per-field validation messages.
pub fn error_response_with_fields(
    status: StatusCode,
    message: impl Into<String>,
    errors: BTreeMap<String, String>,
) -> Response {
    let body = ErrorDto {
        timestamp: Utc::now(),
        status: status.as_u16(),
        error: status.canonical_reason().unwrap_or_default().to_string(),
        message: message.into(),
        errors,
    };

    (status, Json(body)).into_response()
}
