use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::{error_response, error_response_with_fields};

#[derive(Error, Debug)]
pub enum ValidationError {
    /// One or more request fields failed validation.
    ///
    /// Results in 400 Bad Request carrying the field → message map in `errors`.
    #[error("Houve um erro com os dados inseridos")]
    InvalidFields(BTreeMap<String, String>),

    /// A request-wide rule was violated, such as an inverted date range.
    #[error("{0}")]
    InvalidData(String),

    /// The request body could not be parsed as JSON of the expected shape.
    ///
    /// # Fields
    /// - Parser detail, logged only
    #[error("Formato de JSON inválido")]
    MalformedJson(String),

    /// A path or query parameter is missing or malformed.
    #[error("{0}")]
    InvalidParameter(String),
}

impl ValidationError {
    /// Builds a single-field validation error.
    pub fn field(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidFields(BTreeMap::from([(field.to_string(), message.into())]))
    }
}

/// Converts validation errors into 400 Bad Request responses.
impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidFields(errors) => {
                tracing::debug!("Validation failed: {:?}", errors);
                error_response_with_fields(
                    StatusCode::BAD_REQUEST,
                    "Houve um erro com os dados inseridos",
                    errors,
                )
            }
            Self::MalformedJson(detail) => {
                tracing::debug!("Rejected request body: {}", detail);
                error_response(StatusCode::BAD_REQUEST, "Formato de JSON inválido")
            }
            Self::InvalidData(msg) | Self::InvalidParameter(msg) => {
                error_response(StatusCode::BAD_REQUEST, msg)
            }
        }
    }
}
