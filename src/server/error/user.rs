use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum UserError {
    /// Registration with an email that is already taken. Results in 409 Conflict.
    #[error("Email {0} já cadastrado")]
    EmailAlreadyExists(String),

    /// Registration with a username that is already taken. Results in 409 Conflict.
    #[error("Username {0} já cadastrado")]
    UsernameAlreadyExists(String),

    /// No user with the given ID. Results in 404 Not Found.
    #[error("Usuário com UUID {0} não encontrado")]
    NotFound(String),
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let status = match self {
            Self::EmailAlreadyExists(_) | Self::UsernameAlreadyExists(_) => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        };

        error_response(status, self.to_string())
    }
}
