use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum CategoryError {
    /// The user already has a category with this name and kind. Results in 409 Conflict.
    #[error("Categoria {0} já cadastrada")]
    AlreadyExists(String),

    /// No category with the given ID. Results in 404 Not Found.
    #[error("Categoria com id {0} não encontrada.")]
    NotFound(String),

    /// The user has no category of the expected kind with this name. Results in 404 Not Found.
    #[error("Categoria com o nome '{0}' não encontrada.")]
    NameNotFound(String),

    /// The category belongs to another user. Results in 403 Forbidden.
    #[error("Acesso a categoria {0} negado: esta categoria não pertence a você")]
    AccessDenied(String),

    /// Attempt to delete the "Sem Categoria" fallback. Results in 400 Bad Request.
    #[error("A categoria 'sem categoria' não pode ser excluída.")]
    UncategorizedNotDeletable,

    /// Attempt to rename the "Sem Categoria" fallback. Results in 400 Bad Request.
    #[error("A categoria 'sem categoria' não pode ser renomeada.")]
    UncategorizedNotRenamable,
}

impl IntoResponse for CategoryError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let status = match self {
            Self::AlreadyExists(_) => StatusCode::CONFLICT,
            Self::NotFound(_) | Self::NameNotFound(_) => StatusCode::NOT_FOUND,
            Self::AccessDenied(_) => StatusCode::FORBIDDEN,
            Self::UncategorizedNotDeletable | Self::UncategorizedNotRenamable => {
                StatusCode::BAD_REQUEST
            }
        };

        error_response(status, self.to_string())
    }
}
