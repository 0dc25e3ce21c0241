use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{
    model::period::YearMonth,
    server::{error::error_response, model::ledger::LedgerKind},
};

/// Errors raised by income and expense operations.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// No entry with the given ID. Results in 404 Not Found.
    #[error("{} com UUID {id} não encontrada", .kind.noun())]
    NotFound { kind: LedgerKind, id: String },

    /// The entry belongs to another user. Results in 403 Forbidden.
    #[error("Acesso negado: esta {} não pertence a você", .kind.noun().to_lowercase())]
    AccessDenied { kind: LedgerKind, id: String },

    /// No entries exist for the requested month. Results in 404 Not Found.
    #[error("Nenhuma {} encontrada para o período {period}", .kind.noun().to_lowercase())]
    EmptyPeriod { kind: LedgerKind, period: YearMonth },
}

impl IntoResponse for LedgerError {
    fn into_response(self) -> Response {
        tracing::debug!("{:?}", self);

        let status = match self {
            Self::NotFound { .. } | Self::EmptyPeriod { .. } => StatusCode::NOT_FOUND,
            Self::AccessDenied { .. } => StatusCode::FORBIDDEN,
        };

        error_response(status, self.to_string())
    }
}
