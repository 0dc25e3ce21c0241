use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{model::period::YearMonth, server::error::error_response};

#[derive(Error, Debug)]
pub enum BudgetError {
    /// A budget already exists for this category and month. Results in 409 Conflict.
    #[error("Já existe um orçamento mensal para a categoria {category} e o período {period}")]
    AlreadyExists { category: String, period: YearMonth },

    /// No budget with the given ID owned by the user. Results in 404 Not Found.
    #[error("Orçamento mensal com UUID {0} não encontrado")]
    NotFound(String),

    /// The user has no budgets at all. Results in 404 Not Found.
    #[error("Nenhum orçamento mensal encontrado para o usuário logado")]
    NoneForUser,

    /// The user has no budgets in the month. Results in 404 Not Found.
    #[error("Nenhum orçamento mensal encontrado para o período {0}")]
    NoneForPeriod(YearMonth),
}

impl IntoResponse for BudgetError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let status = match self {
            Self::AlreadyExists { .. } => StatusCode::CONFLICT,
            Self::NotFound(_) | Self::NoneForUser | Self::NoneForPeriod(_) => {
                StatusCode::NOT_FOUND
            }
        };

        error_response(status, self.to_string())
    }
}
