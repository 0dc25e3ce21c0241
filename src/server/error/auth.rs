use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

pub const UNAUTHENTICATED_MESSAGE: &str = "Você não está autenticado para acessar este recurso.";
pub const ACCESS_DENIED_MESSAGE: &str = "Acesso negado para este recurso.";

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carries no usable `Authorization: Bearer` header.
    #[error("Missing or malformed bearer token")]
    MissingToken,

    /// Token signature, format or expiry check failed.
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Token subject no longer exists.
    #[error("User {0} from token not found in database")]
    UserNotInDatabase(String),

    /// Login with an unknown email or a wrong password.
    #[error("Invalid credentials for {0}")]
    InvalidCredentials(String),

    /// The account was deactivated by an administrator.
    #[error("User {0} is inactive")]
    InactiveUser(String),

    /// The user lacks the role needed for the endpoint.
    ///
    /// # Fields
    /// - User ID
    /// - Description of the attempted action
    #[error("User {0} denied access: {1}")]
    AccessDenied(String, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `InvalidToken` / `UserNotInDatabase` → 401 Unauthorized
/// - `InvalidCredentials` → 401 Unauthorized with "Credenciais inválidas"
/// - `InactiveUser` → 403 Forbidden with "Usuário inativo"
/// - `AccessDenied` → 403 Forbidden
///
/// All errors are logged at debug level while the client message stays generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingToken | Self::InvalidToken(_) | Self::UserNotInDatabase(_) => {
                error_response(StatusCode::UNAUTHORIZED, UNAUTHENTICATED_MESSAGE)
            }
            Self::InvalidCredentials(_) => {
                error_response(StatusCode::UNAUTHORIZED, "Credenciais inválidas")
            }
            Self::InactiveUser(_) => error_response(StatusCode::FORBIDDEN, "Usuário inativo"),
            Self::AccessDenied(_, _) => error_response(StatusCode::FORBIDDEN, ACCESS_DENIED_MESSAGE),
        }
    }
}
