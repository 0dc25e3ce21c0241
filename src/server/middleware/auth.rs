use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::auth::token::TokenService,
    state::AppState,
};

pub enum Permission {
    Admin,
}

/// Authenticates a request from its `Authorization: Bearer` header.
///
/// The token subject is reloaded from the database on every call so deactivation
/// and role changes apply to tokens issued earlier.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(state: &'a AppState, headers: &'a HeaderMap) -> Self {
        Self {
            db: &state.db,
            tokens: &state.tokens,
            headers,
        }
    }

    /// Returns the authenticated user if they hold every listed permission.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated, active user with the required permissions
    /// - `Err(AuthError::MissingToken)` - No bearer token in the request
    /// - `Err(AuthError::InvalidToken)` - Bad signature, format or expired token
    /// - `Err(AuthError::UserNotInDatabase)` - Token subject no longer exists
    /// - `Err(AuthError::InactiveUser)` - Account deactivated
    /// - `Err(AuthError::AccessDenied)` - Missing a required permission
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let token = bearer_token(self.headers).ok_or(AuthError::MissingToken)?;
        let claims = self.tokens.validate(token)?;

        let Some(user) = UserRepository::new(self.db).find_by_id(&claims.sub).await? else {
            return Err(AuthError::UserNotInDatabase(claims.sub).into());
        };

        if !user.active {
            return Err(AuthError::InactiveUser(user.id).into());
        }

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin() {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "User attempted to access an administrator endpoint without the ADMIN role".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("Bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
