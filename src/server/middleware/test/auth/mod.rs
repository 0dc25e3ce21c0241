use std::time::Duration;

use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission},
    model::user::User,
    service::auth::token::TokenService,
    state::AppState,
};

mod require;

fn state(db: &sea_orm::DatabaseConnection) -> AppState {
    AppState::new(
        db.clone(),
        TokenService::new("segredo-de-teste", Duration::from_secs(3600)),
    )
}

fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}

/// Issues a token for a stored user.
fn token_for(state: &AppState, user: entity::user::Model) -> String {
    state.tokens.issue(&User::from_entity(user)).unwrap()
}
