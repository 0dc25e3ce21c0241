use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        auth::{LoginDto, RegisterUserDto, TokenDto},
        user::UserDto,
    },
    server::{
        error::AppError,
        model::user::{LoginParams, RegisterUserParams},
        service::auth::AuthService,
        state::AppState,
        util::extract::AppJson,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// Creates the user together with one "Sem Categoria" category per kind. The
/// `ADMIN` role is only granted while no administrator exists.
///
/// # Returns
/// - `201 Created` - Created user
/// - `400 Bad Request` - Invalid fields
/// - `409 Conflict` - Email or username already registered
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "User registered", body = UserDto),
        (status = 400, description = "Invalid fields", body = ErrorDto),
        (status = 409, description = "Email or username already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = RegisterUserParams::from_dto(payload)?;

    let user = AuthService::new(&state.db, &state.tokens)
        .register(params)
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Exchange credentials for a bearer token.
///
/// # Returns
/// - `200 OK` - Signed token
/// - `401 Unauthorized` - Unknown email or wrong password
/// - `403 Forbidden` - Account deactivated
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Authenticated", body = TokenDto),
        (status = 400, description = "Invalid fields", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 403, description = "Inactive user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = LoginParams::from_dto(payload)?;

    let token = AuthService::new(&state.db, &state.tokens)
        .login(params)
        .await?;

    Ok((StatusCode::OK, Json(TokenDto { token })))
}
