use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{UpdateUserStatusDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::UpdateUserStatusParams,
        service::user::UserService,
        state::AppState,
        util::extract::AppJson,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Tag for grouping administrator endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// GET /users/me - Profile of the authenticated user
#[utoipa::path(
    get,
    path = "/users/me",
    tag = USER_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Authenticated user", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Inactive user", body = ErrorDto)
    ),
)]
pub async fn get_current_user(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require(&[]).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// List every account.
///
/// # Access Control
/// - `Admin` - Only administrators can list users
///
/// # Returns
/// - `200 OK` - Users ordered by username
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Not an administrator
#[utoipa::path(
    get,
    path = "/admin/users",
    tag = ADMIN_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "All users", body = Vec<UserDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_users(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &headers)
        .require(&[Permission::Admin])
        .await?;

    let users = UserService::new(&state.db).get_all_users().await?;

    Ok((
        StatusCode::OK,
        Json(users.into_iter().map(|u| u.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Activate or deactivate an account and set its role.
///
/// # Access Control
/// - `Admin` - Only administrators can change accounts
///
/// # Returns
/// - `200 OK` - Updated user
/// - `400 Bad Request` - Missing `estaAtivo` or invalid `role`
/// - `404 Not Found` - Unknown user
#[utoipa::path(
    patch,
    path = "/admin/users/{id}",
    tag = ADMIN_TAG,
    security(("bearer" = [])),
    params(
        ("id" = String, Path, description = "User UUID")
    ),
    request_body = UpdateUserStatusDto,
    responses(
        (status = 200, description = "Updated user", body = UserDto),
        (status = 400, description = "Invalid fields", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<String>,
    AppJson(payload): AppJson<UpdateUserStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &headers)
        .require(&[Permission::Admin])
        .await?;

    let params = UpdateUserStatusParams::from_dto(user_id, payload)?;
    let user = UserService::new(&state.db).update_status(params).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
