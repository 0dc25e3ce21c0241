use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        category::{CategoryDto, CreateCategoryDto, RenameCategoryDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::category::{Category, CategoryKind, CreateCategoryParams, RenameCategoryParams},
        service::category::CategoryService,
        state::AppState,
        util::extract::AppJson,
    },
};

/// Tag for grouping category endpoints in OpenAPI documentation
pub static CATEGORY_TAG: &str = "categoria";

fn into_dtos(categories: Vec<Category>) -> Vec<CategoryDto> {
    categories.into_iter().map(Category::into_dto).collect()
}

/// Create a category for the authenticated user.
///
/// # Returns
/// - `201 Created` - Created category
/// - `400 Bad Request` - Blank name or unknown `tipo`
/// - `409 Conflict` - Name already used within the same `tipo`
#[utoipa::path(
    post,
    path = "/categorias",
    tag = CATEGORY_TAG,
    security(("bearer" = [])),
    request_body = CreateCategoryDto,
    responses(
        (status = 201, description = "Category created", body = CategoryDto),
        (status = 400, description = "Invalid fields", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 409, description = "Category already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppJson(payload): AppJson<CreateCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require(&[]).await?;

    let params = CreateCategoryParams::from_dto(&user.id, payload)?;
    let category = CategoryService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(category.into_dto())))
}

/// GET /categorias - All categories of the authenticated user
#[utoipa::path(
    get,
    path = "/categorias",
    tag = CATEGORY_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "User categories", body = Vec<CategoryDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_all_categories(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require(&[]).await?;

    let categories = CategoryService::new(&state.db).get_all(&user.id).await?;

    Ok((StatusCode::OK, Json(into_dtos(categories))))
}

/// GET /categorias/receitas - Income categories of the authenticated user
#[utoipa::path(
    get,
    path = "/categorias/receitas",
    tag = CATEGORY_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Income categories", body = Vec<CategoryDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_income_categories(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require(&[]).await?;

    let categories = CategoryService::new(&state.db)
        .get_by_kind(&user.id, CategoryKind::Income)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(categories))))
}

/// GET /categorias/despesas - Expense categories of the authenticated user
#[utoipa::path(
    get,
    path = "/categorias/despesas",
    tag = CATEGORY_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Expense categories", body = Vec<CategoryDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_expense_categories(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require(&[]).await?;

    let categories = CategoryService::new(&state.db)
        .get_by_kind(&user.id, CategoryKind::Expense)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(categories))))
}

/// Rename one of the user's categories.
///
/// # Returns
/// - `200 OK` - Renamed category
/// - `400 Bad Request` - Blank name or the "Sem Categoria" category
/// - `403 Forbidden` - Category of another user
/// - `404 Not Found` - Unknown category
/// - `409 Conflict` - Name already used within the same `tipo`
#[utoipa::path(
    patch,
    path = "/categorias/{id}",
    tag = CATEGORY_TAG,
    security(("bearer" = [])),
    params(
        ("id" = String, Path, description = "Category UUID")
    ),
    request_body = RenameCategoryDto,
    responses(
        (status = 200, description = "Category renamed", body = CategoryDto),
        (status = 400, description = "Invalid name or fallback category", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Category of another user", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 409, description = "Category already exists", body = ErrorDto)
    ),
)]
pub async fn rename_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    AppJson(payload): AppJson<RenameCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require(&[]).await?;

    let params = RenameCategoryParams::from_dto(&user.id, id, payload)?;
    let category = CategoryService::new(&state.db).rename(params).await?;

    Ok((StatusCode::OK, Json(category.into_dto())))
}

/// Delete one of the user's categories.
///
/// Incomes and expenses of the category move to the "Sem Categoria" category of the
/// same `tipo`; budgets on it are removed.
///
/// # Returns
/// - `204 No Content` - Category deleted
/// - `400 Bad Request` - The "Sem Categoria" category
/// - `403 Forbidden` - Category of another user
/// - `404 Not Found` - Unknown category
#[utoipa::path(
    delete,
    path = "/categorias/{id}",
    tag = CATEGORY_TAG,
    security(("bearer" = [])),
    params(
        ("id" = String, Path, description = "Category UUID")
    ),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 400, description = "Fallback category cannot be deleted", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Category of another user", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto)
    ),
)]
pub async fn delete_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require(&[]).await?;

    CategoryService::new(&state.db).delete(&user.id, &id).await?;

    Ok(StatusCode::NO_CONTENT)
}
