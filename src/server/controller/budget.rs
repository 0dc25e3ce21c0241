use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        budget::{MonthlyBudgetDto, MonthlyBudgetInputDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::budget::{MonthlyBudget, MonthlyBudgetInput},
        service::budget::MonthlyBudgetService,
        state::AppState,
        util::{extract::AppJson, parse::parse_year_month},
    },
};

/// Tag for grouping monthly budget endpoints in OpenAPI documentation
pub static BUDGET_TAG: &str = "orcamento-mensal";

fn into_dtos(budgets: Vec<MonthlyBudget>) -> Vec<MonthlyBudgetDto> {
    budgets.into_iter().map(MonthlyBudget::into_dto).collect()
}

/// Set a spending limit on an expense category for one month.
///
/// # Returns
/// - `201 Created` - Created budget
/// - `400 Bad Request` - Invalid fields
/// - `404 Not Found` - No expense category with that name
/// - `409 Conflict` - Category already budgeted for the month
#[utoipa::path(
    post,
    path = "/orcamento-mensal",
    tag = BUDGET_TAG,
    security(("bearer" = [])),
    request_body = MonthlyBudgetInputDto,
    responses(
        (status = 201, description = "Budget created", body = MonthlyBudgetDto),
        (status = 400, description = "Invalid fields", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 409, description = "Budget already exists", body = ErrorDto)
    ),
)]
pub async fn create_budget(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppJson(payload): AppJson<MonthlyBudgetInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require(&[]).await?;

    let input = MonthlyBudgetInput::from_dto(payload)?;
    let budget = MonthlyBudgetService::new(&state.db)
        .create(&user.id, input)
        .await?;

    Ok((StatusCode::CREATED, Json(budget.into_dto())))
}

/// GET /orcamento-mensal - All budgets of the authenticated user
#[utoipa::path(
    get,
    path = "/orcamento-mensal",
    tag = BUDGET_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "User budgets", body = Vec<MonthlyBudgetDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "The user has no budgets", body = ErrorDto)
    ),
)]
pub async fn get_all_budgets(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require(&[]).await?;

    let budgets = MonthlyBudgetService::new(&state.db).get_all(&user.id).await?;

    Ok((StatusCode::OK, Json(into_dtos(budgets))))
}

/// GET /orcamento-mensal/periodo/{periodo} - Budgets of the authenticated user for a month
#[utoipa::path(
    get,
    path = "/orcamento-mensal/periodo/{periodo}",
    tag = BUDGET_TAG,
    security(("bearer" = [])),
    params(
        ("periodo" = String, Path, description = "Month as YYYY-MM")
    ),
    responses(
        (status = 200, description = "Budgets of the month", body = Vec<MonthlyBudgetDto>),
        (status = 400, description = "Invalid period", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Nothing budgeted in the month", body = ErrorDto)
    ),
)]
pub async fn get_budgets_by_period(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(periodo): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require(&[]).await?;

    let period = parse_year_month(&periodo)?;
    let budgets = MonthlyBudgetService::new(&state.db)
        .get_by_period(&user.id, period)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(budgets))))
}

/// GET /orcamento-mensal/{id} - One budget of the authenticated user
#[utoipa::path(
    get,
    path = "/orcamento-mensal/{id}",
    tag = BUDGET_TAG,
    security(("bearer" = [])),
    params(
        ("id" = String, Path, description = "Budget UUID")
    ),
    responses(
        (status = 200, description = "Budget", body = MonthlyBudgetDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Budget not found", body = ErrorDto)
    ),
)]
pub async fn get_budget(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require(&[]).await?;

    let budget = MonthlyBudgetService::new(&state.db)
        .get(&user.id, &id)
        .await?;

    Ok((StatusCode::OK, Json(budget.into_dto())))
}

/// Replace category, limit and period of a budget.
///
/// # Returns
/// - `200 OK` - Updated budget
/// - `400 Bad Request` - Invalid fields
/// - `404 Not Found` - Unknown budget or category
/// - `409 Conflict` - Another budget already covers that category and month
#[utoipa::path(
    put,
    path = "/orcamento-mensal/{id}",
    tag = BUDGET_TAG,
    security(("bearer" = [])),
    params(
        ("id" = String, Path, description = "Budget UUID")
    ),
    request_body = MonthlyBudgetInputDto,
    responses(
        (status = 200, description = "Budget updated", body = MonthlyBudgetDto),
        (status = 400, description = "Invalid fields", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Budget or category not found", body = ErrorDto),
        (status = 409, description = "Budget already exists", body = ErrorDto)
    ),
)]
pub async fn update_budget(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    AppJson(payload): AppJson<MonthlyBudgetInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require(&[]).await?;

    let input = MonthlyBudgetInput::from_dto(payload)?;
    let budget = MonthlyBudgetService::new(&state.db)
        .update(&user.id, &id, input)
        .await?;

    Ok((StatusCode::OK, Json(budget.into_dto())))
}

/// DELETE /orcamento-mensal/{id} - Delete one budget of the authenticated user
#[utoipa::path(
    delete,
    path = "/orcamento-mensal/{id}",
    tag = BUDGET_TAG,
    security(("bearer" = [])),
    params(
        ("id" = String, Path, description = "Budget UUID")
    ),
    responses(
        (status = 204, description = "Budget deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Budget not found", body = ErrorDto)
    ),
)]
pub async fn delete_budget(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require(&[]).await?;

    MonthlyBudgetService::new(&state.db)
        .delete(&user.id, &id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
