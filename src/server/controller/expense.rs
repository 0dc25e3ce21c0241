use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        chart::{BarChartDto, PieChartDto},
        expense::{ExpenseDto, ExpenseInputDto},
    },
    server::{
        controller::query::{AmountRangeParams, DateRangeParams, PeriodRangeParams},
        error::AppError,
        middleware::auth::AuthGuard,
        model::ledger::{LedgerEntry, LedgerEntryInput, LedgerKind},
        service::ledger::LedgerService,
        state::AppState,
        util::{
            extract::{AppJson, AppQuery},
            parse::{parse_date, parse_decimal, parse_year_month},
        },
    },
};

/// Tag for grouping expense endpoints in OpenAPI documentation
pub static EXPENSE_TAG: &str = "despesa";

fn into_dtos(entries: Vec<LedgerEntry>) -> Vec<ExpenseDto> {
    entries.into_iter().map(LedgerEntry::into_expense_dto).collect()
}

/// Record an expense.
///
/// `categoria` must name one of the user's expense categories.
///
/// # Returns
/// - `201 Created` - Created expense
/// - `400 Bad Request` - Invalid fields
/// - `404 Not Found` - No expense category with that name
#[utoipa::path(
    post,
    path = "/despesas",
    tag = EXPENSE_TAG,
    security(("bearer" = [])),
    request_body = ExpenseInputDto,
    responses(
        (status = 201, description = "Expense created", body = ExpenseDto),
        (status = 400, description = "Invalid fields", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_expense(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppJson(payload): AppJson<ExpenseInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require(&[]).await?;

    let input = LedgerEntryInput::from_expense_dto(payload)?;
    let entry = LedgerService::new(&state.db, LedgerKind::Expense)
        .create(&user.id, input)
        .await?;

    Ok((StatusCode::CREATED, Json(entry.into_expense_dto())))
}

/// GET /despesas - All expenses of the authenticated user ordered by date
#[utoipa::path(
    get,
    path = "/despesas",
    tag = EXPENSE_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "User expenses", body = Vec<ExpenseDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_all_expenses(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require(&[]).await?;

    let entries = LedgerService::new(&state.db, LedgerKind::Expense)
        .get_all(&user.id)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(entries))))
}

/// GET /despesas/{id} - One expense of the authenticated user
#[utoipa::path(
    get,
    path = "/despesas/{id}",
    tag = EXPENSE_TAG,
    security(("bearer" = [])),
    params(
        ("id" = String, Path, description = "Expense UUID")
    ),
    responses(
        (status = 200, description = "Expense", body = ExpenseDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Expense of another user", body = ErrorDto),
        (status = 404, description = "Expense not found", body = ErrorDto)
    ),
)]
pub async fn get_expense(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require(&[]).await?;

    let entry = LedgerService::new(&state.db, LedgerKind::Expense)
        .get(&user.id, &id)
        .await?;

    Ok((StatusCode::OK, Json(entry.into_expense_dto())))
}

/// Replace an expense.
///
/// # Returns
/// - `200 OK` - Updated expense
/// - `400 Bad Request` - Invalid fields
/// - `403 Forbidden` - Expense of another user
/// - `404 Not Found` - Unknown expense or category
#[utoipa::path(
    put,
    path = "/despesas/{id}",
    tag = EXPENSE_TAG,
    security(("bearer" = [])),
    params(
        ("id" = String, Path, description = "Expense UUID")
    ),
    request_body = ExpenseInputDto,
    responses(
        (status = 200, description = "Expense updated", body = ExpenseDto),
        (status = 400, description = "Invalid fields", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Expense of another user", body = ErrorDto),
        (status = 404, description = "Expense or category not found", body = ErrorDto)
    ),
)]
pub async fn update_expense(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    AppJson(payload): AppJson<ExpenseInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require(&[]).await?;

    let input = LedgerEntryInput::from_expense_dto(payload)?;
    let entry = LedgerService::new(&state.db, LedgerKind::Expense)
        .update(&user.id, &id, input)
        .await?;

    Ok((StatusCode::OK, Json(entry.into_expense_dto())))
}

/// DELETE /despesas/{id} - Delete one expense of the authenticated user
#[utoipa::path(
    delete,
    path = "/despesas/{id}",
    tag = EXPENSE_TAG,
    security(("bearer" = [])),
    params(
        ("id" = String, Path, description = "Expense UUID")
    ),
    responses(
        (status = 204, description = "Expense deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Expense of another user", body = ErrorDto),
        (status = 404, description = "Expense not found", body = ErrorDto)
    ),
)]
pub async fn delete_expense(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require(&[]).await?;

    LedgerService::new(&state.db, LedgerKind::Expense)
        .delete(&user.id, &id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /despesas/por-intervalo-de-datas - Expenses dated between `inicio` and `fim`
#[utoipa::path(
    get,
    path = "/despesas/por-intervalo-de-datas",
    tag = EXPENSE_TAG,
    security(("bearer" = [])),
    params(DateRangeParams),
    responses(
        (status = 200, description = "Expenses in the range", body = Vec<ExpenseDto>),
        (status = 400, description = "Invalid or inverted dates", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_expenses_by_date_range(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppQuery(params): AppQuery<DateRangeParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require(&[]).await?;

    let start = parse_date(&params.inicio)?;
    let end = parse_date(&params.fim)?;
    let entries = LedgerService::new(&state.db, LedgerKind::Expense)
        .get_by_date_range(&user.id, start, end)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(entries))))
}

/// GET /despesas/por-intervalo-de-valores - Expenses with an amount between `min` and `max`
#[utoipa::path(
    get,
    path = "/despesas/por-intervalo-de-valores",
    tag = EXPENSE_TAG,
    security(("bearer" = [])),
    params(AmountRangeParams),
    responses(
        (status = 200, description = "Expenses in the range", body = Vec<ExpenseDto>),
        (status = 400, description = "Invalid, non-positive or inverted bounds", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_expenses_by_amount_range(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppQuery(params): AppQuery<AmountRangeParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require(&[]).await?;

    let min = parse_decimal("min", &params.min)?;
    let max = parse_decimal("max", &params.max)?;
    let entries = LedgerService::new(&state.db, LedgerKind::Expense)
        .get_by_amount_range(&user.id, min, max)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(entries))))
}

/// GET /despesas/grafico-pizza - Expense totals per category between two dates
#[utoipa::path(
    get,
    path = "/despesas/grafico-pizza",
    tag = EXPENSE_TAG,
    security(("bearer" = [])),
    params(DateRangeParams),
    responses(
        (status = 200, description = "Totals per category", body = PieChartDto),
        (status = 400, description = "Invalid or inverted dates", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_expense_pie_chart(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppQuery(params): AppQuery<DateRangeParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require(&[]).await?;

    let start = parse_date(&params.inicio)?;
    let end = parse_date(&params.fim)?;
    let categorias = LedgerService::new(&state.db, LedgerKind::Expense)
        .pie_chart(&user.id, start, end)
        .await?;

    Ok((StatusCode::OK, Json(PieChartDto { categorias })))
}

/// GET /despesas/grafico-barras - Expense totals per month between two periods
#[utoipa::path(
    get,
    path = "/despesas/grafico-barras",
    tag = EXPENSE_TAG,
    security(("bearer" = [])),
    params(PeriodRangeParams),
    responses(
        (status = 200, description = "Totals per month", body = BarChartDto),
        (status = 400, description = "Invalid or inverted periods", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_expense_bar_chart(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppQuery(params): AppQuery<PeriodRangeParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require(&[]).await?;

    let start = parse_year_month(&params.inicio)?;
    let end = parse_year_month(&params.fim)?;
    let dados_mensais = LedgerService::new(&state.db, LedgerKind::Expense)
        .bar_chart(&user.id, start, end)
        .await?;

    Ok((StatusCode::OK, Json(BarChartDto { dados_mensais })))
}
