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
        income::{IncomeDto, IncomeInputDto},
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

/// Tag for grouping income endpoints in OpenAPI documentation
pub static INCOME_TAG: &str = "receita";

fn into_dtos(entries: Vec<LedgerEntry>) -> Vec<IncomeDto> {
    entries.into_iter().map(LedgerEntry::into_income_dto).collect()
}

/// Record an income.
///
/// `categoria` must name one of the user's income categories.
///
/// # Returns
/// - `201 Created` - Created income
/// - `400 Bad Request` - Invalid fields
/// - `404 Not Found` - No income category with that name
#[utoipa::path(
    post,
    path = "/receitas",
    tag = INCOME_TAG,
    security(("bearer" = [])),
    request_body = IncomeInputDto,
    responses(
        (status = 201, description = "Income created", body = IncomeDto),
        (status = 400, description = "Invalid fields", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_income(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppJson(payload): AppJson<IncomeInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require(&[]).await?;

    let input = LedgerEntryInput::from_income_dto(payload)?;
    let entry = LedgerService::new(&state.db, LedgerKind::Income)
        .create(&user.id, input)
        .await?;

    Ok((StatusCode::CREATED, Json(entry.into_income_dto())))
}

/// GET /receitas - All incomes of the authenticated user ordered by date
#[utoipa::path(
    get,
    path = "/receitas",
    tag = INCOME_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "User incomes", body = Vec<IncomeDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_all_incomes(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require(&[]).await?;

    let entries = LedgerService::new(&state.db, LedgerKind::Income)
        .get_all(&user.id)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(entries))))
}

/// GET /receitas/{id} - One income of the authenticated user
#[utoipa::path(
    get,
    path = "/receitas/{id}",
    tag = INCOME_TAG,
    security(("bearer" = [])),
    params(
        ("id" = String, Path, description = "Income UUID")
    ),
    responses(
        (status = 200, description = "Income", body = IncomeDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Income of another user", body = ErrorDto),
        (status = 404, description = "Income not found", body = ErrorDto)
    ),
)]
pub async fn get_income(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require(&[]).await?;

    let entry = LedgerService::new(&state.db, LedgerKind::Income)
        .get(&user.id, &id)
        .await?;

    Ok((StatusCode::OK, Json(entry.into_income_dto())))
}

/// Replace an income.
///
/// # Returns
/// - `200 OK` - Updated income
/// - `400 Bad Request` - Invalid fields
/// - `403 Forbidden` - Income of another user
/// - `404 Not Found` - Unknown income or category
#[utoipa::path(
    put,
    path = "/receitas/{id}",
    tag = INCOME_TAG,
    security(("bearer" = [])),
    params(
        ("id" = String, Path, description = "Income UUID")
    ),
    request_body = IncomeInputDto,
    responses(
        (status = 200, description = "Income updated", body = IncomeDto),
        (status = 400, description = "Invalid fields", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Income of another user", body = ErrorDto),
        (status = 404, description = "Income or category not found", body = ErrorDto)
    ),
)]
pub async fn update_income(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    AppJson(payload): AppJson<IncomeInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require(&[]).await?;

    let input = LedgerEntryInput::from_income_dto(payload)?;
    let entry = LedgerService::new(&state.db, LedgerKind::Income)
        .update(&user.id, &id, input)
        .await?;

    Ok((StatusCode::OK, Json(entry.into_income_dto())))
}

/// DELETE /receitas/{id} - Delete one income of the authenticated user
#[utoipa::path(
    delete,
    path = "/receitas/{id}",
    tag = INCOME_TAG,
    security(("bearer" = [])),
    params(
        ("id" = String, Path, description = "Income UUID")
    ),
    responses(
        (status = 204, description = "Income deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Income of another user", body = ErrorDto),
        (status = 404, description = "Income not found", body = ErrorDto)
    ),
)]
pub async fn delete_income(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require(&[]).await?;

    LedgerService::new(&state.db, LedgerKind::Income)
        .delete(&user.id, &id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /receitas/por-intervalo-de-datas - Incomes dated between `inicio` and `fim`
#[utoipa::path(
    get,
    path = "/receitas/por-intervalo-de-datas",
    tag = INCOME_TAG,
    security(("bearer" = [])),
    params(DateRangeParams),
    responses(
        (status = 200, description = "Incomes in the range", body = Vec<IncomeDto>),
        (status = 400, description = "Invalid or inverted dates", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_incomes_by_date_range(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppQuery(params): AppQuery<DateRangeParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require(&[]).await?;

    let start = parse_date(&params.inicio)?;
    let end = parse_date(&params.fim)?;
    let entries = LedgerService::new(&state.db, LedgerKind::Income)
        .get_by_date_range(&user.id, start, end)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(entries))))
}

/// GET /receitas/por-intervalo-de-valores - Incomes with an amount between `min` and `max`
#[utoipa::path(
    get,
    path = "/receitas/por-intervalo-de-valores",
    tag = INCOME_TAG,
    security(("bearer" = [])),
    params(AmountRangeParams),
    responses(
        (status = 200, description = "Incomes in the range", body = Vec<IncomeDto>),
        (status = 400, description = "Invalid, non-positive or inverted bounds", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_incomes_by_amount_range(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppQuery(params): AppQuery<AmountRangeParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require(&[]).await?;

    let min = parse_decimal("min", &params.min)?;
    let max = parse_decimal("max", &params.max)?;
    let entries = LedgerService::new(&state.db, LedgerKind::Income)
        .get_by_amount_range(&user.id, min, max)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(entries))))
}

/// GET /receitas/grafico-pizza - Income totals per category between two dates
#[utoipa::path(
    get,
    path = "/receitas/grafico-pizza",
    tag = INCOME_TAG,
    security(("bearer" = [])),
    params(DateRangeParams),
    responses(
        (status = 200, description = "Totals per category", body = PieChartDto),
        (status = 400, description = "Invalid or inverted dates", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_income_pie_chart(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppQuery(params): AppQuery<DateRangeParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require(&[]).await?;

    let start = parse_date(&params.inicio)?;
    let end = parse_date(&params.fim)?;
    let categorias = LedgerService::new(&state.db, LedgerKind::Income)
        .pie_chart(&user.id, start, end)
        .await?;

    Ok((StatusCode::OK, Json(PieChartDto { categorias })))
}

/// GET /receitas/grafico-barras - Income totals per month between two periods
#[utoipa::path(
    get,
    path = "/receitas/grafico-barras",
    tag = INCOME_TAG,
    security(("bearer" = [])),
    params(PeriodRangeParams),
    responses(
        (status = 200, description = "Totals per month", body = BarChartDto),
        (status = 400, description = "Invalid or inverted periods", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_income_bar_chart(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppQuery(params): AppQuery<PeriodRangeParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require(&[]).await?;

    let start = parse_year_month(&params.inicio)?;
    let end = parse_year_month(&params.fim)?;
    let dados_mensais = LedgerService::new(&state.db, LedgerKind::Income)
        .bar_chart(&user.id, start, end)
        .await?;

    Ok((StatusCode::OK, Json(BarChartDto { dados_mensais })))
}
