//! Monthly summaries of the authenticated user's incomes and expenses.
//!
//! Every endpoint takes `periodo=YYYY-MM`.

use std::collections::BTreeMap;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use rust_decimal::Decimal;

use crate::{
    model::{
        api::ErrorDto, dashboard::PeriodTotalDto, expense::ExpenseDto, income::IncomeDto,
        period::YearMonth,
    },
    server::{
        controller::query::PeriodParams,
        error::AppError,
        middleware::auth::AuthGuard,
        model::{ledger::LedgerKind, user::User},
        service::dashboard::DashboardService,
        state::AppState,
        util::{extract::AppQuery, parse::parse_year_month},
    },
};

/// Tag for grouping dashboard endpoints in OpenAPI documentation
pub static DASHBOARD_TAG: &str = "dashboard";

async fn authenticate(
    state: &AppState,
    headers: &HeaderMap,
    params: &PeriodParams,
) -> Result<(User, YearMonth), AppError> {
    let user = AuthGuard::new(state, headers).require(&[]).await?;
    let period = parse_year_month(&params.periodo)?;

    Ok((user, period))
}

/// GET /dashboard/saldo-total - Incomes minus expenses of the month
#[utoipa::path(
    get,
    path = "/dashboard/saldo-total",
    tag = DASHBOARD_TAG,
    security(("bearer" = [])),
    params(PeriodParams),
    responses(
        (status = 200, description = "Balance of the month", body = PeriodTotalDto),
        (status = 400, description = "Invalid period", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_balance(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppQuery(params): AppQuery<PeriodParams>,
) -> Result<impl IntoResponse, AppError> {
    let (user, period) = authenticate(&state, &headers, &params).await?;

    let saldo = DashboardService::new(&state.db)
        .balance(&user.id, period)
        .await?;

    Ok((
        StatusCode::OK,
        Json(PeriodTotalDto {
            periodo: period,
            saldo,
        }),
    ))
}

/// GET /dashboard/receita-total - Sum of the month's incomes
#[utoipa::path(
    get,
    path = "/dashboard/receita-total",
    tag = DASHBOARD_TAG,
    security(("bearer" = [])),
    params(PeriodParams),
    responses(
        (status = 200, description = "Income total of the month", body = PeriodTotalDto),
        (status = 400, description = "Invalid period", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_income_total(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppQuery(params): AppQuery<PeriodParams>,
) -> Result<impl IntoResponse, AppError> {
    let (user, period) = authenticate(&state, &headers, &params).await?;

    let saldo = DashboardService::new(&state.db)
        .total(&user.id, LedgerKind::Income, period)
        .await?;

    Ok((
        StatusCode::OK,
        Json(PeriodTotalDto {
            periodo: period,
            saldo,
        }),
    ))
}

/// GET /dashboard/despesa-total - Sum of the month's expenses
#[utoipa::path(
    get,
    path = "/dashboard/despesa-total",
    tag = DASHBOARD_TAG,
    security(("bearer" = [])),
    params(PeriodParams),
    responses(
        (status = 200, description = "Expense total of the month", body = PeriodTotalDto),
        (status = 400, description = "Invalid period", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_expense_total(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppQuery(params): AppQuery<PeriodParams>,
) -> Result<impl IntoResponse, AppError> {
    let (user, period) = authenticate(&state, &headers, &params).await?;

    let saldo = DashboardService::new(&state.db)
        .total(&user.id, LedgerKind::Expense, period)
        .await?;

    Ok((
        StatusCode::OK,
        Json(PeriodTotalDto {
            periodo: period,
            saldo,
        }),
    ))
}

/// Largest income of the month.
///
/// # Returns
/// - `200 OK` - Income with the highest amount, the earliest one on ties
/// - `404 Not Found` - No incomes in the month
#[utoipa::path(
    get,
    path = "/dashboard/maior-receita",
    tag = DASHBOARD_TAG,
    security(("bearer" = [])),
    params(PeriodParams),
    responses(
        (status = 200, description = "Largest income", body = IncomeDto),
        (status = 400, description = "Invalid period", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No incomes in the month", body = ErrorDto)
    ),
)]
pub async fn get_largest_income(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppQuery(params): AppQuery<PeriodParams>,
) -> Result<impl IntoResponse, AppError> {
    let (user, period) = authenticate(&state, &headers, &params).await?;

    let entry = DashboardService::new(&state.db)
        .largest(&user.id, LedgerKind::Income, period)
        .await?;

    Ok((StatusCode::OK, Json(entry.into_income_dto())))
}

/// Largest expense of the month.
///
/// # Returns
/// - `200 OK` - Expense with the highest amount, the earliest one on ties
/// - `404 Not Found` - No expenses in the month
#[utoipa::path(
    get,
    path = "/dashboard/maior-despesa",
    tag = DASHBOARD_TAG,
    security(("bearer" = [])),
    params(PeriodParams),
    responses(
        (status = 200, description = "Largest expense", body = ExpenseDto),
        (status = 400, description = "Invalid period", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No expenses in the month", body = ErrorDto)
    ),
)]
pub async fn get_largest_expense(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppQuery(params): AppQuery<PeriodParams>,
) -> Result<impl IntoResponse, AppError> {
    let (user, period) = authenticate(&state, &headers, &params).await?;

    let entry = DashboardService::new(&state.db)
        .largest(&user.id, LedgerKind::Expense, period)
        .await?;

    Ok((StatusCode::OK, Json(entry.into_expense_dto())))
}

/// GET /dashboard/categoria-maior-receita - Income category with the highest total
///
/// Responds with an empty object when the month has no incomes.
#[utoipa::path(
    get,
    path = "/dashboard/categoria-maior-receita",
    tag = DASHBOARD_TAG,
    security(("bearer" = [])),
    params(PeriodParams),
    responses(
        (status = 200, description = "Category name and total", body = BTreeMap<String, f64>),
        (status = 400, description = "Invalid period", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_top_income_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppQuery(params): AppQuery<PeriodParams>,
) -> Result<impl IntoResponse, AppError> {
    let (user, period) = authenticate(&state, &headers, &params).await?;

    let top: BTreeMap<String, Decimal> = DashboardService::new(&state.db)
        .top_category(&user.id, LedgerKind::Income, period)
        .await?;

    Ok((StatusCode::OK, Json(top)))
}

/// GET /dashboard/categoria-maior-despesa - Expense category with the highest total
///
/// Responds with an empty object when the month has no expenses.
#[utoipa::path(
    get,
    path = "/dashboard/categoria-maior-despesa",
    tag = DASHBOARD_TAG,
    security(("bearer" = [])),
    params(PeriodParams),
    responses(
        (status = 200, description = "Category name and total", body = BTreeMap<String, f64>),
        (status = 400, description = "Invalid period", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_top_expense_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppQuery(params): AppQuery<PeriodParams>,
) -> Result<impl IntoResponse, AppError> {
    let (user, period) = authenticate(&state, &headers, &params).await?;

    let top: BTreeMap<String, Decimal> = DashboardService::new(&state.db)
        .top_category(&user.id, LedgerKind::Expense, period)
        .await?;

    Ok((StatusCode::OK, Json(top)))
}
