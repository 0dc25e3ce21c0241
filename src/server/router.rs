use axum::{
    http::HeaderValue,
    routing::{get, patch, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::ErrorDto,
        auth::{LoginDto, RegisterUserDto, TokenDto},
        budget::{MonthlyBudgetDto, MonthlyBudgetInputDto},
        category::{CategoryDto, CreateCategoryDto, RenameCategoryDto},
        chart::{BarChartDto, PieChartDto},
        dashboard::PeriodTotalDto,
        expense::{ExpenseDto, ExpenseInputDto},
        income::{IncomeDto, IncomeInputDto},
        user::{UpdateUserStatusDto, UserDto},
    },
    server::{
        controller::{auth, budget, category, dashboard, expense, income, user},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Gestor Financeiro API", description = "Personal incomes, expenses and budgets"),
    paths(
        auth::register,
        auth::login,
        user::get_current_user,
        user::get_all_users,
        user::update_user_status,
        category::create_category,
        category::get_all_categories,
        category::get_income_categories,
        category::get_expense_categories,
        category::rename_category,
        category::delete_category,
        income::create_income,
        income::get_all_incomes,
        income::get_income,
        income::update_income,
        income::delete_income,
        income::get_incomes_by_date_range,
        income::get_incomes_by_amount_range,
        income::get_income_pie_chart,
        income::get_income_bar_chart,
        expense::create_expense,
        expense::get_all_expenses,
        expense::get_expense,
        expense::update_expense,
        expense::delete_expense,
        expense::get_expenses_by_date_range,
        expense::get_expenses_by_amount_range,
        expense::get_expense_pie_chart,
        expense::get_expense_bar_chart,
        budget::create_budget,
        budget::get_all_budgets,
        budget::get_budgets_by_period,
        budget::get_budget,
        budget::update_budget,
        budget::delete_budget,
        dashboard::get_balance,
        dashboard::get_income_total,
        dashboard::get_expense_total,
        dashboard::get_largest_income,
        dashboard::get_largest_expense,
        dashboard::get_top_income_category,
        dashboard::get_top_expense_category,
    ),
    components(schemas(
        ErrorDto,
        RegisterUserDto,
        LoginDto,
        TokenDto,
        UserDto,
        UpdateUserStatusDto,
        CategoryDto,
        CreateCategoryDto,
        RenameCategoryDto,
        IncomeDto,
        IncomeInputDto,
        ExpenseDto,
        ExpenseInputDto,
        MonthlyBudgetDto,
        MonthlyBudgetInputDto,
        PeriodTotalDto,
        PieChartDto,
        BarChartDto,
    )),
    modifiers(&BearerSecurity),
    tags(
        (name = "auth", description = "Registration and login"),
        (name = "user", description = "Authenticated user"),
        (name = "admin", description = "Account administration"),
        (name = "categoria", description = "Income and expense categories"),
        (name = "receita", description = "Incomes"),
        (name = "despesa", description = "Expenses"),
        (name = "orcamento-mensal", description = "Monthly budgets"),
        (name = "dashboard", description = "Monthly summaries"),
    )
)]
pub struct ApiDoc;

/// Registers the `bearer` scheme referenced by the protected paths.
struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Builds the CORS layer from the configured origins.
///
/// `*` allows any origin. Origins that are not valid header values are skipped with a
/// warning.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if allowed_origins.iter().any(|origin| origin == "*") {
        return layer.allow_origin(Any);
    }

    let origins = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Ignoring invalid CORS origin '{}': {}", origin, e);
                None
            }
        })
        .collect::<Vec<_>>();

    layer.allow_origin(origins)
}

pub fn router(allowed_origins: &[String]) -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/users/me", get(user::get_current_user))
        .route("/admin/users", get(user::get_all_users))
        .route("/admin/users/{id}", patch(user::update_user_status))
        .route(
            "/categorias",
            get(category::get_all_categories).post(category::create_category),
        )
        .route("/categorias/receitas", get(category::get_income_categories))
        .route("/categorias/despesas", get(category::get_expense_categories))
        .route(
            "/categorias/{id}",
            patch(category::rename_category).delete(category::delete_category),
        )
        .route(
            "/receitas",
            get(income::get_all_incomes).post(income::create_income),
        )
        .route(
            "/receitas/por-intervalo-de-datas",
            get(income::get_incomes_by_date_range),
        )
        .route(
            "/receitas/por-intervalo-de-valores",
            get(income::get_incomes_by_amount_range),
        )
        .route("/receitas/grafico-pizza", get(income::get_income_pie_chart))
        .route("/receitas/grafico-barras", get(income::get_income_bar_chart))
        .route(
            "/receitas/{id}",
            get(income::get_income)
                .put(income::update_income)
                .delete(income::delete_income),
        )
        .route(
            "/despesas",
            get(expense::get_all_expenses).post(expense::create_expense),
        )
        .route(
            "/despesas/por-intervalo-de-datas",
            get(expense::get_expenses_by_date_range),
        )
        .route(
            "/despesas/por-intervalo-de-valores",
            get(expense::get_expenses_by_amount_range),
        )
        .route("/despesas/grafico-pizza", get(expense::get_expense_pie_chart))
        .route("/despesas/grafico-barras", get(expense::get_expense_bar_chart))
        .route(
            "/despesas/{id}",
            get(expense::get_expense)
                .put(expense::update_expense)
                .delete(expense::delete_expense),
        )
        .route(
            "/orcamento-mensal",
            get(budget::get_all_budgets).post(budget::create_budget),
        )
        .route(
            "/orcamento-mensal/periodo/{periodo}",
            get(budget::get_budgets_by_period),
        )
        .route(
            "/orcamento-mensal/{id}",
            get(budget::get_budget)
                .put(budget::update_budget)
                .delete(budget::delete_budget),
        )
        .route("/dashboard/saldo-total", get(dashboard::get_balance))
        .route("/dashboard/receita-total", get(dashboard::get_income_total))
        .route("/dashboard/despesa-total", get(dashboard::get_expense_total))
        .route("/dashboard/maior-receita", get(dashboard::get_largest_income))
        .route("/dashboard/maior-despesa", get(dashboard::get_largest_expense))
        .route(
            "/dashboard/categoria-maior-receita",
            get(dashboard::get_top_income_category),
        )
        .route(
            "/dashboard/categoria-maior-despesa",
            get(dashboard::get_top_expense_category),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
}
