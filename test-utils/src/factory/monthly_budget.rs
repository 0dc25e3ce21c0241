//! Monthly budget factory for creating spending limits.

use crate::factory::helpers::next_uuid;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating monthly budgets on an expense category.
pub struct MonthlyBudgetFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    user_id: String,
    category_id: String,
    limit_amount: Decimal,
    period: String,
}

impl<'a> MonthlyBudgetFactory<'a> {
    /// Creates a new MonthlyBudgetFactory with default values.
    ///
    /// Defaults:
    /// - limit_amount: `500.00`
    /// - period: `"2024-01"`
    pub fn new(db: &'a DatabaseConnection, user_id: &str, category_id: &str) -> Self {
        Self {
            db,
            id: next_uuid("budget"),
            user_id: user_id.to_string(),
            category_id: category_id.to_string(),
            limit_amount: Decimal::new(50_000, 2),
            period: "2024-01".to_string(),
        }
    }

    pub fn limit_amount(mut self, limit_amount: Decimal) -> Self {
        self.limit_amount = limit_amount;
        self
    }

    /// Sets the budget month, formatted as `YYYY-MM`.
    pub fn period(mut self, period: impl Into<String>) -> Self {
        self.period = period.into();
        self
    }

    /// Builds and inserts the budget entity into the database.
    pub async fn build(self) -> Result<entity::monthly_budget::Model, DbErr> {
        entity::monthly_budget::ActiveModel {
            id: ActiveValue::Set(self.id),
            user_id: ActiveValue::Set(self.user_id),
            category_id: ActiveValue::Set(self.category_id),
            limit_amount: ActiveValue::Set(self.limit_amount.to_string()),
            period: ActiveValue::Set(self.period),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a budget with default values.
pub async fn create_monthly_budget(
    db: &DatabaseConnection,
    user_id: &str,
    category_id: &str,
) -> Result<entity::monthly_budget::Model, DbErr> {
    MonthlyBudgetFactory::new(db, user_id, category_id)
        .build()
        .await
}
