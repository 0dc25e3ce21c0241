//! Monthly budget service.

use sea_orm::DatabaseConnection;

use crate::{
    model::period::YearMonth,
    server::{
        data::budget::MonthlyBudgetRepository,
        error::{budget::BudgetError, AppError},
        model::{
            budget::{MonthlyBudget, MonthlyBudgetInput, SaveMonthlyBudgetParams},
            category::CategoryKind,
        },
        service::category::CategoryService,
    },
};

pub struct MonthlyBudgetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MonthlyBudgetService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sets a spending limit on one of the user's expense categories for a month.
    ///
    /// # Returns
    /// - `Ok(MonthlyBudget)` - Created budget
    /// - `Err(AppError::CategoryErr(NameNotFound))` - No expense category with that name
    /// - `Err(AppError::BudgetErr(AlreadyExists))` - Category already budgeted for the month
    pub async fn create(
        &self,
        user_id: &str,
        input: MonthlyBudgetInput,
    ) -> Result<MonthlyBudget, AppError> {
        let params = self.resolve(user_id, input, None).await?;

        Ok(MonthlyBudgetRepository::new(self.db).create(params).await?)
    }

    /// All budgets of the user.
    ///
    /// # Returns
    /// - `Ok(Vec<MonthlyBudget>)` - At least one budget
    /// - `Err(AppError::BudgetErr(NoneForUser))` - The user has no budgets
    pub async fn get_all(&self, user_id: &str) -> Result<Vec<MonthlyBudget>, AppError> {
        let budgets = MonthlyBudgetRepository::new(self.db)
            .find_by_user(user_id)
            .await?;

        if budgets.is_empty() {
            return Err(BudgetError::NoneForUser.into());
        }

        Ok(budgets)
    }

    /// Budgets of the user for one month.
    ///
    /// # Returns
    /// - `Ok(Vec<MonthlyBudget>)` - At least one budget
    /// - `Err(AppError::BudgetErr(NoneForPeriod))` - Nothing budgeted in that month
    pub async fn get_by_period(
        &self,
        user_id: &str,
        period: YearMonth,
    ) -> Result<Vec<MonthlyBudget>, AppError> {
        let budgets = MonthlyBudgetRepository::new(self.db)
            .find_by_user_and_period(user_id, period)
            .await?;

        if budgets.is_empty() {
            return Err(BudgetError::NoneForPeriod(period).into());
        }

        Ok(budgets)
    }

    /// One of the user's budgets. Budgets of other users are reported as not found.
    pub async fn get(&self, user_id: &str, id: &str) -> Result<MonthlyBudget, AppError> {
        MonthlyBudgetRepository::new(self.db)
            .find_by_id(id)
            .await?
            .filter(|budget| budget.user_id == user_id)
            .ok_or_else(|| BudgetError::NotFound(id.to_string()).into())
    }

    /// Replaces category, limit and period of one of the user's budgets.
    ///
    /// The duplicate check ignores the budget being updated.
    pub async fn update(
        &self,
        user_id: &str,
        id: &str,
        input: MonthlyBudgetInput,
    ) -> Result<MonthlyBudget, AppError> {
        self.get(user_id, id).await?;
        let params = self.resolve(user_id, input, Some(id)).await?;

        MonthlyBudgetRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| BudgetError::NotFound(id.to_string()).into())
    }

    pub async fn delete(&self, user_id: &str, id: &str) -> Result<(), AppError> {
        self.get(user_id, id).await?;
        MonthlyBudgetRepository::new(self.db).delete(id).await?;

        Ok(())
    }

    async fn resolve(
        &self,
        user_id: &str,
        input: MonthlyBudgetInput,
        exclude_id: Option<&str>,
    ) -> Result<SaveMonthlyBudgetParams, AppError> {
        let category = CategoryService::new(self.db)
            .find_by_name(user_id, &input.category_name, CategoryKind::Expense)
            .await?;

        if MonthlyBudgetRepository::new(self.db)
            .exists(user_id, &category.id, input.period, exclude_id)
            .await?
        {
            return Err(BudgetError::AlreadyExists {
                category: category.name,
                period: input.period,
            }
            .into());
        }

        Ok(SaveMonthlyBudgetParams {
            user_id: user_id.to_string(),
            category_id: category.id,
            limit_amount: input.limit_amount,
            period: input.period,
        })
    }
}
