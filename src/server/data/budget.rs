//! Monthly budget repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::{
    model::period::YearMonth,
    server::{
        data::unique_violation,
        error::{budget::BudgetError, AppError},
        model::budget::{MonthlyBudget, SaveMonthlyBudgetParams},
    },
};

pub struct MonthlyBudgetRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MonthlyBudgetRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a budget with a fresh UUID.
    ///
    /// # Returns
    /// - `Ok(MonthlyBudget)` - Created budget with its category name
    /// - `Err(AppError::BudgetErr(AlreadyExists))` - Category already budgeted for the month
    /// - `Err(AppError::DbErr)` - Any other database error
    pub async fn create(&self, params: SaveMonthlyBudgetParams) -> Result<MonthlyBudget, AppError> {
        let id = Uuid::new_v4().to_string();
        let category_id = params.category_id.clone();
        let period = params.period;

        let inserted = entity::monthly_budget::ActiveModel {
            id: ActiveValue::Set(id.clone()),
            user_id: ActiveValue::Set(params.user_id),
            category_id: ActiveValue::Set(params.category_id),
            limit_amount: ActiveValue::Set(params.limit_amount.to_string()),
            period: ActiveValue::Set(params.period.to_string()),
        }
        .insert(self.db)
        .await;
        if let Err(err) = inserted {
            return Err(self.duplicate_error(err, &category_id, period).await);
        }

        self.find_by_id(&id).await?.ok_or_else(|| {
            DbErr::RecordNotFound(format!(
                "Monthly budget with id {} not found after creation",
                id
            ))
            .into()
        })
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<MonthlyBudget>, DbErr> {
        let result = entity::prelude::MonthlyBudget::find_by_id(id.to_string())
            .find_also_related(entity::prelude::Category)
            .one(self.db)
            .await?;

        result
            .map(|(budget, category)| MonthlyBudget::from_entity(budget, category))
            .transpose()
            .map_err(DbErr::Custom)
    }

    /// Gets all budgets of a user ordered by period then category name.
    pub async fn find_by_user(&self, user_id: &str) -> Result<Vec<MonthlyBudget>, DbErr> {
        let results = entity::prelude::MonthlyBudget::find()
            .filter(entity::monthly_budget::Column::UserId.eq(user_id))
            .order_by_asc(entity::monthly_budget::Column::Period)
            .find_also_related(entity::prelude::Category)
            .order_by_asc(entity::category::Column::Name)
            .all(self.db)
            .await?;

        Self::convert_all(results)
    }

    /// Gets the budgets of a user for one month ordered by category name.
    pub async fn find_by_user_and_period(
        &self,
        user_id: &str,
        period: YearMonth,
    ) -> Result<Vec<MonthlyBudget>, DbErr> {
        let results = entity::prelude::MonthlyBudget::find()
            .filter(entity::monthly_budget::Column::UserId.eq(user_id))
            .filter(entity::monthly_budget::Column::Period.eq(period.to_string()))
            .find_also_related(entity::prelude::Category)
            .order_by_asc(entity::category::Column::Name)
            .all(self.db)
            .await?;

        Self::convert_all(results)
    }

    /// Checks for a budget on the same category and month.
    ///
    /// # Arguments
    /// - `exclude_id` - Budget to ignore, used when updating
    pub async fn exists(
        &self,
        user_id: &str,
        category_id: &str,
        period: YearMonth,
        exclude_id: Option<&str>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::MonthlyBudget::find()
            .filter(entity::monthly_budget::Column::UserId.eq(user_id))
            .filter(entity::monthly_budget::Column::CategoryId.eq(category_id))
            .filter(entity::monthly_budget::Column::Period.eq(period.to_string()));

        if let Some(id) = exclude_id {
            query = query.filter(entity::monthly_budget::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Replaces category, limit and period of a budget.
    ///
    /// # Returns
    /// - `Ok(Some(MonthlyBudget))` - Updated budget
    /// - `Ok(None)` - No budget with that id
    /// - `Err(AppError::BudgetErr(AlreadyExists))` - Another budget holds the category and month
    /// - `Err(AppError::DbErr)` - Any other database error
    pub async fn update(
        &self,
        id: &str,
        params: SaveMonthlyBudgetParams,
    ) -> Result<Option<MonthlyBudget>, AppError> {
        let Some(entity) = entity::prelude::MonthlyBudget::find_by_id(id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::monthly_budget::ActiveModel = entity.into();
        active_model.category_id = ActiveValue::Set(params.category_id.clone());
        active_model.limit_amount = ActiveValue::Set(params.limit_amount.to_string());
        active_model.period = ActiveValue::Set(params.period.to_string());
        if let Err(err) = active_model.update(self.db).await {
            return Err(self
                .duplicate_error(err, &params.category_id, params.period)
                .await);
        }

        Ok(self.find_by_id(id).await?)
    }

    /// Maps a unique violation on (user, category, period) to `BudgetError::AlreadyExists`,
    /// naming the category when it can still be loaded.
    async fn duplicate_error(&self, err: DbErr, category_id: &str, period: YearMonth) -> AppError {
        if unique_violation(&err).is_none() {
            return err.into();
        }

        let category = match entity::prelude::Category::find_by_id(category_id.to_string())
            .one(self.db)
            .await
        {
            Ok(Some(category)) => category.name,
            Ok(None) => category_id.to_string(),
            Err(lookup_err) => return lookup_err.into(),
        };

        BudgetError::AlreadyExists { category, period }.into()
    }

    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::MonthlyBudget::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    fn convert_all(
        results: Vec<(
            entity::monthly_budget::Model,
            Option<entity::category::Model>,
        )>,
    ) -> Result<Vec<MonthlyBudget>, DbErr> {
        results
            .into_iter()
            .map(|(budget, category)| MonthlyBudget::from_entity(budget, category))
            .collect::<Result<Vec<_>, _>>()
            .map_err(DbErr::Custom)
    }
}
