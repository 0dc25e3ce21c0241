//! Category data repository.
//!
//! Provides `CategoryRepository` for per-user income and expense categories, including
//! lookup of the "Sem Categoria" fallback and the reassignment performed when a category
//! is deleted.

use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::{
    data::unique_violation,
    error::{category::CategoryError, AppError},
    model::category::{Category, CategoryKind, CreateCategoryParams},
};

pub struct CategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CategoryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a category with a fresh UUID.
    ///
    /// # Returns
    /// - `Ok(Category)` - The created category
    /// - `Err(AppError::CategoryErr(AlreadyExists))` - Same name and kind already used
    /// - `Err(AppError::DbErr)` - Any other database error
    pub async fn create(&self, params: CreateCategoryParams) -> Result<Category, AppError> {
        let name = params.name.clone();

        let entity = entity::category::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            user_id: ActiveValue::Set(params.user_id),
            name: ActiveValue::Set(params.name),
            kind: ActiveValue::Set(params.kind.into_entity()),
            uncategorized: ActiveValue::Set(params.uncategorized),
        }
        .insert(self.db)
        .await
        .map_err(|err| duplicate_name(err, name))?;

        Ok(Category::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Category>, DbErr> {
        let entity = entity::prelude::Category::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Category::from_entity))
    }

    /// Gets every category of a user ordered by kind then name.
    pub async fn find_by_user(&self, user_id: &str) -> Result<Vec<Category>, DbErr> {
        let entities = entity::prelude::Category::find()
            .filter(entity::category::Column::UserId.eq(user_id))
            .order_by_asc(entity::category::Column::Kind)
            .order_by_asc(entity::category::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Category::from_entity).collect())
    }

    /// Gets the categories of one kind owned by a user, ordered by name.
    pub async fn find_by_user_and_kind(
        &self,
        user_id: &str,
        kind: CategoryKind,
    ) -> Result<Vec<Category>, DbErr> {
        let entities = entity::prelude::Category::find()
            .filter(entity::category::Column::UserId.eq(user_id))
            .filter(entity::category::Column::Kind.eq(kind.into_entity()))
            .order_by_asc(entity::category::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Category::from_entity).collect())
    }

    /// Finds a user's category of the given kind by exact name.
    ///
    /// # Returns
    /// - `Ok(Some(Category))` - Category found
    /// - `Ok(None)` - The user has no category with that name and kind
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_user_name_kind(
        &self,
        user_id: &str,
        name: &str,
        kind: CategoryKind,
    ) -> Result<Option<Category>, DbErr> {
        let entity = entity::prelude::Category::find()
            .filter(entity::category::Column::UserId.eq(user_id))
            .filter(entity::category::Column::Name.eq(name))
            .filter(entity::category::Column::Kind.eq(kind.into_entity()))
            .one(self.db)
            .await?;

        Ok(entity.map(Category::from_entity))
    }

    /// Checks whether the user already has a category with this name and kind.
    ///
    /// # Arguments
    /// - `exclude_id` - Category to ignore, used when renaming
    pub async fn exists_with_name(
        &self,
        user_id: &str,
        name: &str,
        kind: CategoryKind,
        exclude_id: Option<&str>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Category::find()
            .filter(entity::category::Column::UserId.eq(user_id))
            .filter(entity::category::Column::Name.eq(name))
            .filter(entity::category::Column::Kind.eq(kind.into_entity()));

        if let Some(id) = exclude_id {
            query = query.filter(entity::category::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Finds the user's "Sem Categoria" fallback of the given kind.
    pub async fn find_uncategorized(
        &self,
        user_id: &str,
        kind: CategoryKind,
    ) -> Result<Option<Category>, DbErr> {
        let entity = entity::prelude::Category::find()
            .filter(entity::category::Column::UserId.eq(user_id))
            .filter(entity::category::Column::Kind.eq(kind.into_entity()))
            .filter(entity::category::Column::Uncategorized.eq(true))
            .one(self.db)
            .await?;

        Ok(entity.map(Category::from_entity))
    }

    /// Renames a category.
    ///
    /// # Returns
    /// - `Ok(Some(Category))` - Renamed category
    /// - `Ok(None)` - No category with that id
    /// - `Err(AppError::CategoryErr(AlreadyExists))` - Name taken within the same kind
    /// - `Err(AppError::DbErr)` - Any other database error
    pub async fn rename(&self, id: &str, name: String) -> Result<Option<Category>, AppError> {
        let Some(entity) = entity::prelude::Category::find_by_id(id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::category::ActiveModel = entity.into();
        active_model.name = ActiveValue::Set(name.clone());

        let entity = active_model
            .update(self.db)
            .await
            .map_err(|err| duplicate_name(err, name))?;

        Ok(Some(Category::from_entity(entity)))
    }

    /// Moves every income and expense of `from_id` to `to_id`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of entries moved across both tables
    /// - `Err(DbErr)` - Database error during update
    pub async fn reassign_entries(&self, from_id: &str, to_id: &str) -> Result<u64, DbErr> {
        let incomes = entity::prelude::Income::update_many()
            .col_expr(entity::income::Column::CategoryId, Expr::value(to_id))
            .filter(entity::income::Column::CategoryId.eq(from_id))
            .exec(self.db)
            .await?;

        let expenses = entity::prelude::Expense::update_many()
            .col_expr(entity::expense::Column::CategoryId, Expr::value(to_id))
            .filter(entity::expense::Column::CategoryId.eq(from_id))
            .exec(self.db)
            .await?;

        Ok(incomes.rows_affected + expenses.rows_affected)
    }

    /// Deletes a category together with the budgets set on it.
    ///
    /// Entries must have been moved away first with `reassign_entries`.
    ///
    /// # Returns
    /// - `Ok(true)` - Category deleted
    /// - `Ok(false)` - No category with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        entity::prelude::MonthlyBudget::delete_many()
            .filter(entity::monthly_budget::Column::CategoryId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Category::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

fn duplicate_name(err: DbErr, name: String) -> AppError {
    match unique_violation(&err) {
        Some(_) => CategoryError::AlreadyExists(name).into(),
        None => err.into(),
    }
}
