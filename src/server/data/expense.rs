//! Expense repository backed by the `expense` table.

use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{
    sea_query::{Alias, Expr},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::{
    data::ledger::LedgerRepository,
    model::ledger::{LedgerEntry, SaveLedgerEntryParams},
};

pub struct ExpenseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ExpenseRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads an expense together with its category.
    async fn find_with_category(&self, id: &str) -> Result<Option<LedgerEntry>, DbErr> {
        let result = entity::prelude::Expense::find_by_id(id.to_string())
            .find_also_related(entity::prelude::Category)
            .one(self.db)
            .await?;

        result
            .map(|(expense, category)| LedgerEntry::from_expense(expense, category))
            .transpose()
            .map_err(DbErr::Custom)
    }
}

/// SQLite row id, which follows insertion order and breaks ties between same-day entries.
fn insertion_order() -> Expr {
    Expr::col((entity::prelude::Expense, Alias::new("rowid")))
}

fn convert_all(
    results: Vec<(entity::expense::Model, Option<entity::category::Model>)>,
) -> Result<Vec<LedgerEntry>, DbErr> {
    results
        .into_iter()
        .map(|(expense, category)| LedgerEntry::from_expense(expense, category))
        .collect::<Result<Vec<_>, _>>()
        .map_err(DbErr::Custom)
}

#[async_trait]
impl LedgerRepository for ExpenseRepository<'_> {
    async fn create(&self, params: SaveLedgerEntryParams) -> Result<LedgerEntry, DbErr> {
        let id = Uuid::new_v4().to_string();

        entity::expense::ActiveModel {
            id: ActiveValue::Set(id.clone()),
            user_id: ActiveValue::Set(params.user_id),
            category_id: ActiveValue::Set(params.category_id),
            date: ActiveValue::Set(params.date),
            amount: ActiveValue::Set(params.amount.to_string()),
            destination: ActiveValue::Set(params.counterparty),
            notes: ActiveValue::Set(params.notes),
        }
        .insert(self.db)
        .await?;

        self.find_with_category(&id).await?.ok_or(DbErr::RecordNotFound(format!(
            "Expense with id {} not found after creation",
            id
        )))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<LedgerEntry>, DbErr> {
        self.find_with_category(id).await
    }

    async fn find_by_user(&self, user_id: &str) -> Result<Vec<LedgerEntry>, DbErr> {
        let results = entity::prelude::Expense::find()
            .filter(entity::expense::Column::UserId.eq(user_id))
            .order_by_asc(entity::expense::Column::Date)
            .order_by_asc(insertion_order())
            .find_also_related(entity::prelude::Category)
            .all(self.db)
            .await?;

        convert_all(results)
    }

    async fn find_by_user_between(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<LedgerEntry>, DbErr> {
        let results = entity::prelude::Expense::find()
            .filter(entity::expense::Column::UserId.eq(user_id))
            .filter(entity::expense::Column::Date.between(start, end))
            .order_by_asc(entity::expense::Column::Date)
            .order_by_asc(insertion_order())
            .find_also_related(entity::prelude::Category)
            .all(self.db)
            .await?;

        convert_all(results)
    }

    async fn update(
        &self,
        id: &str,
        params: SaveLedgerEntryParams,
    ) -> Result<Option<LedgerEntry>, DbErr> {
        let Some(entity) = entity::prelude::Expense::find_by_id(id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::expense::ActiveModel = entity.into();
        active_model.category_id = ActiveValue::Set(params.category_id);
        active_model.date = ActiveValue::Set(params.date);
        active_model.amount = ActiveValue::Set(params.amount.to_string());
        active_model.destination = ActiveValue::Set(params.counterparty);
        active_model.notes = ActiveValue::Set(params.notes);
        active_model.update(self.db).await?;

        self.find_with_category(id).await
    }

    async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Expense::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
