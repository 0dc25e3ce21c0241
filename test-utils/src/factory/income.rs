//! Income factory for creating test income entries.

use crate::factory::helpers::next_uuid;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating income entries owned by a user.
pub struct IncomeFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    user_id: String,
    category_id: String,
    date: NaiveDate,
    amount: Decimal,
    source: String,
    notes: String,
}

impl<'a> IncomeFactory<'a> {
    /// Creates a new IncomeFactory with default values.
    ///
    /// Defaults:
    /// - date: `2024-01-15`
    /// - amount: `100.00`
    /// - source: `Salário`
    /// - notes: `"Lançamento de teste"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Owner of the entry (must exist)
    /// - `category_id` - Category of the entry (must exist)
    pub fn new(db: &'a DatabaseConnection, user_id: &str, category_id: &str) -> Self {
        Self {
            db,
            id: next_uuid("income"),
            user_id: user_id.to_string(),
            category_id: category_id.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap_or_default(),
            amount: Decimal::new(10_000, 2),
            source: "Salário".to_string(),
            notes: "Lançamento de teste".to_string(),
        }
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn amount(mut self, amount: Decimal) -> Self {
        self.amount = amount;
        self
    }

    /// Sets the payer recorded on the entry.
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Builds and inserts the income entity into the database.
    pub async fn build(self) -> Result<entity::income::Model, DbErr> {
        entity::income::ActiveModel {
            id: ActiveValue::Set(self.id),
            user_id: ActiveValue::Set(self.user_id),
            category_id: ActiveValue::Set(self.category_id),
            date: ActiveValue::Set(self.date),
            amount: ActiveValue::Set(self.amount.to_string()),
            source: ActiveValue::Set(self.source),
            notes: ActiveValue::Set(self.notes),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an income entry with default values.
pub async fn create_income(
    db: &DatabaseConnection,
    user_id: &str,
    category_id: &str,
) -> Result<entity::income::Model, DbErr> {
    IncomeFactory::new(db, user_id, category_id).build().await
}
