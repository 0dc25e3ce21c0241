//! Expense factory for creating test expense entries.

use crate::factory::helpers::next_uuid;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating expense entries owned by a user.
pub struct ExpenseFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    user_id: String,
    category_id: String,
    date: NaiveDate,
    amount: Decimal,
    destination: String,
    notes: String,
}

impl<'a> ExpenseFactory<'a> {
    /// Creates a new ExpenseFactory with default values.
    ///
    /// Defaults:
    /// - date: `2024-01-15`
    /// - amount: `100.00`
    /// - destination: `Mercado`
    /// - notes: `"Lançamento de teste"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Owner of the entry (must exist)
    /// - `category_id` - Category of the entry (must exist)
    pub fn new(db: &'a DatabaseConnection, user_id: &str, category_id: &str) -> Self {
        Self {
            db,
            id: next_uuid("expense"),
            user_id: user_id.to_string(),
            category_id: category_id.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap_or_default(),
            amount: Decimal::new(10_000, 2),
            destination: "Mercado".to_string(),
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

    /// Sets the payee recorded on the entry.
    pub fn destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = destination.into();
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Builds and inserts the expense entity into the database.
    pub async fn build(self) -> Result<entity::expense::Model, DbErr> {
        entity::expense::ActiveModel {
            id: ActiveValue::Set(self.id),
            user_id: ActiveValue::Set(self.user_id),
            category_id: ActiveValue::Set(self.category_id),
            date: ActiveValue::Set(self.date),
            amount: ActiveValue::Set(self.amount.to_string()),
            destination: ActiveValue::Set(self.destination),
            notes: ActiveValue::Set(self.notes),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an expense entry with default values.
pub async fn create_expense(
    db: &DatabaseConnection,
    user_id: &str,
    category_id: &str,
) -> Result<entity::expense::Model, DbErr> {
    ExpenseFactory::new(db, user_id, category_id).build().await
}
