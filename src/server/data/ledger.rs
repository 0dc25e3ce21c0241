//! Storage abstraction shared by incomes and expenses.
//!
//! Both tables have the same shape, so the service layer works against the
//! `LedgerRepository` trait and picks the income or expense implementation by kind.

use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::{expense::ExpenseRepository, income::IncomeRepository},
    model::ledger::{LedgerEntry, LedgerKind, SaveLedgerEntryParams},
};

/// Database operations on one ledger (incomes or expenses).
///
/// Every returned entry carries the name of its category.
#[async_trait]
pub trait LedgerRepository: Send + Sync {
    /// Inserts a new entry with a fresh UUID.
    async fn create(&self, params: SaveLedgerEntryParams) -> Result<LedgerEntry, DbErr>;

    /// Retrieves an entry by id regardless of owner.
    async fn find_by_id(&self, id: &str) -> Result<Option<LedgerEntry>, DbErr>;

    /// Lists every entry of a user by date ascending, same-day entries in insertion order.
    async fn find_by_user(&self, user_id: &str) -> Result<Vec<LedgerEntry>, DbErr>;

    /// Lists the entries of a user dated within `start..=end`, in the same order as `find_by_user`.
    async fn find_by_user_between(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<LedgerEntry>, DbErr>;

    /// Replaces the fields of an existing entry.
    ///
    /// Returns `None` when no entry has that id.
    async fn update(
        &self,
        id: &str,
        params: SaveLedgerEntryParams,
    ) -> Result<Option<LedgerEntry>, DbErr>;

    /// Deletes an entry, returning whether a row was removed.
    async fn delete(&self, id: &str) -> Result<bool, DbErr>;
}

/// Returns the repository backing the given ledger.
pub fn repository_for<'a>(
    db: &'a DatabaseConnection,
    kind: LedgerKind,
) -> Box<dyn LedgerRepository + 'a> {
    match kind {
        LedgerKind::Income => Box::new(IncomeRepository::new(db)),
        LedgerKind::Expense => Box::new(ExpenseRepository::new(db)),
    }
}
