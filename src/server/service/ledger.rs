//! Income and expense service.
//!
//! `LedgerService` implements the operations shared by `/receitas` and `/despesas`
//! over a `LedgerRepository`: ownership-checked CRUD, range queries and the totals
//! behind the charts and the dashboard. Amounts are stored as decimal text and summed
//! as `Decimal` values in memory.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

use crate::{
    model::period::YearMonth,
    server::{
        data::ledger::{repository_for, LedgerRepository},
        error::{ledger::LedgerError, validation::ValidationError, AppError},
        model::ledger::{LedgerEntry, LedgerEntryInput, LedgerKind, SaveLedgerEntryParams},
        service::category::CategoryService,
    },
};

pub const INVALID_DATE_RANGE_MESSAGE: &str = "A data de início não pode ser após a data de fim.";
pub const INVALID_PERIOD_RANGE_MESSAGE: &str =
    "O período de início não pode ser após o período de fim.";
pub const NON_POSITIVE_RANGE_MESSAGE: &str =
    "Os valores mínimo e máximo devem ser maiores que zero.";
pub const INVERTED_AMOUNT_RANGE_MESSAGE: &str =
    "O valor mínimo não pode ser maior que o valor máximo.";

pub struct LedgerService<'a> {
    db: &'a DatabaseConnection,
    kind: LedgerKind,
    repo: Box<dyn LedgerRepository + 'a>,
}

impl<'a> LedgerService<'a> {
    pub fn new(db: &'a DatabaseConnection, kind: LedgerKind) -> Self {
        Self {
            db,
            kind,
            repo: repository_for(db, kind),
        }
    }

    /// Records a new entry for the user.
    ///
    /// # Returns
    /// - `Ok(LedgerEntry)` - Created entry
    /// - `Err(AppError::CategoryErr(NameNotFound))` - The user has no category of the
    ///   matching kind with that name
    pub async fn create(
        &self,
        user_id: &str,
        input: LedgerEntryInput,
    ) -> Result<LedgerEntry, AppError> {
        let category = CategoryService::new(self.db)
            .find_by_name(user_id, &input.category_name, self.kind.category_kind())
            .await?;

        let entry = self
            .repo
            .create(SaveLedgerEntryParams::new(user_id, &category.id, input))
            .await?;

        tracing::debug!("Created {} {} for user {}", self.kind.noun(), entry.id, user_id);

        Ok(entry)
    }

    pub async fn get_all(&self, user_id: &str) -> Result<Vec<LedgerEntry>, AppError> {
        Ok(self.repo.find_by_user(user_id).await?)
    }

    /// Retrieves one of the user's entries.
    ///
    /// # Returns
    /// - `Ok(LedgerEntry)` - Entry owned by the user
    /// - `Err(AppError::LedgerErr(NotFound))` - Unknown id
    /// - `Err(AppError::LedgerErr(AccessDenied))` - Entry of another user
    pub async fn get(&self, user_id: &str, id: &str) -> Result<LedgerEntry, AppError> {
        let entry = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| LedgerError::NotFound {
                kind: self.kind,
                id: id.to_string(),
            })?;

        if entry.user_id != user_id {
            return Err(LedgerError::AccessDenied {
                kind: self.kind,
                id: id.to_string(),
            }
            .into());
        }

        Ok(entry)
    }

    /// Replaces one of the user's entries.
    ///
    /// Same errors as `get` plus the category resolution of `create`.
    pub async fn update(
        &self,
        user_id: &str,
        id: &str,
        input: LedgerEntryInput,
    ) -> Result<LedgerEntry, AppError> {
        self.get(user_id, id).await?;

        let category = CategoryService::new(self.db)
            .find_by_name(user_id, &input.category_name, self.kind.category_kind())
            .await?;

        self.repo
            .update(id, SaveLedgerEntryParams::new(user_id, &category.id, input))
            .await?
            .ok_or_else(|| {
                LedgerError::NotFound {
                    kind: self.kind,
                    id: id.to_string(),
                }
                .into()
            })
    }

    /// Deletes one of the user's entries. Same errors as `get`.
    pub async fn delete(&self, user_id: &str, id: &str) -> Result<(), AppError> {
        self.get(user_id, id).await?;
        self.repo.delete(id).await?;

        Ok(())
    }

    /// Lists the user's entries dated within `start..=end`.
    ///
    /// # Returns
    /// - `Ok(Vec<LedgerEntry>)` - Entries ordered by date
    /// - `Err(AppError::ValidationErr)` - `start` is after `end`
    pub async fn get_by_date_range(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<LedgerEntry>, AppError> {
        if start > end {
            return Err(ValidationError::InvalidData(INVALID_DATE_RANGE_MESSAGE.to_string()).into());
        }

        Ok(self.repo.find_by_user_between(user_id, start, end).await?)
    }

    /// Lists the user's entries with an amount within `min..=max`.
    ///
    /// # Returns
    /// - `Ok(Vec<LedgerEntry>)` - Entries ordered by date
    /// - `Err(AppError::ValidationErr)` - A bound is not positive or `min` exceeds `max`
    pub async fn get_by_amount_range(
        &self,
        user_id: &str,
        min: Decimal,
        max: Decimal,
    ) -> Result<Vec<LedgerEntry>, AppError> {
        if min <= Decimal::ZERO || max <= Decimal::ZERO {
            return Err(ValidationError::InvalidData(NON_POSITIVE_RANGE_MESSAGE.to_string()).into());
        }
        if min > max {
            return Err(
                ValidationError::InvalidData(INVERTED_AMOUNT_RANGE_MESSAGE.to_string()).into(),
            );
        }

        let entries = self.repo.find_by_user(user_id).await?;

        Ok(entries
            .into_iter()
            .filter(|entry| entry.amount >= min && entry.amount <= max)
            .collect())
    }

    /// Totals per category name for entries dated within `start..=end`.
    pub async fn pie_chart(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<BTreeMap<String, Decimal>, AppError> {
        let entries = self.get_by_date_range(user_id, start, end).await?;

        Ok(totals_by_category(&entries))
    }

    /// Totals per month from `start` to `end`, oldest first, labeled like `janeiro 2024`.
    ///
    /// Months without entries are left out.
    pub async fn bar_chart(
        &self,
        user_id: &str,
        start: YearMonth,
        end: YearMonth,
    ) -> Result<Vec<(String, Decimal)>, AppError> {
        if start > end {
            return Err(
                ValidationError::InvalidData(INVALID_PERIOD_RANGE_MESSAGE.to_string()).into(),
            );
        }

        let entries = self
            .repo
            .find_by_user_between(user_id, start.first_day(), end.last_day())
            .await?;

        let mut totals: BTreeMap<YearMonth, Decimal> = BTreeMap::new();
        for entry in &entries {
            *totals.entry(YearMonth::of(entry.date)).or_default() += entry.amount;
        }

        Ok(totals
            .into_iter()
            .map(|(period, total)| (period.label(), total))
            .collect())
    }

    /// Entries of the user dated within the month.
    pub async fn get_by_period(
        &self,
        user_id: &str,
        period: YearMonth,
    ) -> Result<Vec<LedgerEntry>, AppError> {
        Ok(self
            .repo
            .find_by_user_between(user_id, period.first_day(), period.last_day())
            .await?)
    }

    /// Sum of the user's entries in the month, zero when there are none.
    pub async fn total(&self, user_id: &str, period: YearMonth) -> Result<Decimal, AppError> {
        let entries = self.get_by_period(user_id, period).await?;

        Ok(entries.iter().map(|entry| entry.amount).sum())
    }

    /// The largest entry of the month.
    ///
    /// Ties keep the earliest entry.
    ///
    /// # Returns
    /// - `Ok(LedgerEntry)` - Entry with the highest amount
    /// - `Err(AppError::LedgerErr(EmptyPeriod))` - No entries in the month
    pub async fn largest(&self, user_id: &str, period: YearMonth) -> Result<LedgerEntry, AppError> {
        let entries = self.get_by_period(user_id, period).await?;

        entries
            .into_iter()
            .reduce(|best, entry| if entry.amount > best.amount { entry } else { best })
            .ok_or_else(|| {
                LedgerError::EmptyPeriod {
                    kind: self.kind,
                    period,
                }
                .into()
            })
    }

    /// The category with the highest total in the month.
    ///
    /// Returns an empty map when the month has no entries, otherwise a single entry.
    pub async fn top_category(
        &self,
        user_id: &str,
        period: YearMonth,
    ) -> Result<BTreeMap<String, Decimal>, AppError> {
        let entries = self.get_by_period(user_id, period).await?;

        Ok(totals_by_category(&entries)
            .into_iter()
            .reduce(|best, item| if item.1 > best.1 { item } else { best })
            .into_iter()
            .collect())
    }
}

fn totals_by_category(entries: &[LedgerEntry]) -> BTreeMap<String, Decimal> {
    let mut totals: BTreeMap<String, Decimal> = BTreeMap::new();
    for entry in entries {
        *totals.entry(entry.category_name.clone()).or_default() += entry.amount;
    }
    totals
}
