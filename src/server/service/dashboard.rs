//! Monthly figures for the dashboard.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

use crate::{
    model::period::YearMonth,
    server::{
        error::AppError,
        model::ledger::{LedgerEntry, LedgerKind},
        service::ledger::LedgerService,
    },
};

pub struct DashboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DashboardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Incomes minus expenses of the month. May be negative.
    pub async fn balance(&self, user_id: &str, period: YearMonth) -> Result<Decimal, AppError> {
        let incomes = self.total(user_id, LedgerKind::Income, period).await?;
        let expenses = self.total(user_id, LedgerKind::Expense, period).await?;

        Ok(incomes - expenses)
    }

    pub async fn total(
        &self,
        user_id: &str,
        kind: LedgerKind,
        period: YearMonth,
    ) -> Result<Decimal, AppError> {
        LedgerService::new(self.db, kind).total(user_id, period).await
    }

    pub async fn largest(
        &self,
        user_id: &str,
        kind: LedgerKind,
        period: YearMonth,
    ) -> Result<LedgerEntry, AppError> {
        LedgerService::new(self.db, kind).largest(user_id, period).await
    }

    pub async fn top_category(
        &self,
        user_id: &str,
        kind: LedgerKind,
        period: YearMonth,
    ) -> Result<BTreeMap<String, Decimal>, AppError> {
        LedgerService::new(self.db, kind)
            .top_category(user_id, period)
            .await
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use test_utils::{builder::TestBuilder, factory};

    use super::*;

    #[tokio::test]
    async fn computes_balance_of_month_only() {
        let test = TestBuilder::new()
            .with_finance_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::create_user(db).await.unwrap();
        let income_category = factory::create_income_category(db, &user.id).await.unwrap();
        let expense_category = factory::create_expense_category(db, &user.id).await.unwrap();

        factory::income::IncomeFactory::new(db, &user.id, &income_category.id)
            .amount(Decimal::new(3000, 0))
            .date(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap())
            .build()
            .await
            .unwrap();
        factory::expense::ExpenseFactory::new(db, &user.id, &expense_category.id)
            .amount(Decimal::new(1200, 0))
            .date(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap())
            .build()
            .await
            .unwrap();
        factory::expense::ExpenseFactory::new(db, &user.id, &expense_category.id)
            .amount(Decimal::new(999, 0))
            .date(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap())
            .build()
            .await
            .unwrap();

        let service = DashboardService::new(db);
        let january = YearMonth::new(2024, 1).unwrap();

        assert_eq!(
            service.balance(&user.id, january).await.unwrap(),
            Decimal::new(1800, 0)
        );
        assert_eq!(
            service
                .total(&user.id, LedgerKind::Expense, january)
                .await
                .unwrap(),
            Decimal::new(1200, 0)
        );
        assert_eq!(
            service
                .largest(&user.id, LedgerKind::Income, january)
                .await
                .unwrap()
                .amount,
            Decimal::new(3000, 0)
        );
    }
}
