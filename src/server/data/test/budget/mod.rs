use crate::{
    model::period::YearMonth,
    server::{
        data::budget::MonthlyBudgetRepository,
        error::{budget::BudgetError, AppError},
        model::budget::SaveMonthlyBudgetParams,
    },
};
use rust_decimal::Decimal;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod exists;
mod find_by_user;
mod update;

fn period(value: &str) -> YearMonth {
    value.parse().unwrap()
}
