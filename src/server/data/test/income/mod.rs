use crate::server::{
    data::{income::IncomeRepository, ledger::LedgerRepository},
    model::ledger::SaveLedgerEntryParams,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_user;
mod update;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
