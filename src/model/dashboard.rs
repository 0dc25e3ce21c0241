use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::period::YearMonth;

/// A monetary total for one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PeriodTotalDto {
    #[schema(value_type = String, example = "2024-01")]
    pub periodo: YearMonth,
    pub saldo: Decimal,
}
