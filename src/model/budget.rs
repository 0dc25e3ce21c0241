use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::period::YearMonth;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyBudgetDto {
    pub uuid: String,
    /// Name of the expense category the limit applies to.
    pub categoria: String,
    pub valor_limite: Decimal,
    #[schema(value_type = String, example = "2024-01")]
    pub periodo: YearMonth,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyBudgetInputDto {
    #[serde(default)]
    pub categoria: Option<String>,
    #[serde(default)]
    pub valor_limite: Option<Decimal>,
    /// Month formatted as `YYYY-MM`.
    #[serde(default)]
    pub periodo: Option<String>,
}
