use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IncomeDto {
    pub uuid: String,
    #[schema(value_type = String, format = Date)]
    pub data: chrono::NaiveDate,
    pub categoria: String,
    pub valor: Decimal,
    pub origem_do_pagamento: String,
    pub observacoes: String,
}

/// Body used to create or replace an income entry.
///
/// Fields are optional so missing values surface as field validation errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IncomeInputDto {
    /// Date formatted as `YYYY-MM-DD`.
    #[serde(default)]
    pub data: Option<String>,
    #[serde(default)]
    pub categoria: Option<String>,
    #[serde(default)]
    pub valor: Option<Decimal>,
    #[serde(default)]
    pub origem_do_pagamento: Option<String>,
    #[serde(default)]
    pub observacoes: Option<String>,
}
