//! Query string parameters shared by the ledger and dashboard endpoints.
//!
//! Values are taken as text and parsed by the handlers so that malformed dates and
//! periods produce the application's validation messages.

use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DateRangeParams {
    /// First day, `YYYY-MM-DD`.
    pub inicio: String,
    /// Last day, `YYYY-MM-DD`.
    pub fim: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AmountRangeParams {
    pub min: String,
    pub max: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PeriodRangeParams {
    /// First month, `YYYY-MM`.
    pub inicio: String,
    /// Last month, `YYYY-MM`.
    pub fim: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PeriodParams {
    /// Month, `YYYY-MM`.
    pub periodo: String,
}
