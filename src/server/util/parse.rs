use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::{model::period::YearMonth, server::error::validation::ValidationError};

pub const INVALID_DATE_MESSAGE: &str = "Formato de data inválido. Use o padrão YYYY-MM-DD";
pub const INVALID_PERIOD_MESSAGE: &str = "Formato de período inválido. Use o padrão YYYY-MM";

/// Parses a `YYYY-MM-DD` date.
///
/// # Returns
/// - `Ok(NaiveDate)` - Successfully parsed date
/// - `Err(ValidationError::InvalidParameter)` - Value is not a valid calendar date
pub fn parse_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidParameter(INVALID_DATE_MESSAGE.to_string()))
}

/// Parses a `YYYY-MM` month.
///
/// # Returns
/// - `Ok(YearMonth)` - Successfully parsed month
/// - `Err(ValidationError::InvalidParameter)` - Value is not a valid month
pub fn parse_year_month(value: &str) -> Result<YearMonth, ValidationError> {
    YearMonth::from_str(value)
        .map_err(|_| ValidationError::InvalidParameter(INVALID_PERIOD_MESSAGE.to_string()))
}

/// Parses a decimal amount from a query parameter.
///
/// # Arguments
/// - `name` - Parameter name, used in the error message
/// - `value` - Raw parameter value
pub fn parse_decimal(name: &str, value: &str) -> Result<Decimal, ValidationError> {
    Decimal::from_str(value.trim()).map_err(|_| {
        ValidationError::InvalidParameter(format!(
            "Valor inválido para o parâmetro '{}': {}",
            name, value
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_date() {
        assert_eq!(
            parse_date("2024-02-29").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
    }

    #[test]
    fn rejects_impossible_date() {
        let err = parse_date("2023-02-29").unwrap_err();

        assert_eq!(err.to_string(), INVALID_DATE_MESSAGE);
    }

    #[test]
    fn rejects_brazilian_date_format() {
        assert!(parse_date("29/02/2024").is_err());
    }

    #[test]
    fn parses_decimal_amount() {
        assert_eq!(parse_decimal("min", "10.50").unwrap(), Decimal::new(1050, 2));
        assert!(parse_decimal("min", "dez").is_err());
    }
}
