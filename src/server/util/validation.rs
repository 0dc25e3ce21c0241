use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::{
    model::period::YearMonth,
    server::{
        error::validation::ValidationError,
        util::parse::{INVALID_DATE_MESSAGE, INVALID_PERIOD_MESSAGE},
    },
};

pub const AMOUNT_NOT_POSITIVE_MESSAGE: &str = "O valor deve ser maior que zero.";
pub const AMOUNT_OUT_OF_RANGE_MESSAGE: &str =
    "O valor deve ter no máximo 15 dígitos inteiros e 4 casas decimais.";

/// Smallest amount with more than 15 integer digits.
/// 1_000_000_000_000_000 (10^15) with scale 0.
const AMOUNT_UPPER_BOUND: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);
const AMOUNT_MAX_SCALE: u32 = 4;

/// Collects per-field validation messages while converting a request body.
///
/// Each check returns a usable placeholder on failure so conversion can continue
/// and report every invalid field at once. Call `finish()` before using the values.
#[derive(Debug, Default)]
pub struct FieldErrors {
    errors: BTreeMap<String, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message for `field`, keeping the first one reported.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    /// Requires a non-blank string and returns it trimmed.
    pub fn text(&mut self, field: &str, value: Option<String>, message: &str) -> String {
        match value.map(|v| v.trim().to_string()) {
            Some(v) if !v.is_empty() => v,
            _ => {
                self.add(field, message);
                String::new()
            }
        }
    }

    /// Requires a `YYYY-MM-DD` date.
    pub fn date(&mut self, field: &str, value: Option<String>, message: &str) -> NaiveDate {
        let Some(raw) = value.filter(|v| !v.trim().is_empty()) else {
            self.add(field, message);
            return NaiveDate::default();
        };

        NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").unwrap_or_else(|_| {
            self.add(field, INVALID_DATE_MESSAGE);
            NaiveDate::default()
        })
    }

    /// Requires a `YYYY-MM` month.
    pub fn year_month(&mut self, field: &str, value: Option<String>, message: &str) -> YearMonth {
        let fallback = YearMonth::of(NaiveDate::default());
        let Some(raw) = value.filter(|v| !v.trim().is_empty()) else {
            self.add(field, message);
            return fallback;
        };

        raw.parse().unwrap_or_else(|_| {
            self.add(field, INVALID_PERIOD_MESSAGE);
            fallback
        })
    }

    /// Requires an amount strictly greater than zero with at most 15 integer digits
    /// and 4 decimal places.
    pub fn positive_amount(
        &mut self,
        field: &str,
        value: Option<Decimal>,
        missing_message: &str,
    ) -> Decimal {
        match value {
            Some(amount) if amount <= Decimal::ZERO => {
                self.add(field, AMOUNT_NOT_POSITIVE_MESSAGE);
                Decimal::ZERO
            }
            Some(amount)
                if amount >= AMOUNT_UPPER_BOUND || amount.normalize().scale() > AMOUNT_MAX_SCALE =>
            {
                self.add(field, AMOUNT_OUT_OF_RANGE_MESSAGE);
                Decimal::ZERO
            }
            Some(amount) => amount,
            None => {
                self.add(field, missing_message);
                Decimal::ZERO
            }
        }
    }

    /// Fails with every collected message, if any.
    pub fn finish(self) -> Result<(), ValidationError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::InvalidFields(self.errors))
        }
    }
}

/// Loose structural email check: one `@`, non-empty local part and a dotted domain.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain.contains('.')
        && domain.split('.').all(|part| !part.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_every_invalid_field() {
        let mut errors = FieldErrors::new();

        let name = errors.text("nome", Some("   ".to_string()), "O nome é obrigatório.");
        let date = errors.date("data", Some("2024-13-01".to_string()), "A data é obrigatória.");
        let amount = errors.positive_amount("valor", Some(Decimal::ZERO), "O valor é obrigatório.");

        assert!(name.is_empty());
        assert_eq!(date, NaiveDate::default());
        assert_eq!(amount, Decimal::ZERO);

        let Err(ValidationError::InvalidFields(map)) = errors.finish() else {
            panic!("expected field errors");
        };
        assert_eq!(map.get("nome").unwrap(), "O nome é obrigatório.");
        assert_eq!(map.get("data").unwrap(), INVALID_DATE_MESSAGE);
        assert_eq!(map.get("valor").unwrap(), AMOUNT_NOT_POSITIVE_MESSAGE);
    }

    #[test]
    fn passes_when_all_fields_valid() {
        let mut errors = FieldErrors::new();

        let name = errors.text("nome", Some(" Mercado ".to_string()), "O nome é obrigatório.");
        let period = errors.year_month("periodo", Some("2024-05".to_string()), "obrigatório");

        assert_eq!(name, "Mercado");
        assert_eq!(period.to_string(), "2024-05");
        assert!(errors.finish().is_ok());
    }

    #[test]
    fn rejects_amounts_beyond_storable_precision() {
        let mut errors = FieldErrors::new();

        errors.positive_amount("valor", Some(Decimal::new(1_000_000_000_000_000, 0)), "");
        errors.positive_amount("valorLimite", Some(Decimal::new(1_23456, 5)), "");
        errors.positive_amount("total", Some(Decimal::MAX), "");

        let Err(ValidationError::InvalidFields(map)) = errors.finish() else {
            panic!("expected field errors");
        };
        assert_eq!(map.get("valor").unwrap(), AMOUNT_OUT_OF_RANGE_MESSAGE);
        assert_eq!(map.get("valorLimite").unwrap(), AMOUNT_OUT_OF_RANGE_MESSAGE);
        assert_eq!(map.get("total").unwrap(), AMOUNT_OUT_OF_RANGE_MESSAGE);
    }

    #[test]
    fn accepts_amounts_at_the_precision_limits() {
        let mut errors = FieldErrors::new();

        let max: Decimal = "999999999999999.9999".parse().unwrap();
        let largest = errors.positive_amount("valor", Some(max), "");
        let padded = errors.positive_amount("valorLimite", Some(Decimal::new(12_500_000, 6)), "");

        assert_eq!(largest.to_string(), "999999999999999.9999");
        assert_eq!(padded, Decimal::new(125, 1));
        assert!(errors.finish().is_ok());
    }

    #[test]
    fn validates_email_shape() {
        assert!(is_valid_email("maria@example.com"));
        assert!(is_valid_email("joao.silva@mail.com.br"));
        assert!(!is_valid_email("maria.example.com"));
        assert!(!is_valid_email("maria@localhost"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("maria@@example.com"));
        assert!(!is_valid_email("maria @example.com"));
        assert!(!is_valid_email("maria@example..com"));
    }
}
