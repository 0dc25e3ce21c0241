//! Monthly budget domain models.

use rust_decimal::Decimal;

use crate::{
    model::{
        budget::{MonthlyBudgetDto, MonthlyBudgetInputDto},
        period::YearMonth,
    },
    server::{
        error::validation::ValidationError, model::ledger::parse_stored_amount,
        util::validation::FieldErrors,
    },
};

/// Spending limit for one expense category in one month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyBudget {
    pub id: String,
    pub user_id: String,
    pub category_id: String,
    pub category_name: String,
    pub limit_amount: Decimal,
    pub period: YearMonth,
}

impl MonthlyBudget {
    pub fn into_dto(self) -> MonthlyBudgetDto {
        MonthlyBudgetDto {
            uuid: self.id,
            categoria: self.category_name,
            valor_limite: self.limit_amount,
            periodo: self.period,
        }
    }

    /// Converts an entity model, parsing the stored `YYYY-MM` period and limit text.
    ///
    /// # Returns
    /// - `Ok(MonthlyBudget)` - Converted budget
    /// - `Err(String)` - Stored period or limit is malformed
    pub fn from_entity(
        entity: entity::monthly_budget::Model,
        category: Option<entity::category::Model>,
    ) -> Result<Self, String> {
        let period = entity.period.parse::<YearMonth>().map_err(|e| {
            format!(
                "Failed to parse period for monthly budget {}: {}",
                entity.id, e
            )
        })?;

        let limit_amount = parse_stored_amount(&entity.id, &entity.limit_amount)?;

        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            category_id: entity.category_id,
            category_name: category.map(|c| c.name).unwrap_or_default(),
            limit_amount,
            period,
        })
    }
}

/// Validated body of a budget create/update request.
#[derive(Debug, Clone)]
pub struct MonthlyBudgetInput {
    pub category_name: String,
    pub limit_amount: Decimal,
    pub period: YearMonth,
}

impl MonthlyBudgetInput {
    pub fn from_dto(dto: MonthlyBudgetInputDto) -> Result<Self, ValidationError> {
        let mut errors = FieldErrors::new();

        let category_name = errors.text("categoria", dto.categoria, "A categoria é obrigatória.");
        let limit_amount = errors.positive_amount(
            "valorLimite",
            dto.valor_limite,
            "O valor limite é obrigatório.",
        );
        let period = errors.year_month("periodo", dto.periodo, "O período é obrigatório.");

        errors.finish()?;

        Ok(Self {
            category_name,
            limit_amount,
            period,
        })
    }
}

/// Row values written when creating or replacing a budget.
#[derive(Debug, Clone)]
pub struct SaveMonthlyBudgetParams {
    pub user_id: String,
    pub category_id: String,
    pub limit_amount: Decimal,
    pub period: YearMonth,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::util::{
        parse::INVALID_PERIOD_MESSAGE, validation::AMOUNT_OUT_OF_RANGE_MESSAGE,
    };

    #[test]
    fn accepts_valid_budget() {
        let input = MonthlyBudgetInput::from_dto(MonthlyBudgetInputDto {
            categoria: Some("Mercado".to_string()),
            valor_limite: Some(Decimal::new(800, 0)),
            periodo: Some("2024-02".to_string()),
        })
        .unwrap();

        assert_eq!(input.category_name, "Mercado");
        assert_eq!(input.period, YearMonth::new(2024, 2).unwrap());
    }

    #[test]
    fn rejects_zero_limit_and_bad_period() {
        let err = MonthlyBudgetInput::from_dto(MonthlyBudgetInputDto {
            categoria: Some("Mercado".to_string()),
            valor_limite: Some(Decimal::ZERO),
            periodo: Some("02-2024".to_string()),
        })
        .unwrap_err();

        let ValidationError::InvalidFields(errors) = err else {
            panic!("expected field errors");
        };
        assert!(errors.contains_key("valorLimite"));
        assert_eq!(errors.get("periodo").unwrap(), INVALID_PERIOD_MESSAGE);
    }

    #[test]
    fn fails_on_corrupt_stored_period() {
        let entity = entity::monthly_budget::Model {
            id: "b-1".to_string(),
            user_id: "u-1".to_string(),
            category_id: "c-1".to_string(),
            limit_amount: "100".to_string(),
            period: "2024".to_string(),
        };

        assert!(MonthlyBudget::from_entity(entity, None).is_err());
    }

    #[test]
    fn rejects_limit_above_fifteen_integer_digits() {
        let err = MonthlyBudgetInput::from_dto(MonthlyBudgetInputDto {
            categoria: Some("Mercado".to_string()),
            valor_limite: Some(Decimal::MAX),
            periodo: Some("2024-02".to_string()),
        })
        .unwrap_err();

        let ValidationError::InvalidFields(errors) = err else {
            panic!("expected field errors");
        };
        assert_eq!(errors.get("valorLimite").unwrap(), AMOUNT_OUT_OF_RANGE_MESSAGE);
    }

    #[test]
    fn reads_stored_limit_exactly() {
        let entity = entity::monthly_budget::Model {
            id: "b-1".to_string(),
            user_id: "u-1".to_string(),
            category_id: "c-1".to_string(),
            limit_amount: "999999999999999.9999".to_string(),
            period: "2024-02".to_string(),
        };

        let budget = MonthlyBudget::from_entity(entity, None).unwrap();

        assert_eq!(budget.limit_amount.to_string(), "999999999999999.9999");
    }
}
