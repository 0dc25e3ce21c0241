//! Income and expense domain models.
//!
//! Incomes and expenses share one shape: a dated, positive amount in a category with a
//! counterparty (who paid for an income, who was paid for an expense) and free notes.
//! `LedgerEntry` models both; `LedgerKind` tells them apart where messages and category
//! kinds differ.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::{
    model::{
        expense::{ExpenseDto, ExpenseInputDto},
        income::{IncomeDto, IncomeInputDto},
    },
    server::{
        error::validation::ValidationError, model::category::CategoryKind,
        util::validation::FieldErrors,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerKind {
    Income,
    Expense,
}

impl LedgerKind {
    /// Capitalized Portuguese noun used in error messages.
    pub fn noun(&self) -> &'static str {
        match self {
            Self::Income => "Receita",
            Self::Expense => "Despesa",
        }
    }

    /// Kind a category must have to hold entries of this ledger.
    pub fn category_kind(&self) -> CategoryKind {
        match self {
            Self::Income => CategoryKind::Income,
            Self::Expense => CategoryKind::Expense,
        }
    }
}

/// A single income or expense entry.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerEntry {
    pub id: String,
    pub user_id: String,
    pub category_id: String,
    /// Resolved name of the category, empty if it could not be loaded.
    pub category_name: String,
    pub date: NaiveDate,
    pub amount: Decimal,
    /// Payment origin for incomes, payment destination for expenses.
    pub counterparty: String,
    pub notes: String,
}

impl LedgerEntry {
    pub fn from_income(
        entity: entity::income::Model,
        category: Option<entity::category::Model>,
    ) -> Result<Self, String> {
        Ok(Self {
            amount: parse_stored_amount(&entity.id, &entity.amount)?,
            id: entity.id,
            user_id: entity.user_id,
            category_id: entity.category_id,
            category_name: category.map(|c| c.name).unwrap_or_default(),
            date: entity.date,
            counterparty: entity.source,
            notes: entity.notes,
        })
    }

    pub fn from_expense(
        entity: entity::expense::Model,
        category: Option<entity::category::Model>,
    ) -> Result<Self, String> {
        Ok(Self {
            amount: parse_stored_amount(&entity.id, &entity.amount)?,
            id: entity.id,
            user_id: entity.user_id,
            category_id: entity.category_id,
            category_name: category.map(|c| c.name).unwrap_or_default(),
            date: entity.date,
            counterparty: entity.destination,
            notes: entity.notes,
        })
    }

    pub fn into_income_dto(self) -> IncomeDto {
        IncomeDto {
            uuid: self.id,
            data: self.date,
            categoria: self.category_name,
            valor: self.amount,
            origem_do_pagamento: self.counterparty,
            observacoes: self.notes,
        }
    }

    pub fn into_expense_dto(self) -> ExpenseDto {
        ExpenseDto {
            uuid: self.id,
            data: self.date,
            categoria: self.category_name,
            valor: self.amount,
            destino_pagamento: self.counterparty,
            observacoes: self.notes,
        }
    }
}

/// Parses an amount column, which holds exact decimal text.
pub fn parse_stored_amount(id: &str, raw: &str) -> Result<Decimal, String> {
    raw.parse()
        .map_err(|err| format!("Failed to parse stored amount '{raw}' for entry {id}: {err}"))
}

/// Validated body of an income or expense create/update request.
///
/// The category is still a name here; the service resolves it against the
/// user's categories of the matching kind.
#[derive(Debug, Clone)]
pub struct LedgerEntryInput {
    pub date: NaiveDate,
    pub category_name: String,
    pub amount: Decimal,
    pub counterparty: String,
    pub notes: String,
}

impl LedgerEntryInput {
    /// Validates an income body.
    ///
    /// # Returns
    /// - `Ok(LedgerEntryInput)` - Every field present and valid
    /// - `Err(ValidationError::InvalidFields)` - One message per invalid field
    pub fn from_income_dto(dto: IncomeInputDto) -> Result<Self, ValidationError> {
        Self::validate(
            dto.data,
            dto.categoria,
            dto.valor,
            ("origemDoPagamento", dto.origem_do_pagamento, "A origem do pagamento é obrigatória."),
            dto.observacoes,
        )
    }

    /// Validates an expense body.
    pub fn from_expense_dto(dto: ExpenseInputDto) -> Result<Self, ValidationError> {
        Self::validate(
            dto.data,
            dto.categoria,
            dto.valor,
            ("destinoPagamento", dto.destino_pagamento, "O destino do pagamento é obrigatório."),
            dto.observacoes,
        )
    }

    fn validate(
        date: Option<String>,
        category: Option<String>,
        amount: Option<Decimal>,
        (counterparty_field, counterparty, counterparty_message): (&str, Option<String>, &str),
        notes: Option<String>,
    ) -> Result<Self, ValidationError> {
        let mut errors = FieldErrors::new();

        let date = errors.date("data", date, "A data é obrigatória.");
        let category_name = errors.text("categoria", category, "A categoria é obrigatória.");
        let amount = errors.positive_amount("valor", amount, "O valor é obrigatório.");
        let counterparty = errors.text(counterparty_field, counterparty, counterparty_message);
        let notes = errors.text("observacoes", notes, "As observações são obrigatórias.");

        errors.finish()?;

        Ok(Self {
            date,
            category_name,
            amount,
            counterparty,
            notes,
        })
    }
}

/// Row values written when creating or replacing an entry.
#[derive(Debug, Clone)]
pub struct SaveLedgerEntryParams {
    pub user_id: String,
    pub category_id: String,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub counterparty: String,
    pub notes: String,
}

impl SaveLedgerEntryParams {
    pub fn new(user_id: &str, category_id: &str, input: LedgerEntryInput) -> Self {
        Self {
            user_id: user_id.to_string(),
            category_id: category_id.to_string(),
            date: input.date,
            amount: input.amount,
            counterparty: input.counterparty,
            notes: input.notes,
        }
    }
}
