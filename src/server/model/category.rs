//! Category domain models and parameters.

use crate::{
    model::category::{CategoryDto, CreateCategoryDto, RenameCategoryDto},
    server::{error::validation::ValidationError, util::validation::FieldErrors},
};

/// Name of the fallback category each user owns per kind.
pub const UNCATEGORIZED_NAME: &str = "Sem Categoria";

/// Whether a category groups incomes (`RECEITAS`) or expenses (`DESPESAS`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryKind {
    Income,
    Expense,
}

impl CategoryKind {
    /// Parses the kind, accepting the plural names and the singular aliases
    /// `RECEITA` / `DESPESA` in any case.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "RECEITAS" | "RECEITA" => Some(Self::Income),
            "DESPESAS" | "DESPESA" => Some(Self::Expense),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "RECEITAS",
            Self::Expense => "DESPESAS",
        }
    }

    pub fn from_entity(kind: entity::category::CategoryKind) -> Self {
        match kind {
            entity::category::CategoryKind::Income => Self::Income,
            entity::category::CategoryKind::Expense => Self::Expense,
        }
    }

    pub fn into_entity(self) -> entity::category::CategoryKind {
        match self {
            Self::Income => entity::category::CategoryKind::Income,
            Self::Expense => entity::category::CategoryKind::Expense,
        }
    }
}

/// A user-owned label grouping incomes or expenses.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub kind: CategoryKind,
    /// True for the "Sem Categoria" fallback, which can't be renamed or deleted.
    pub uncategorized: bool,
}

impl Category {
    pub fn into_dto(self) -> CategoryDto {
        CategoryDto {
            uuid: self.id,
            nome: self.name,
            tipo: self.kind.as_str().to_string(),
            sem_categoria: self.uncategorized,
        }
    }

    pub fn from_entity(entity: entity::category::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            name: entity.name,
            kind: CategoryKind::from_entity(entity.kind),
            uncategorized: entity.uncategorized,
        }
    }
}

/// Parameters for creating a category.
#[derive(Debug, Clone)]
pub struct CreateCategoryParams {
    pub user_id: String,
    pub name: String,
    pub kind: CategoryKind,
    pub uncategorized: bool,
}

impl CreateCategoryParams {
    /// Validates the creation body for the authenticated user.
    ///
    /// # Returns
    /// - `Ok(CreateCategoryParams)` - Name present and kind recognized
    /// - `Err(ValidationError::InvalidFields)` - Blank name, missing or unknown kind
    pub fn from_dto(user_id: &str, dto: CreateCategoryDto) -> Result<Self, ValidationError> {
        let mut errors = FieldErrors::new();

        let name = errors.text("nome", dto.nome, "O nome é obrigatório.");
        let kind = errors.text("tipo", dto.tipo, "O tipo é obrigatório.");
        let kind = if kind.is_empty() {
            CategoryKind::Expense
        } else {
            CategoryKind::parse(&kind).unwrap_or_else(|| {
                errors.add("tipo", "Tipo inválido. Valores permitidos: RECEITA, DESPESA.");
                CategoryKind::Expense
            })
        };

        errors.finish()?;

        Ok(Self {
            user_id: user_id.to_string(),
            name,
            kind,
            uncategorized: false,
        })
    }

    /// The "Sem Categoria" fallback created for each kind at registration.
    pub fn uncategorized(user_id: &str, kind: CategoryKind) -> Self {
        Self {
            user_id: user_id.to_string(),
            name: UNCATEGORIZED_NAME.to_string(),
            kind,
            uncategorized: true,
        }
    }
}

/// Parameters for renaming a category.
#[derive(Debug, Clone)]
pub struct RenameCategoryParams {
    pub user_id: String,
    pub category_id: String,
    pub name: String,
}

impl RenameCategoryParams {
    pub fn from_dto(
        user_id: &str,
        category_id: String,
        dto: RenameCategoryDto,
    ) -> Result<Self, ValidationError> {
        let mut errors = FieldErrors::new();

        let name = errors.text("nome", dto.nome, "O nome é obrigatório.");

        errors.finish()?;

        Ok(Self {
            user_id: user_id.to_string(),
            category_id,
            name,
        })
    }
}
