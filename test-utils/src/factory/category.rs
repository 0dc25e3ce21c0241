//! Category factory for creating income and expense categories.

use crate::factory::helpers::{next_id, next_uuid};
use entity::category::CategoryKind;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test categories owned by a user.
pub struct CategoryFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    user_id: String,
    name: String,
    kind: CategoryKind,
    uncategorized: bool,
}

impl<'a> CategoryFactory<'a> {
    /// Creates a new CategoryFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Categoria {n}"`
    /// - kind: `DESPESAS`
    /// - uncategorized: `false`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Owner of the category (must exist)
    pub fn new(db: &'a DatabaseConnection, user_id: &str) -> Self {
        Self {
            db,
            id: next_uuid("category"),
            user_id: user_id.to_string(),
            name: format!("Categoria {}", next_id()),
            kind: CategoryKind::Expense,
            uncategorized: false,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn kind(mut self, kind: CategoryKind) -> Self {
        self.kind = kind;
        self
    }

    /// Marks the category as the owner's "Sem Categoria" fallback.
    pub fn uncategorized(mut self, uncategorized: bool) -> Self {
        self.uncategorized = uncategorized;
        self
    }

    /// Builds and inserts the category entity into the database.
    pub async fn build(self) -> Result<entity::category::Model, DbErr> {
        entity::category::ActiveModel {
            id: ActiveValue::Set(self.id),
            user_id: ActiveValue::Set(self.user_id),
            name: ActiveValue::Set(self.name),
            kind: ActiveValue::Set(self.kind),
            uncategorized: ActiveValue::Set(self.uncategorized),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an income (`RECEITAS`) category with a generated name.
pub async fn create_income_category(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<entity::category::Model, DbErr> {
    CategoryFactory::new(db, user_id)
        .kind(CategoryKind::Income)
        .build()
        .await
}

/// Creates an expense (`DESPESAS`) category with a generated name.
pub async fn create_expense_category(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<entity::category::Model, DbErr> {
    CategoryFactory::new(db, user_id)
        .kind(CategoryKind::Expense)
        .build()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::TestBuilder, factory::user::create_user};

    #[tokio::test]
    async fn creates_category_for_user() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_category_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let user = create_user(db).await?;
        let category = create_income_category(db, &user.id).await?;

        assert_eq!(category.user_id, user.id);
        assert_eq!(category.kind, CategoryKind::Income);
        assert!(!category.uncategorized);

        Ok(())
    }
}
