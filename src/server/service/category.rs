//! Category service.
//!
//! Enforces ownership, per-kind name uniqueness and the protection of the
//! "Sem Categoria" fallback, and moves entries to the fallback when a category
//! is deleted.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::category::CategoryRepository,
    error::{category::CategoryError, AppError},
    model::category::{Category, CategoryKind, CreateCategoryParams, RenameCategoryParams},
};

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a category for the user.
    ///
    /// # Returns
    /// - `Ok(Category)` - Created category
    /// - `Err(AppError::CategoryErr(AlreadyExists))` - Same name and kind already used
    pub async fn create(&self, params: CreateCategoryParams) -> Result<Category, AppError> {
        let repo = CategoryRepository::new(self.db);

        if repo
            .exists_with_name(&params.user_id, &params.name, params.kind, None)
            .await?
        {
            return Err(CategoryError::AlreadyExists(params.name).into());
        }

        Ok(repo.create(params).await?)
    }

    pub async fn get_all(&self, user_id: &str) -> Result<Vec<Category>, AppError> {
        Ok(CategoryRepository::new(self.db).find_by_user(user_id).await?)
    }

    pub async fn get_by_kind(
        &self,
        user_id: &str,
        kind: CategoryKind,
    ) -> Result<Vec<Category>, AppError> {
        Ok(CategoryRepository::new(self.db)
            .find_by_user_and_kind(user_id, kind)
            .await?)
    }

    /// Resolves a category name sent by the client to one of the user's categories.
    ///
    /// # Returns
    /// - `Ok(Category)` - Matching category of the given kind
    /// - `Err(AppError::CategoryErr(NameNotFound))` - The user has no such category
    pub async fn find_by_name(
        &self,
        user_id: &str,
        name: &str,
        kind: CategoryKind,
    ) -> Result<Category, AppError> {
        CategoryRepository::new(self.db)
            .find_by_user_name_kind(user_id, name, kind)
            .await?
            .ok_or_else(|| CategoryError::NameNotFound(name.to_string()).into())
    }

    /// Renames one of the user's categories.
    ///
    /// # Returns
    /// - `Ok(Category)` - Renamed category
    /// - `Err(AppError::CategoryErr(NotFound))` - Unknown id
    /// - `Err(AppError::CategoryErr(AccessDenied))` - Category of another user
    /// - `Err(AppError::CategoryErr(UncategorizedNotRenamable))` - The fallback category
    /// - `Err(AppError::CategoryErr(AlreadyExists))` - Name taken within the same kind
    pub async fn rename(&self, params: RenameCategoryParams) -> Result<Category, AppError> {
        let repo = CategoryRepository::new(self.db);
        let category = self.find_owned(&params.user_id, &params.category_id).await?;

        if category.uncategorized {
            return Err(CategoryError::UncategorizedNotRenamable.into());
        }

        if repo
            .exists_with_name(
                &params.user_id,
                &params.name,
                category.kind,
                Some(&category.id),
            )
            .await?
        {
            return Err(CategoryError::AlreadyExists(params.name).into());
        }

        repo.rename(&category.id, params.name)
            .await?
            .ok_or_else(|| CategoryError::NotFound(params.category_id).into())
    }

    /// Deletes one of the user's categories.
    ///
    /// Incomes and expenses of the category are moved to the user's fallback of the
    /// same kind, which is recreated if missing. Budgets on the category are removed.
    /// Everything happens in one transaction.
    ///
    /// # Returns
    /// - `Ok(())` - Category deleted
    /// - `Err(AppError::CategoryErr(NotFound))` - Unknown id
    /// - `Err(AppError::CategoryErr(AccessDenied))` - Category of another user
    /// - `Err(AppError::CategoryErr(UncategorizedNotDeletable))` - The fallback category
    pub async fn delete(&self, user_id: &str, category_id: &str) -> Result<(), AppError> {
        let category = self.find_owned(user_id, category_id).await?;

        if category.uncategorized {
            return Err(CategoryError::UncategorizedNotDeletable.into());
        }

        let txn = self.db.begin().await?;
        let repo = CategoryRepository::new(&txn);

        let fallback = match repo.find_uncategorized(user_id, category.kind).await? {
            Some(fallback) => fallback,
            None => {
                tracing::warn!(
                    "User {} had no fallback category of kind {}, recreating it",
                    user_id,
                    category.kind.as_str()
                );
                repo.create(CreateCategoryParams::uncategorized(user_id, category.kind))
                    .await?
            }
        };

        let moved = repo.reassign_entries(&category.id, &fallback.id).await?;
        repo.delete(&category.id).await?;

        txn.commit().await?;

        tracing::debug!(
            "Deleted category {} and moved {} entries to {}",
            category.id,
            moved,
            fallback.id
        );

        Ok(())
    }

    async fn find_owned(&self, user_id: &str, category_id: &str) -> Result<Category, AppError> {
        let category = CategoryRepository::new(self.db)
            .find_by_id(category_id)
            .await?
            .ok_or_else(|| CategoryError::NotFound(category_id.to_string()))?;

        if category.user_id != user_id {
            return Err(CategoryError::AccessDenied(category_id.to_string()).into());
        }

        Ok(category)
    }
}
