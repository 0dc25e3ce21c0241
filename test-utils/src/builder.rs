use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Collects the entity tables a test needs, then creates them in a fresh database.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Category};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Category)
///     .build()
///     .await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
    /// CREATE INDEX statements executed after every table exists.
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the CREATE TABLE statement derived from `entity`.
    ///
    /// Add referenced tables first; statements run in the order they were added.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Queues a CREATE INDEX statement.
    ///
    /// Entity-derived tables only carry single-column constraints, so composite
    /// unique indexes from the migrations are added this way.
    pub fn with_index(mut self, index: IndexCreateStatement) -> Self {
        self.indexes.push(index);
        self
    }

    /// Adds the user and category tables with the unique (user, name, kind) index.
    ///
    /// Enough for registration and category management tests.
    pub fn with_category_tables(self) -> Self {
        self.with_table(User).with_table(Category).with_index(
            Index::create()
                .name("idx_category_user_name_kind")
                .table(Category)
                .col(entity::category::Column::UserId)
                .col(entity::category::Column::Name)
                .col(entity::category::Column::Kind)
                .unique()
                .to_owned(),
        )
    }

    /// Adds every table of the finance schema in dependency order:
    /// - User
    /// - Category
    /// - Income
    /// - Expense
    /// - MonthlyBudget, unique per (user, category, period)
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_finance_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_finance_tables(self) -> Self {
        self.with_category_tables()
            .with_table(Income)
            .with_table(Expense)
            .with_table(MonthlyBudget)
            .with_index(
                Index::create()
                    .name("idx_monthly_budget_user_category_period")
                    .table(MonthlyBudget)
                    .col(entity::monthly_budget::Column::UserId)
                    .col(entity::monthly_budget::Column::CategoryId)
                    .col(entity::monthly_budget::Column::Period)
                    .unique()
                    .to_owned(),
            )
    }

    /// Connects to a new in-memory database and creates the configured tables and indexes.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context whose `db` is set and holds every table
    /// - `Err(TestError::Database)` - Connecting or a CREATE statement failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::connect().await?;
        context.create_tables(self.tables).await?;
        context.create_indexes(self.indexes).await?;

        Ok(context)
    }
}
