use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement},
    ConnectionTrait, Database, DatabaseConnection,
};

use crate::error::TestError;

/// SQLite URL of a private in-memory database. SeaORM keeps a single pooled
/// connection for it, so clones of the connection see the same data.
const IN_MEMORY_URL: &str = "sqlite::memory:";

/// An isolated database for one test.
///
/// The schema disappears with the last clone of the connection.
#[derive(Default)]
pub struct TestContext {
    /// Set by `TestBuilder::build`; `None` only for a default-constructed context.
    pub db: Option<DatabaseConnection>,
}

impl TestContext {
    /// Opens a fresh in-memory database with no tables.
    pub async fn connect() -> Result<Self, TestError> {
        let db = Database::connect(IN_MEMORY_URL).await?;

        Ok(Self { db: Some(db) })
    }

    /// Runs the CREATE TABLE statements in order, connecting first if needed.
    ///
    /// Referenced tables must come before the tables pointing at them.
    pub async fn create_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        if self.db.is_none() {
            self.db = Some(Database::connect(IN_MEMORY_URL).await?);
        }

        if let Some(db) = self.db.as_ref() {
            for stmt in &stmts {
                db.execute(stmt).await?;
            }
        }

        Ok(())
    }

    /// Runs the CREATE INDEX statements. Does nothing before a connection exists.
    pub async fn create_indexes(&self, stmts: Vec<IndexCreateStatement>) -> Result<(), TestError> {
        if let Some(db) = self.db.as_ref() {
            for stmt in &stmts {
                db.execute(stmt).await?;
            }
        }

        Ok(())
    }
}
