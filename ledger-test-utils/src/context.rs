//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context wraps an
//! in-memory SQLite database; fixture helpers for users, teams and progress are attached
//! to it by the `fixtures` modules.

use sea_orm::{
    sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection,
    EntityTrait, PaginatorTrait,
};

use crate::error::TestError;

/// Test context structure returned by `TestBuilder`
///
/// # Usage
///
/// ```ignore
/// let mut test = TestBuilder::new().with_ledger_tables().build().await?;
///
/// let user = test.user().insert_user("subject").await?;
/// let team = test.user().insert_team(user.id, "raid", "Binah").await?;
///
/// let service = LedgerService::new(&test.db);
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
}

impl TestContext {
    /// Convert the database connection into any type that can be constructed from it
    ///
    /// This allows conversion to AppState without creating a circular dependency
    /// between the test-utils crate and the main ledger crate.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let app_state: AppState = test.to_app_state();
    /// ```
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.db.clone())
    }

    /// Create a new test context backed by a fresh in-memory SQLite database.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized context with an empty database
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub(crate) async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db })
    }

    /// Create database tables from schema statements.
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Count the rows currently stored for an entity.
    ///
    /// Used to assert that rejected writes left the table untouched.
    pub async fn count<E: EntityTrait>(&self, _entity: E) -> Result<u64, TestError>
    where
        E::Model: Sync,
    {
        Ok(E::find().count(&self.db).await?)
    }

    /// Disable SQLite foreign key enforcement for the rest of the test.
    ///
    /// Lets a test store rows that break referential integrity, such as a team member
    /// pointing at a student missing from the catalog.
    pub async fn disable_foreign_keys(&self) -> Result<(), TestError> {
        self.db.execute_unprepared("PRAGMA foreign_keys = OFF").await?;

        Ok(())
    }
}
