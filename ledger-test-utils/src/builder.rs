//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before
//! execution. Configuration calls are queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{
    constant::{TEST_MODE_RULES, TEST_PROGRESS_CAPS},
    error::TestError,
    TestContext,
};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// catalog fixtures. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_ledger_tables: bool,

    // Catalog fixtures to insert
    students: Vec<(String, String)>, // (student_id, name)
    progress_caps: Vec<(String, i32, i32)>,
    mode_rules: Vec<(String, i32)>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_ledger_tables: false,
            students: Vec::new(),
            progress_caps: Vec::new(),
            mode_rules: Vec::new(),
        }
    }

    /// Add every ledger table to the test database.
    ///
    /// Tables are created in foreign key order: users, students, user_student_progress,
    /// teams, team_members, team_mode_rules and progress_caps.
    pub fn with_ledger_tables(mut self) -> Self {
        self.include_ledger_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ledger_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), ledger_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(User)
    ///     .with_table(Student)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a catalog student built from [`mock_student`](crate::fixtures::catalog::mock_student).
    pub fn with_student(mut self, student_id: &str, name: &str) -> Self {
        self.students.push((student_id.to_string(), name.to_string()));
        self
    }

    /// Insert the standard progress caps from [`TEST_PROGRESS_CAPS`].
    pub fn with_progress_caps(mut self) -> Self {
        self.progress_caps.extend(
            TEST_PROGRESS_CAPS
                .iter()
                .map(|(key, min, max)| (key.to_string(), *min, *max)),
        );
        self
    }

    /// Insert a single progress cap row.
    pub fn with_progress_cap(mut self, key: &str, min_value: i32, max_value: i32) -> Self {
        self.progress_caps.push((key.to_string(), min_value, max_value));
        self
    }

    /// Insert the standard team mode rules from [`TEST_MODE_RULES`].
    pub fn with_mode_rules(mut self) -> Self {
        self.mode_rules.extend(
            TEST_MODE_RULES
                .iter()
                .map(|(mode, slot_count)| (mode.to_string(), *slot_count)),
        );
        self
    }

    /// Insert a single team mode rule row.
    pub fn with_mode_rule(mut self, mode: &str, slot_count: i32) -> Self {
        self.mode_rules.push((mode.to_string(), slot_count));
        self
    }

    /// Build the test context, creating tables and inserting queued fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with tables and fixtures in place
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new().await?;

        let mut tables = Vec::new();
        if self.include_ledger_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            tables.push(schema.create_table_from_entity(entity::prelude::User));
            tables.push(schema.create_table_from_entity(entity::prelude::Student));
            tables.push(schema.create_table_from_entity(entity::prelude::UserStudentProgress));
            tables.push(schema.create_table_from_entity(entity::prelude::Team));
            tables.push(schema.create_table_from_entity(entity::prelude::TeamMember));
            tables.push(schema.create_table_from_entity(entity::prelude::TeamModeRule));
            tables.push(schema.create_table_from_entity(entity::prelude::ProgressCap));
        }
        tables.extend(self.tables);
        context.with_tables(tables).await?;

        for (student_id, name) in &self.students {
            context.catalog().insert_student(student_id, name).await?;
        }
        for (key, min_value, max_value) in &self.progress_caps {
            context
                .catalog()
                .insert_progress_cap(key, *min_value, *max_value)
                .await?;
        }
        for (mode, slot_count) in &self.mode_rules {
            context.catalog().insert_mode_rule(mode, *slot_count).await?;
        }

        Ok(context)
    }
}
