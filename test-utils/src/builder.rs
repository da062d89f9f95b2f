use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with
/// in-memory SQLite databases. Use the builder pattern to add entity tables,
/// then call `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Team, Meeting};
///
/// let test = TestBuilder::new()
///     .with_table(Team)
///     .with_table(Meeting)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements to execute during database setup, generated
    /// from entity models and executed in insertion order.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity
    /// using SQLite backend syntax. Tables should be added in dependency
    /// order (tables with foreign keys after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a
    ///   table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds all tables required for meeting and task operations.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - Team
    /// - Meeting
    /// - Task
    /// - MeetingTask
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_meeting_tables(self) -> Self {
        self.with_table(Team)
            .with_table(Meeting)
            .with_table(Task)
            .with_table(MeetingTask)
    }

    /// Adds all tables required for project assignment operations.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - Team
    /// - Project
    /// - ProjectTeam
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_project_tables(self) -> Self {
        self.with_table(Team)
            .with_table(Project)
            .with_table(ProjectTeam)
    }

    /// Adds all tables required for team membership operations.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - Team
    /// - Student
    /// - TeamMember
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_member_tables(self) -> Self {
        self.with_table(Team)
            .with_table(Student)
            .with_table(TeamMember)
    }

    /// Adds every table of the schema in dependency order.
    pub fn with_all_tables(self) -> Self {
        self.with_table(Team)
            .with_table(Student)
            .with_table(TeamMember)
            .with_table(Project)
            .with_table(Milestone)
            .with_table(ProjectTeam)
            .with_table(Meeting)
            .with_table(Task)
            .with_table(MeetingTask)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all
    /// CREATE TABLE statements that were added via `with_table()`.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with tables ready
    /// - `Err(TestError::Database)` - Failed to connect or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
