//! Task factory for creating test task entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test tasks with customizable fields.
pub struct TaskFactory<'a> {
    db: &'a DatabaseConnection,
    description: String,
    is_completed: bool,
}

impl<'a> TaskFactory<'a> {
    /// Creates a new TaskFactory with default values.
    ///
    /// Defaults:
    /// - description: `"Task {id}"` where id is auto-incremented
    /// - is_completed: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            description: format!("Task {}", id),
            is_completed: false,
        }
    }

    /// Sets the task description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the completion flag.
    pub fn completed(mut self, is_completed: bool) -> Self {
        self.is_completed = is_completed;
        self
    }

    /// Builds and inserts the task entity into the database.
    pub async fn build(self) -> Result<entity::task::Model, DbErr> {
        entity::task::ActiveModel {
            id: ActiveValue::NotSet,
            description: ActiveValue::Set(self.description),
            is_completed: ActiveValue::Set(self.is_completed),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an incomplete task with default values.
///
/// Shorthand for `TaskFactory::new(db).build().await`.
pub async fn create_task(db: &DatabaseConnection) -> Result<entity::task::Model, DbErr> {
    TaskFactory::new(db).build().await
}
