//! Project factory for creating test project entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::{ProjectStatus, Semester};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test projects with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::project::ProjectFactory;
/// use entity::sea_orm_active_enums::Semester;
///
/// let project = ProjectFactory::new(&db)
///     .year(2027)
///     .semester(Semester::Spring)
///     .build()
///     .await?;
/// ```
pub struct ProjectFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: Option<String>,
    year: i32,
    semester: Semester,
    status: ProjectStatus,
}

impl<'a> ProjectFactory<'a> {
    /// Creates a new ProjectFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Project {id}"` where id is auto-incremented
    /// - description: `Some("Test project description")`
    /// - year: `2026`
    /// - semester: `Autumn`
    /// - status: `Planned`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Project {}", id),
            description: Some("Test project description".to_string()),
            year: 2026,
            semester: Semester::Autumn,
            status: ProjectStatus::Planned,
        }
    }

    /// Sets the project name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the project year.
    pub fn year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Sets the semester.
    pub fn semester(mut self, semester: Semester) -> Self {
        self.semester = semester;
        self
    }

    /// Sets the project status.
    pub fn status(mut self, status: ProjectStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the project entity into the database.
    pub async fn build(self) -> Result<entity::project::Model, DbErr> {
        entity::project::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            goal: ActiveValue::Set(None),
            requirements: ActiveValue::Set(None),
            eval_criteria: ActiveValue::Set(None),
            year: ActiveValue::Set(self.year),
            semester: ActiveValue::Set(self.semester),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a project with default values.
///
/// Shorthand for `ProjectFactory::new(db).build().await`.
pub async fn create_project(db: &DatabaseConnection) -> Result<entity::project::Model, DbErr> {
    ProjectFactory::new(db).build().await
}
