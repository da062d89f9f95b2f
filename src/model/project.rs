//! Domain models for projects.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{ProjectStatus, Semester};

/// A unit of work offered to teams, scoped to a year and semester.
///
/// Status moves linearly PLANNED -> IN_PROGRESS -> COMPLETED through the
/// guarded `start`/`complete` transitions; ARCHIVED is reachable from any
/// other state.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    /// Unique identifier for the project.
    pub id: i32,
    /// Display name of the project.
    pub name: String,
    /// Free-text description.
    pub description: Option<String>,
    /// What the project is meant to achieve.
    pub goal: Option<String>,
    /// Prerequisites and constraints for participating teams.
    pub requirements: Option<String>,
    /// How the project outcome is evaluated.
    pub eval_criteria: Option<String>,
    /// Calendar year the project runs in.
    pub year: i32,
    /// Semester the project runs in.
    pub semester: Semester,
    /// Current lifecycle status.
    pub status: ProjectStatus,
    /// Timestamp when the project was created.
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Converts an entity model to a project domain model at the repository
    /// boundary.
    pub fn from_entity(entity: entity::project::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            goal: entity.goal,
            requirements: entity.requirements,
            eval_criteria: entity.eval_criteria,
            year: entity.year,
            semester: entity.semester,
            status: entity.status,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for creating a new project.
#[derive(Debug, Clone)]
pub struct CreateProjectParams {
    pub name: String,
    pub description: Option<String>,
    pub goal: Option<String>,
    pub requirements: Option<String>,
    pub eval_criteria: Option<String>,
    /// Calendar year, validated to be 2000 or later.
    pub year: i32,
    pub semester: Semester,
    /// Initial status; defaults to PLANNED when absent.
    pub status: Option<ProjectStatus>,
}

/// Parameters for updating an existing project.
///
/// All fields are optional - only provided fields will be updated. Setting
/// `status` here bypasses the guarded transitions and is meant for
/// administrative corrections.
#[derive(Debug, Clone, Default)]
pub struct UpdateProjectParams {
    /// ID of the project to update.
    pub id: i32,
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub goal: Option<Option<String>>,
    pub requirements: Option<Option<String>>,
    pub eval_criteria: Option<Option<String>>,
    pub year: Option<i32>,
    pub semester: Option<Semester>,
    pub status: Option<ProjectStatus>,
}
