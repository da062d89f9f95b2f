//! Domain models for team-to-project assignments.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::ProjectTeamStatus;

/// The assignment record linking one team to one project.
///
/// At most one assignment per team may be ACTIVE within a given
/// (year, semester); the engine enforces this at the application layer since
/// the rule spans a join onto the project table. Withdrawn assignments keep
/// their row with status WITHDRAWN so participation history survives.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectTeam {
    /// Surrogate identifier of the assignment row.
    pub id: i32,
    /// ID of the assigned project.
    pub project_id: i32,
    /// ID of the assigned team.
    pub team_id: i32,
    /// Timestamp when the assignment was made.
    pub assigned_at: DateTime<Utc>,
    /// Current engagement status.
    pub status: ProjectTeamStatus,
}

impl ProjectTeam {
    /// Converts an entity model to an assignment domain model at the
    /// repository boundary.
    pub fn from_entity(entity: entity::project_team::Model) -> Self {
        Self {
            id: entity.id,
            project_id: entity.project_id,
            team_id: entity.team_id,
            assigned_at: entity.assigned_at,
            status: entity.status,
        }
    }
}

/// Parameters for assigning a team to a project.
#[derive(Debug, Clone)]
pub struct AssignTeamToProjectParams {
    pub project_id: i32,
    pub team_id: i32,
    /// Initial engagement status; defaults to ACTIVE when absent.
    pub status: Option<ProjectTeamStatus>,
}
