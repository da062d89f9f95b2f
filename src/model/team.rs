//! Domain models for teams and team membership.

use chrono::{DateTime, Utc};

/// A group of students working on projects under a curator.
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    /// Unique identifier for the team.
    pub id: i32,
    /// Display name of the team.
    pub name: String,
    /// Link to the team's external chat/group, if any.
    pub group_link: Option<String>,
    /// Timestamp when the team was created.
    pub created_at: DateTime<Utc>,
}

impl Team {
    /// Converts an entity model to a team domain model at the repository
    /// boundary.
    pub fn from_entity(entity: entity::team::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            group_link: entity.group_link,
            created_at: entity.created_at,
        }
    }
}

/// Membership of a student in a team.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamMember {
    pub team_id: i32,
    pub student_id: i32,
    /// Role the student holds in the team, if any.
    pub role: Option<String>,
    /// Study group the student belonged to when joining.
    pub study_group: Option<String>,
}

impl TeamMember {
    pub fn from_entity(entity: entity::team_member::Model) -> Self {
        Self {
            team_id: entity.team_id,
            student_id: entity.student_id,
            role: entity.role,
            study_group: entity.study_group,
        }
    }
}

/// Parameters for creating a new team.
#[derive(Debug, Clone)]
pub struct CreateTeamParams {
    pub name: String,
    pub group_link: Option<String>,
}

/// Parameters for updating an existing team.
///
/// All fields are optional - only provided fields will be updated.
#[derive(Debug, Clone, Default)]
pub struct UpdateTeamParams {
    /// ID of the team to update.
    pub id: i32,
    /// New display name.
    pub name: Option<String>,
    /// New group link (outer Option indicates field presence, inner for the
    /// nullable value).
    pub group_link: Option<Option<String>>,
}

/// Parameters for adding a student to a team.
#[derive(Debug, Clone)]
pub struct AddTeamMemberParams {
    pub team_id: i32,
    pub student_id: i32,
    pub role: Option<String>,
    pub study_group: Option<String>,
}
