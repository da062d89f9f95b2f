//! Domain models for project milestones.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::MilestoneType;

/// A dated checkpoint in a project's schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct Milestone {
    pub id: i32,
    pub project_id: i32,
    pub date: DateTime<Utc>,
    pub title: String,
    pub milestone_type: MilestoneType,
    pub description: Option<String>,
}

impl Milestone {
    pub fn from_entity(entity: entity::milestone::Model) -> Self {
        Self {
            id: entity.id,
            project_id: entity.project_id,
            date: entity.date,
            title: entity.title,
            milestone_type: entity.milestone_type,
            description: entity.description,
        }
    }
}

/// Parameters for adding a milestone to a project.
#[derive(Debug, Clone)]
pub struct CreateMilestoneParams {
    pub project_id: i32,
    pub date: DateTime<Utc>,
    pub title: String,
    pub milestone_type: MilestoneType,
    pub description: Option<String>,
}

/// Parameters for updating an existing milestone.
///
/// All fields are optional - only provided fields will be updated.
#[derive(Debug, Clone, Default)]
pub struct UpdateMilestoneParams {
    pub id: i32,
    pub date: Option<DateTime<Utc>>,
    pub title: Option<String>,
    pub milestone_type: Option<MilestoneType>,
    pub description: Option<Option<String>>,
}
