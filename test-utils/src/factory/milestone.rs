//! Milestone factory for creating test milestone entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::MilestoneType;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a control-point milestone for the given project at the given date.
pub async fn create_milestone(
    db: &DatabaseConnection,
    project_id: i32,
    date: DateTime<Utc>,
) -> Result<entity::milestone::Model, DbErr> {
    let id = next_id();
    entity::milestone::ActiveModel {
        id: ActiveValue::NotSet,
        project_id: ActiveValue::Set(project_id),
        date: ActiveValue::Set(date),
        title: ActiveValue::Set(format!("Milestone {}", id)),
        milestone_type: ActiveValue::Set(MilestoneType::ControlPoint),
        description: ActiveValue::Set(None),
    }
    .insert(db)
    .await
}
