use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::model::milestone::{CreateMilestoneParams, UpdateMilestoneParams};

pub struct MilestoneRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MilestoneRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new milestone.
    pub async fn create(
        &self,
        params: CreateMilestoneParams,
    ) -> Result<entity::milestone::Model, DbErr> {
        entity::milestone::ActiveModel {
            project_id: ActiveValue::Set(params.project_id),
            date: ActiveValue::Set(params.date),
            title: ActiveValue::Set(params.title),
            milestone_type: ActiveValue::Set(params.milestone_type),
            description: ActiveValue::Set(params.description),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a milestone by ID.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::milestone::Model>, DbErr> {
        entity::prelude::Milestone::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Gets all milestones of a project, earliest first.
    pub async fn get_by_project_id(
        &self,
        project_id: i32,
    ) -> Result<Vec<entity::milestone::Model>, DbErr> {
        entity::prelude::Milestone::find()
            .filter(entity::milestone::Column::ProjectId.eq(project_id))
            .order_by_asc(entity::milestone::Column::Date)
            .all(self.db)
            .await
    }

    /// Updates a milestone, touching only the fields present in `params`.
    pub async fn update(
        &self,
        params: UpdateMilestoneParams,
    ) -> Result<entity::milestone::Model, DbErr> {
        let milestone = entity::prelude::Milestone::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Milestone {} not found",
                params.id
            )))?;

        let mut active_model: entity::milestone::ActiveModel = milestone.into();

        if let Some(date) = params.date {
            active_model.date = ActiveValue::Set(date);
        }
        if let Some(title) = params.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(milestone_type) = params.milestone_type {
            active_model.milestone_type = ActiveValue::Set(milestone_type);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(description);
        }

        active_model.update(self.db).await
    }

    /// Deletes a milestone by ID.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Milestone::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
