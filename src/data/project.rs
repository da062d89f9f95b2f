use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder,
};

use crate::model::project::{CreateProjectParams, UpdateProjectParams};
use entity::sea_orm_active_enums::ProjectStatus;

pub struct ProjectRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProjectRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new project.
    ///
    /// # Arguments
    /// - `params`: Project fields; status falls back to PLANNED when absent
    ///
    /// # Returns
    /// - `Ok(Model)`: The created project
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        params: CreateProjectParams,
    ) -> Result<entity::project::Model, DbErr> {
        entity::project::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            goal: ActiveValue::Set(params.goal),
            requirements: ActiveValue::Set(params.requirements),
            eval_criteria: ActiveValue::Set(params.eval_criteria),
            year: ActiveValue::Set(params.year),
            semester: ActiveValue::Set(params.semester),
            status: ActiveValue::Set(params.status.unwrap_or(ProjectStatus::Planned)),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a project by ID.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::project::Model>, DbErr> {
        entity::prelude::Project::find_by_id(id).one(self.db).await
    }

    /// Gets all projects, newest first.
    pub async fn get_all(&self) -> Result<Vec<entity::project::Model>, DbErr> {
        entity::prelude::Project::find()
            .order_by_desc(entity::project::Column::Year)
            .order_by_asc(entity::project::Column::Name)
            .all(self.db)
            .await
    }

    /// Updates a project, touching only the fields present in `params`.
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated project
    /// - `Err(DbErr)`: Database error, including `RecordNotFound` when the
    ///   project does not exist
    pub async fn update(
        &self,
        params: UpdateProjectParams,
    ) -> Result<entity::project::Model, DbErr> {
        let project = entity::prelude::Project::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Project {} not found",
                params.id
            )))?;

        let mut active_model: entity::project::ActiveModel = project.into();

        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(goal) = params.goal {
            active_model.goal = ActiveValue::Set(goal);
        }
        if let Some(requirements) = params.requirements {
            active_model.requirements = ActiveValue::Set(requirements);
        }
        if let Some(eval_criteria) = params.eval_criteria {
            active_model.eval_criteria = ActiveValue::Set(eval_criteria);
        }
        if let Some(year) = params.year {
            active_model.year = ActiveValue::Set(year);
        }
        if let Some(semester) = params.semester {
            active_model.semester = ActiveValue::Set(semester);
        }
        if let Some(status) = params.status {
            active_model.status = ActiveValue::Set(status);
        }

        active_model.update(self.db).await
    }

    /// Deletes a project by ID. Milestones and assignment rows cascade with
    /// it.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Project::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
