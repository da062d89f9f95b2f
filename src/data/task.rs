use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType,
    QueryFilter, QuerySelect, RelationTrait,
};

use crate::model::task::{CreateTaskParams, UpdateTaskParams};

pub struct TaskRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TaskRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new task, initially incomplete.
    pub async fn create(&self, params: CreateTaskParams) -> Result<entity::task::Model, DbErr> {
        entity::task::ActiveModel {
            description: ActiveValue::Set(params.description),
            is_completed: ActiveValue::Set(false),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a task by ID.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::task::Model>, DbErr> {
        entity::prelude::Task::find_by_id(id).one(self.db).await
    }

    /// Gets all tasks on a meeting's agenda.
    ///
    /// # Returns
    /// - `Ok(tasks)`: Tasks linked to the meeting through `meeting_task`
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_meeting_id(
        &self,
        meeting_id: i32,
    ) -> Result<Vec<entity::task::Model>, DbErr> {
        entity::prelude::Task::find()
            .join(JoinType::InnerJoin, entity::task::Relation::MeetingTask.def())
            .filter(entity::meeting_task::Column::MeetingId.eq(meeting_id))
            .all(self.db)
            .await
    }

    /// Gets the incomplete tasks of a team across all its meetings.
    ///
    /// Joins Task -> MeetingTask -> Meeting filtered by team. A task forwarded
    /// across several meetings appears once thanks to the DISTINCT.
    ///
    /// # Returns
    /// - `Ok(tasks)`: Deduplicated incomplete tasks of the team
    /// - `Err(DbErr)`: Database error
    pub async fn get_incomplete_by_team(
        &self,
        team_id: i32,
    ) -> Result<Vec<entity::task::Model>, DbErr> {
        entity::prelude::Task::find()
            .join(JoinType::InnerJoin, entity::task::Relation::MeetingTask.def())
            .join(
                JoinType::InnerJoin,
                entity::meeting_task::Relation::Meeting.def(),
            )
            .filter(entity::meeting::Column::TeamId.eq(team_id))
            .filter(entity::task::Column::IsCompleted.eq(false))
            .distinct()
            .all(self.db)
            .await
    }

    /// Updates a task, touching only the fields present in `params`.
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated task
    /// - `Err(DbErr)`: Database error, including `RecordNotFound` when the
    ///   task does not exist
    pub async fn update(&self, params: UpdateTaskParams) -> Result<entity::task::Model, DbErr> {
        let task = entity::prelude::Task::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Task {} not found",
                params.id
            )))?;

        let mut active_model: entity::task::ActiveModel = task.into();

        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(is_completed) = params.is_completed {
            active_model.is_completed = ActiveValue::Set(is_completed);
        }

        active_model.update(self.db).await
    }

    /// Deletes a task by ID. Its agenda links cascade with it.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Task::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
