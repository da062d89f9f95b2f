use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

pub struct MeetingTaskRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MeetingTaskRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an agenda link between a meeting and a task.
    ///
    /// The composite primary key rejects a second link for the same pair.
    pub async fn create(
        &self,
        meeting_id: i32,
        task_id: i32,
    ) -> Result<entity::meeting_task::Model, DbErr> {
        entity::meeting_task::ActiveModel {
            meeting_id: ActiveValue::Set(meeting_id),
            task_id: ActiveValue::Set(task_id),
        }
        .insert(self.db)
        .await
    }

    /// Finds the agenda link for a specific (meeting, task) pair.
    pub async fn get_by_meeting_and_task(
        &self,
        meeting_id: i32,
        task_id: i32,
    ) -> Result<Option<entity::meeting_task::Model>, DbErr> {
        entity::prelude::MeetingTask::find()
            .filter(entity::meeting_task::Column::MeetingId.eq(meeting_id))
            .filter(entity::meeting_task::Column::TaskId.eq(task_id))
            .one(self.db)
            .await
    }

    /// Deletes the agenda link for a (meeting, task) pair. The task itself is
    /// untouched.
    ///
    /// # Returns
    /// - `Ok(true)`: The link existed and was removed
    /// - `Ok(false)`: No such link
    pub async fn delete_by_meeting_and_task(
        &self,
        meeting_id: i32,
        task_id: i32,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::MeetingTask::delete_many()
            .filter(entity::meeting_task::Column::MeetingId.eq(meeting_id))
            .filter(entity::meeting_task::Column::TaskId.eq(task_id))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
