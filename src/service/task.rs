use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{
        meeting::MeetingRepository, meeting_task::MeetingTaskRepository, task::TaskRepository,
    },
    error::AppError,
    model::task::{CreateTaskParams, Task, UpdateTaskParams},
};

/// The task ledger: task CRUD plus agenda association management.
pub struct TaskService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TaskService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a task and puts it on a meeting's agenda atomically.
    ///
    /// # Returns
    /// - `Ok(Task)`: The created task, already linked to the meeting
    /// - `Err(AppError::NotFound)`: Meeting missing
    pub async fn create_for_meeting(
        &self,
        meeting_id: i32,
        params: CreateTaskParams,
    ) -> Result<Task, AppError> {
        let txn = self.db.begin().await?;

        MeetingRepository::new(&txn)
            .get_by_id(meeting_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Meeting {} not found", meeting_id)))?;

        let task = TaskRepository::new(&txn).create(params).await?;
        MeetingTaskRepository::new(&txn)
            .create(meeting_id, task.id)
            .await?;

        txn.commit().await?;

        Ok(Task::from_entity(task))
    }

    /// Gets a task by ID.
    pub async fn get(&self, task_id: i32) -> Result<Task, AppError> {
        let task = TaskRepository::new(self.db)
            .get_by_id(task_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Task {} not found", task_id)))?;

        Ok(Task::from_entity(task))
    }

    /// Updates a task, touching only the fields present in `params`.
    pub async fn update(&self, params: UpdateTaskParams) -> Result<Task, AppError> {
        let task_repo = TaskRepository::new(self.db);
        task_repo
            .get_by_id(params.id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Task {} not found", params.id)))?;

        let updated = task_repo.update(params).await?;

        Ok(Task::from_entity(updated))
    }

    /// Marks a task as completed.
    ///
    /// # Returns
    /// - `Ok(Task)`: The completed task
    /// - `Err(AppError::NotFound)`: Task missing
    /// - `Err(AppError::BadRequest)`: Task is already completed
    pub async fn complete(&self, task_id: i32) -> Result<Task, AppError> {
        let task_repo = TaskRepository::new(self.db);
        let task = task_repo
            .get_by_id(task_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Task {} not found", task_id)))?;

        if task.is_completed {
            return Err(AppError::BadRequest("Task is already completed".to_string()));
        }

        let completed = task_repo
            .update(UpdateTaskParams {
                id: task_id,
                is_completed: Some(true),
                ..Default::default()
            })
            .await?;

        Ok(Task::from_entity(completed))
    }

    /// Deletes a task. Agenda links cascade with it.
    pub async fn delete(&self, task_id: i32) -> Result<(), AppError> {
        let task_repo = TaskRepository::new(self.db);
        task_repo
            .get_by_id(task_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Task {} not found", task_id)))?;

        task_repo.delete(task_id).await?;

        Ok(())
    }

    /// Puts an existing task on a meeting's agenda.
    ///
    /// # Returns
    /// - `Ok(())`: Link created
    /// - `Err(AppError::NotFound)`: Meeting or task missing
    /// - `Err(AppError::BadRequest)`: The task is already on this agenda
    pub async fn add_to_meeting(&self, meeting_id: i32, task_id: i32) -> Result<(), AppError> {
        MeetingRepository::new(self.db)
            .get_by_id(meeting_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Meeting {} not found", meeting_id)))?;

        TaskRepository::new(self.db)
            .get_by_id(task_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Task {} not found", task_id)))?;

        let link_repo = MeetingTaskRepository::new(self.db);
        if link_repo
            .get_by_meeting_and_task(meeting_id, task_id)
            .await?
            .is_some()
        {
            return Err(AppError::BadRequest(
                "Task is already added to this meeting".to_string(),
            ));
        }

        link_repo.create(meeting_id, task_id).await?;

        Ok(())
    }

    /// Removes a task from a meeting's agenda. The task itself survives.
    ///
    /// # Returns
    /// - `Ok(())`: Link removed
    /// - `Err(AppError::NotFound)`: No link between this meeting and task
    pub async fn remove_from_meeting(&self, meeting_id: i32, task_id: i32) -> Result<(), AppError> {
        let deleted = MeetingTaskRepository::new(self.db)
            .delete_by_meeting_and_task(meeting_id, task_id)
            .await?;

        if !deleted {
            return Err(AppError::NotFound(
                "Link between meeting and task not found".to_string(),
            ));
        }

        Ok(())
    }

    /// Gets the incomplete tasks of a team across all its meetings,
    /// deduplicated.
    pub async fn get_team_incomplete(&self, team_id: i32) -> Result<Vec<Task>, AppError> {
        let tasks = TaskRepository::new(self.db)
            .get_incomplete_by_team(team_id)
            .await?;

        Ok(tasks.into_iter().map(Task::from_entity).collect())
    }
}
