use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{
        meeting::MeetingRepository, meeting_task::MeetingTaskRepository, task::TaskRepository,
        team::TeamRepository,
    },
    error::AppError,
    model::{
        meeting::{CreateMeetingParams, Meeting, MeetingListFilter, UpdateMeetingParams},
        task::Task,
    },
};
use entity::sea_orm_active_enums::MeetingStatus;

/// Manages the per-team meeting chain: creation with back-link maintenance,
/// completion with task carry-forward, and cancellation.
pub struct MeetingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MeetingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new meeting for a team.
    ///
    /// When `previous_meeting_id` is given, that meeting must exist and belong
    /// to the same team; its `next_meeting_id` is pointed at the new meeting.
    /// The insert and the back-link patch happen in one transaction so the
    /// chain never ends up half-linked.
    ///
    /// # Returns
    /// - `Ok(Meeting)`: The created meeting
    /// - `Err(AppError::NotFound)`: Team or previous meeting missing
    /// - `Err(AppError::BadRequest)`: Previous meeting owned by another team
    pub async fn create(&self, params: CreateMeetingParams) -> Result<Meeting, AppError> {
        let txn = self.db.begin().await?;

        let team_repo = TeamRepository::new(&txn);
        team_repo
            .get_by_id(params.team_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Team {} not found", params.team_id)))?;

        let meeting_repo = MeetingRepository::new(&txn);

        if let Some(previous_id) = params.previous_meeting_id {
            let previous = meeting_repo.get_by_id(previous_id).await?.ok_or_else(|| {
                AppError::NotFound(format!("Previous meeting {} not found", previous_id))
            })?;
            if previous.team_id != params.team_id {
                return Err(AppError::BadRequest(
                    "Previous meeting must belong to the same team".to_string(),
                ));
            }
        }

        let meeting = meeting_repo.create(params).await?;

        if let Some(previous_id) = meeting.previous_meeting_id {
            meeting_repo
                .update(UpdateMeetingParams {
                    id: previous_id,
                    next_meeting_id: Some(Some(meeting.id)),
                    ..Default::default()
                })
                .await?;
        }

        txn.commit().await?;

        Ok(Meeting::from_entity(meeting))
    }

    /// Gets a meeting by ID.
    pub async fn get(&self, meeting_id: i32) -> Result<Meeting, AppError> {
        let meeting = MeetingRepository::new(self.db)
            .get_by_id(meeting_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Meeting {} not found", meeting_id)))?;

        Ok(Meeting::from_entity(meeting))
    }

    /// Gets all meetings of a team, date ascending, with optional status and
    /// date-range filters.
    pub async fn get_team_meetings(
        &self,
        team_id: i32,
        filter: &MeetingListFilter,
    ) -> Result<Vec<Meeting>, AppError> {
        TeamRepository::new(self.db)
            .get_by_id(team_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Team {} not found", team_id)))?;

        let meetings = MeetingRepository::new(self.db)
            .get_by_team_id(team_id, filter)
            .await?;

        Ok(meetings.into_iter().map(Meeting::from_entity).collect())
    }

    /// Gets the tasks on a meeting's agenda.
    pub async fn get_meeting_tasks(&self, meeting_id: i32) -> Result<Vec<Task>, AppError> {
        MeetingRepository::new(self.db)
            .get_by_id(meeting_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Meeting {} not found", meeting_id)))?;

        let tasks = TaskRepository::new(self.db)
            .get_by_meeting_id(meeting_id)
            .await?;

        Ok(tasks.into_iter().map(Task::from_entity).collect())
    }

    /// Completes a meeting and carries its unfinished tasks forward.
    ///
    /// Incomplete tasks are linked to the team's next upcoming SCHEDULED
    /// meeting (date >= now, earliest wins, the meeting itself excluded). The
    /// links to the completed meeting stay in place, so its agenda remains a
    /// full record of what was on the table. When no destination exists the
    /// tasks simply stay where they are.
    ///
    /// The whole sequence - load tasks, link forward, flip status - runs in
    /// one transaction; a failure mid-way leaves no partial forwarding.
    ///
    /// # Returns
    /// - `Ok(Meeting)`: The completed meeting
    /// - `Err(AppError::NotFound)`: Meeting missing
    /// - `Err(AppError::BadRequest)`: Meeting already completed or canceled
    pub async fn complete(&self, meeting_id: i32) -> Result<Meeting, AppError> {
        let txn = self.db.begin().await?;

        let meeting_repo = MeetingRepository::new(&txn);
        let meeting = meeting_repo
            .get_by_id(meeting_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Meeting {} not found", meeting_id)))?;

        match meeting.status {
            MeetingStatus::Completed => {
                return Err(AppError::BadRequest(
                    "Meeting is already completed".to_string(),
                ));
            }
            MeetingStatus::Canceled => {
                return Err(AppError::BadRequest(
                    "Cannot complete a canceled meeting".to_string(),
                ));
            }
            _ => {}
        }

        let task_repo = TaskRepository::new(&txn);
        let tasks = task_repo.get_by_meeting_id(meeting_id).await?;

        let mut forwarded = 0;
        if let Some(next_meeting) = meeting_repo
            .get_upcoming(meeting.team_id, Some(meeting.id))
            .await?
        {
            let link_repo = MeetingTaskRepository::new(&txn);
            for task in tasks.iter().filter(|task| !task.is_completed) {
                // A task may already sit on the destination agenda; the pair
                // is unique, so only missing links are added.
                if link_repo
                    .get_by_meeting_and_task(next_meeting.id, task.id)
                    .await?
                    .is_none()
                {
                    link_repo.create(next_meeting.id, task.id).await?;
                    forwarded += 1;
                }
            }
        }

        let completed = meeting_repo
            .update(UpdateMeetingParams {
                id: meeting_id,
                status: Some(MeetingStatus::Completed),
                ..Default::default()
            })
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Completed meeting {} for team {}, {} task(s) carried forward",
            meeting_id,
            completed.team_id,
            forwarded
        );

        Ok(Meeting::from_entity(completed))
    }

    /// Cancels a meeting. No task forwarding occurs.
    ///
    /// # Returns
    /// - `Ok(Meeting)`: The canceled meeting
    /// - `Err(AppError::NotFound)`: Meeting missing
    /// - `Err(AppError::BadRequest)`: Meeting already completed or canceled
    pub async fn cancel(&self, meeting_id: i32) -> Result<Meeting, AppError> {
        let meeting_repo = MeetingRepository::new(self.db);
        let meeting = meeting_repo
            .get_by_id(meeting_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Meeting {} not found", meeting_id)))?;

        match meeting.status {
            MeetingStatus::Completed => {
                return Err(AppError::BadRequest(
                    "Cannot cancel a completed meeting".to_string(),
                ));
            }
            MeetingStatus::Canceled => {
                return Err(AppError::BadRequest(
                    "Meeting is already canceled".to_string(),
                ));
            }
            _ => {}
        }

        let canceled = meeting_repo
            .update(UpdateMeetingParams {
                id: meeting_id,
                status: Some(MeetingStatus::Canceled),
                ..Default::default()
            })
            .await?;

        tracing::info!("Canceled meeting {} for team {}", meeting_id, canceled.team_id);

        Ok(Meeting::from_entity(canceled))
    }

    /// Updates a meeting's fields without running chain or transition logic.
    ///
    /// Administrative override: status set through here bypasses the
    /// completion/cancellation guards and triggers no forwarding.
    pub async fn update(&self, params: UpdateMeetingParams) -> Result<Meeting, AppError> {
        let meeting_repo = MeetingRepository::new(self.db);
        meeting_repo
            .get_by_id(params.id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Meeting {} not found", params.id)))?;

        let updated = meeting_repo.update(params).await?;

        Ok(Meeting::from_entity(updated))
    }

    /// Deletes a meeting. Agenda links go with it; tasks survive.
    pub async fn delete(&self, meeting_id: i32) -> Result<(), AppError> {
        let meeting_repo = MeetingRepository::new(self.db);
        meeting_repo
            .get_by_id(meeting_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Meeting {} not found", meeting_id)))?;

        meeting_repo.delete(meeting_id).await?;

        Ok(())
    }
}
