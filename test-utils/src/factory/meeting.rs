//! Meeting factory for creating test meeting entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::MeetingStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test meetings with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::meeting::MeetingFactory;
/// use entity::sea_orm_active_enums::MeetingStatus;
///
/// let meeting = MeetingFactory::new(&db, team.id)
///     .date(Utc::now() + chrono::Duration::days(7))
///     .status(MeetingStatus::Scheduled)
///     .build()
///     .await?;
/// ```
pub struct MeetingFactory<'a> {
    db: &'a DatabaseConnection,
    team_id: i32,
    name: String,
    resume: Option<String>,
    date: DateTime<Utc>,
    status: MeetingStatus,
    previous_meeting_id: Option<i32>,
}

impl<'a> MeetingFactory<'a> {
    /// Creates a new MeetingFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Meeting {id}"` where id is auto-incremented
    /// - resume: `None`
    /// - date: 1 hour from now
    /// - status: `Scheduled`
    /// - previous_meeting_id: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `team_id` - ID of the team owning the meeting
    pub fn new(db: &'a DatabaseConnection, team_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            team_id,
            name: format!("Meeting {}", id),
            resume: None,
            date: Utc::now() + chrono::Duration::hours(1),
            status: MeetingStatus::Scheduled,
            previous_meeting_id: None,
        }
    }

    /// Sets the meeting name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the meeting notes.
    pub fn resume(mut self, resume: Option<String>) -> Self {
        self.resume = resume;
        self
    }

    /// Sets the meeting time.
    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    /// Sets the meeting status.
    pub fn status(mut self, status: MeetingStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the predecessor pointer. The factory does not patch the
    /// predecessor's forward pointer; that is service behavior.
    pub fn previous_meeting_id(mut self, previous_meeting_id: Option<i32>) -> Self {
        self.previous_meeting_id = previous_meeting_id;
        self
    }

    /// Builds and inserts the meeting entity into the database.
    pub async fn build(self) -> Result<entity::meeting::Model, DbErr> {
        entity::meeting::ActiveModel {
            id: ActiveValue::NotSet,
            team_id: ActiveValue::Set(self.team_id),
            name: ActiveValue::Set(self.name),
            resume: ActiveValue::Set(self.resume),
            date: ActiveValue::Set(self.date),
            status: ActiveValue::Set(self.status),
            previous_meeting_id: ActiveValue::Set(self.previous_meeting_id),
            next_meeting_id: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a scheduled meeting with default values for the given team.
///
/// Shorthand for `MeetingFactory::new(db, team_id).build().await`.
pub async fn create_meeting(
    db: &DatabaseConnection,
    team_id: i32,
) -> Result<entity::meeting::Model, DbErr> {
    MeetingFactory::new(db, team_id).build().await
}
