//! Domain models for team meetings.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::MeetingStatus;

/// A scheduled team check-in, chained to its chronological neighbours.
///
/// The `previous_meeting_id`/`next_meeting_id` pointers form a doubly-linked
/// chain scoped to one team. Creating a meeting with a predecessor patches the
/// predecessor's forward pointer in the same transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct Meeting {
    /// Unique identifier for the meeting.
    pub id: i32,
    /// ID of the owning team.
    pub team_id: i32,
    /// Display name of the meeting.
    pub name: String,
    /// Free-text notes taken at the meeting.
    pub resume: Option<String>,
    /// When the meeting takes place.
    pub date: DateTime<Utc>,
    /// Current lifecycle status.
    pub status: MeetingStatus,
    /// ID of the chronologically previous meeting of the same team.
    pub previous_meeting_id: Option<i32>,
    /// ID of the chronologically next meeting of the same team.
    pub next_meeting_id: Option<i32>,
}

impl Meeting {
    /// Converts an entity model to a meeting domain model at the repository
    /// boundary.
    pub fn from_entity(entity: entity::meeting::Model) -> Self {
        Self {
            id: entity.id,
            team_id: entity.team_id,
            name: entity.name,
            resume: entity.resume,
            date: entity.date,
            status: entity.status,
            previous_meeting_id: entity.previous_meeting_id,
            next_meeting_id: entity.next_meeting_id,
        }
    }
}

/// Parameters for creating a new meeting.
#[derive(Debug, Clone)]
pub struct CreateMeetingParams {
    /// ID of the owning team.
    pub team_id: i32,
    /// Display name of the meeting.
    pub name: String,
    /// Free-text notes, if already known at creation.
    pub resume: Option<String>,
    /// When the meeting takes place.
    pub date: DateTime<Utc>,
    /// Initial status; defaults to SCHEDULED when absent.
    pub status: Option<MeetingStatus>,
    /// Predecessor in the team's meeting chain. Must belong to the same team.
    pub previous_meeting_id: Option<i32>,
}

/// Parameters for updating an existing meeting.
///
/// All fields are optional - only provided fields will be updated. This is a
/// pure field overwrite for administrative corrections: setting `status` here
/// does not run the completion/cancellation transition logic.
#[derive(Debug, Clone, Default)]
pub struct UpdateMeetingParams {
    /// ID of the meeting to update.
    pub id: i32,
    /// New display name.
    pub name: Option<String>,
    /// New notes (outer Option indicates field presence, inner for the
    /// nullable value).
    pub resume: Option<Option<String>>,
    /// New meeting time.
    pub date: Option<DateTime<Utc>>,
    /// New status, overwritten without transition guards.
    pub status: Option<MeetingStatus>,
    /// New predecessor pointer.
    pub previous_meeting_id: Option<Option<i32>>,
    /// New successor pointer.
    pub next_meeting_id: Option<Option<i32>>,
}

/// Filters for listing a team's meetings.
#[derive(Debug, Clone, Default)]
pub struct MeetingListFilter {
    /// Only meetings with this status.
    pub status: Option<MeetingStatus>,
    /// Only meetings on or after this time.
    pub from_date: Option<DateTime<Utc>>,
    /// Only meetings on or before this time.
    pub to_date: Option<DateTime<Utc>>,
}
