use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::MeetingStatus;

/// A team check-in. Meetings of one team form a doubly-linked chain through
/// `previous_meeting_id`/`next_meeting_id`; both pointers must stay within the
/// owning team.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "meeting")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub team_id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub resume: Option<String>,
    pub date: DateTimeUtc,
    pub status: MeetingStatus,
    pub previous_meeting_id: Option<i32>,
    pub next_meeting_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::TeamId",
        to = "super::team::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Team,
    #[sea_orm(
        belongs_to = "Entity",
        from = "Column::PreviousMeetingId",
        to = "Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    PreviousMeeting,
    #[sea_orm(
        belongs_to = "Entity",
        from = "Column::NextMeetingId",
        to = "Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    NextMeeting,
    #[sea_orm(has_many = "super::meeting_task::Entity")]
    MeetingTask,
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl Related<super::meeting_task::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MeetingTask.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
