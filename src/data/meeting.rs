use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::model::meeting::{CreateMeetingParams, MeetingListFilter, UpdateMeetingParams};
use entity::sea_orm_active_enums::MeetingStatus;

pub struct MeetingRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MeetingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new meeting row.
    ///
    /// Chain maintenance (patching the predecessor's forward pointer) is the
    /// service's job; this method only writes the one row.
    ///
    /// # Returns
    /// - `Ok(Model)`: The created meeting
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        params: CreateMeetingParams,
    ) -> Result<entity::meeting::Model, DbErr> {
        entity::meeting::ActiveModel {
            team_id: ActiveValue::Set(params.team_id),
            name: ActiveValue::Set(params.name),
            resume: ActiveValue::Set(params.resume),
            date: ActiveValue::Set(params.date),
            status: ActiveValue::Set(params.status.unwrap_or(MeetingStatus::Scheduled)),
            previous_meeting_id: ActiveValue::Set(params.previous_meeting_id),
            next_meeting_id: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a meeting by ID.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::meeting::Model>, DbErr> {
        entity::prelude::Meeting::find_by_id(id).one(self.db).await
    }

    /// Gets all meetings of a team, date ascending.
    ///
    /// # Arguments
    /// - `team_id`: ID of the owning team
    /// - `filter`: Optional status and date-range filters
    ///
    /// # Returns
    /// - `Ok(meetings)`: Matching meetings ordered by date
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_team_id(
        &self,
        team_id: i32,
        filter: &MeetingListFilter,
    ) -> Result<Vec<entity::meeting::Model>, DbErr> {
        let mut query = entity::prelude::Meeting::find()
            .filter(entity::meeting::Column::TeamId.eq(team_id));

        if let Some(status) = filter.status.clone() {
            query = query.filter(entity::meeting::Column::Status.eq(status));
        }
        if let Some(from_date) = filter.from_date {
            query = query.filter(entity::meeting::Column::Date.gte(from_date));
        }
        if let Some(to_date) = filter.to_date {
            query = query.filter(entity::meeting::Column::Date.lte(to_date));
        }

        query
            .order_by_asc(entity::meeting::Column::Date)
            .all(self.db)
            .await
    }

    /// Gets the team's next upcoming SCHEDULED meeting (date >= now, earliest
    /// first).
    ///
    /// This is the destination query for task carry-forward. A meeting being
    /// completed may itself still be scheduled in the future, so callers can
    /// exclude it to avoid forwarding tasks onto the agenda they came from.
    ///
    /// # Arguments
    /// - `team_id`: ID of the owning team
    /// - `exclude_meeting_id`: Meeting to leave out of consideration, if any
    ///
    /// # Returns
    /// - `Ok(Some(meeting))`: The earliest upcoming scheduled meeting
    /// - `Ok(None)`: The team has no upcoming scheduled meeting
    /// - `Err(DbErr)`: Database error
    pub async fn get_upcoming(
        &self,
        team_id: i32,
        exclude_meeting_id: Option<i32>,
    ) -> Result<Option<entity::meeting::Model>, DbErr> {
        let now = Utc::now();

        let mut query = entity::prelude::Meeting::find()
            .filter(entity::meeting::Column::TeamId.eq(team_id))
            .filter(entity::meeting::Column::Status.eq(MeetingStatus::Scheduled))
            .filter(entity::meeting::Column::Date.gte(now));

        if let Some(exclude_id) = exclude_meeting_id {
            query = query.filter(entity::meeting::Column::Id.ne(exclude_id));
        }

        query
            .order_by_asc(entity::meeting::Column::Date)
            .one(self.db)
            .await
    }

    /// Updates a meeting, touching only the fields present in `params`.
    ///
    /// This is a pure field overwrite; it runs no chain or transition logic.
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated meeting
    /// - `Err(DbErr)`: Database error, including `RecordNotFound` when the
    ///   meeting does not exist
    pub async fn update(
        &self,
        params: UpdateMeetingParams,
    ) -> Result<entity::meeting::Model, DbErr> {
        let meeting = entity::prelude::Meeting::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Meeting {} not found",
                params.id
            )))?;

        let mut active_model: entity::meeting::ActiveModel = meeting.into();

        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(resume) = params.resume {
            active_model.resume = ActiveValue::Set(resume);
        }
        if let Some(date) = params.date {
            active_model.date = ActiveValue::Set(date);
        }
        if let Some(status) = params.status {
            active_model.status = ActiveValue::Set(status);
        }
        if let Some(previous_meeting_id) = params.previous_meeting_id {
            active_model.previous_meeting_id = ActiveValue::Set(previous_meeting_id);
        }
        if let Some(next_meeting_id) = params.next_meeting_id {
            active_model.next_meeting_id = ActiveValue::Set(next_meeting_id);
        }

        active_model.update(self.db).await
    }

    /// Deletes a meeting by ID. Agenda links cascade; neighbouring meetings'
    /// chain pointers are nulled by the schema.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Meeting::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
