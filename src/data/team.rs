use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder,
};

use crate::model::team::{CreateTeamParams, UpdateTeamParams};

pub struct TeamRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new team.
    ///
    /// # Returns
    /// - `Ok(Model)`: The created team
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, params: CreateTeamParams) -> Result<entity::team::Model, DbErr> {
        entity::team::ActiveModel {
            name: ActiveValue::Set(params.name),
            group_link: ActiveValue::Set(params.group_link),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a team by ID.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::team::Model>, DbErr> {
        entity::prelude::Team::find_by_id(id).one(self.db).await
    }

    /// Gets all teams ordered by name.
    pub async fn get_all(&self) -> Result<Vec<entity::team::Model>, DbErr> {
        entity::prelude::Team::find()
            .order_by_asc(entity::team::Column::Name)
            .all(self.db)
            .await
    }

    /// Updates a team, touching only the fields present in `params`.
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated team
    /// - `Err(DbErr)`: Database error, including `RecordNotFound` when the
    ///   team does not exist
    pub async fn update(&self, params: UpdateTeamParams) -> Result<entity::team::Model, DbErr> {
        let team = entity::prelude::Team::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Team {} not found",
                params.id
            )))?;

        let mut active_model: entity::team::ActiveModel = team.into();

        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(group_link) = params.group_link {
            active_model.group_link = ActiveValue::Set(group_link);
        }

        active_model.update(self.db).await
    }

    /// Deletes a team by ID. Memberships, meetings, and project links cascade
    /// with it.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Team::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
