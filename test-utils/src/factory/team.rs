//! Team factory for creating test team entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test teams with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::team::TeamFactory;
///
/// let team = TeamFactory::new(&db)
///     .name("Custom Team")
///     .group_link(Some("https://t.me/custom".to_string()))
///     .build()
///     .await?;
/// ```
pub struct TeamFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    group_link: Option<String>,
}

impl<'a> TeamFactory<'a> {
    /// Creates a new TeamFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Team {id}"` where id is auto-incremented
    /// - group_link: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Team {}", id),
            group_link: None,
        }
    }

    /// Sets the team name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the group link.
    pub fn group_link(mut self, group_link: Option<String>) -> Self {
        self.group_link = group_link;
        self
    }

    /// Builds and inserts the team entity into the database.
    pub async fn build(self) -> Result<entity::team::Model, DbErr> {
        entity::team::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            group_link: ActiveValue::Set(self.group_link),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a team with default values.
///
/// Shorthand for `TeamFactory::new(db).build().await`.
pub async fn create_team(db: &DatabaseConnection) -> Result<entity::team::Model, DbErr> {
    TeamFactory::new(db).build().await
}
