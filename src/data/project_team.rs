use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use entity::sea_orm_active_enums::{ProjectTeamStatus, Semester};

pub struct ProjectTeamRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProjectTeamRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an assignment row for a (project, team) pair.
    ///
    /// # Arguments
    /// - `project_id`: ID of the project
    /// - `team_id`: ID of the team
    /// - `status`: Initial engagement status
    ///
    /// # Returns
    /// - `Ok(Model)`: The created assignment with `assigned_at` set to now
    /// - `Err(DbErr)`: Database error, including the unique-index violation
    ///   when a row for the pair already exists
    pub async fn create(
        &self,
        project_id: i32,
        team_id: i32,
        status: ProjectTeamStatus,
    ) -> Result<entity::project_team::Model, DbErr> {
        entity::project_team::ActiveModel {
            project_id: ActiveValue::Set(project_id),
            team_id: ActiveValue::Set(team_id),
            assigned_at: ActiveValue::Set(Utc::now()),
            status: ActiveValue::Set(status),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds the assignment row for a specific (project, team) pair, whatever
    /// its status.
    pub async fn get_by_project_and_team(
        &self,
        project_id: i32,
        team_id: i32,
    ) -> Result<Option<entity::project_team::Model>, DbErr> {
        entity::prelude::ProjectTeam::find()
            .filter(entity::project_team::Column::ProjectId.eq(project_id))
            .filter(entity::project_team::Column::TeamId.eq(team_id))
            .one(self.db)
            .await
    }

    /// Gets all assignment rows of a project, optionally filtered by status.
    pub async fn get_by_project_id(
        &self,
        project_id: i32,
        status: Option<ProjectTeamStatus>,
    ) -> Result<Vec<entity::project_team::Model>, DbErr> {
        let mut query = entity::prelude::ProjectTeam::find()
            .filter(entity::project_team::Column::ProjectId.eq(project_id));

        if let Some(status) = status {
            query = query.filter(entity::project_team::Column::Status.eq(status));
        }

        query
            .order_by_asc(entity::project_team::Column::AssignedAt)
            .all(self.db)
            .await
    }

    /// Gets all assignment rows of a team, optionally filtered by status.
    pub async fn get_by_team_id(
        &self,
        team_id: i32,
        status: Option<ProjectTeamStatus>,
    ) -> Result<Vec<entity::project_team::Model>, DbErr> {
        let mut query = entity::prelude::ProjectTeam::find()
            .filter(entity::project_team::Column::TeamId.eq(team_id));

        if let Some(status) = status {
            query = query.filter(entity::project_team::Column::Status.eq(status));
        }

        query
            .order_by_asc(entity::project_team::Column::AssignedAt)
            .all(self.db)
            .await
    }

    /// Finds the team's ACTIVE assignment within a (year, semester) scope, if
    /// any.
    ///
    /// Joins onto the project table because year and semester live there; this
    /// is the query behind the semester-exclusivity rule.
    pub async fn get_active_for_team_in_semester(
        &self,
        team_id: i32,
        year: i32,
        semester: Semester,
    ) -> Result<Option<entity::project_team::Model>, DbErr> {
        entity::prelude::ProjectTeam::find()
            .join(
                JoinType::InnerJoin,
                entity::project_team::Relation::Project.def(),
            )
            .filter(entity::project_team::Column::TeamId.eq(team_id))
            .filter(entity::project_team::Column::Status.eq(ProjectTeamStatus::Active))
            .filter(entity::project::Column::Year.eq(year))
            .filter(entity::project::Column::Semester.eq(semester))
            .one(self.db)
            .await
    }

    /// Overwrites the status of an assignment row.
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated assignment
    /// - `Err(DbErr)`: Database error, including `RecordNotFound` when the
    ///   row does not exist
    pub async fn update_status(
        &self,
        id: i32,
        status: ProjectTeamStatus,
    ) -> Result<entity::project_team::Model, DbErr> {
        let link = entity::prelude::ProjectTeam::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Project-team link {} not found",
                id
            )))?;

        let mut active_model: entity::project_team::ActiveModel = link.into();
        active_model.status = ActiveValue::Set(status);

        active_model.update(self.db).await
    }
}
