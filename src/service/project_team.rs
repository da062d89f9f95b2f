use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{
        project::ProjectRepository, project_team::ProjectTeamRepository, team::TeamRepository,
    },
    error::AppError,
    model::project_team::{AssignTeamToProjectParams, ProjectTeam},
};
use entity::sea_orm_active_enums::ProjectTeamStatus;

/// The assignment engine: governs which teams work on which projects and
/// enforces one active engagement per team per semester.
pub struct ProjectTeamService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProjectTeamService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Assigns a team to a project.
    ///
    /// Preconditions, first failure wins:
    /// 1. the project exists,
    /// 2. the team exists,
    /// 3. no row for the (project, team) pair exists, whatever its status -
    ///    a WITHDRAWN history row still blocks re-assignment,
    /// 4. the team holds no other ACTIVE assignment in the project's
    ///    (year, semester).
    ///
    /// The check-then-insert sequence runs in one transaction; the unique
    /// pair index backs check 3 at the schema level.
    ///
    /// # Returns
    /// - `Ok(ProjectTeam)`: The created assignment
    /// - `Err(AppError::NotFound)`: Project or team missing
    /// - `Err(AppError::BadRequest)`: Duplicate pair or semester conflict
    pub async fn assign(&self, params: AssignTeamToProjectParams) -> Result<ProjectTeam, AppError> {
        let txn = self.db.begin().await?;

        let project = ProjectRepository::new(&txn)
            .get_by_id(params.project_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Project {} not found", params.project_id))
            })?;

        TeamRepository::new(&txn)
            .get_by_id(params.team_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Team {} not found", params.team_id)))?;

        let link_repo = ProjectTeamRepository::new(&txn);

        if link_repo
            .get_by_project_and_team(params.project_id, params.team_id)
            .await?
            .is_some()
        {
            return Err(AppError::BadRequest(
                "Team is already assigned to this project".to_string(),
            ));
        }

        if let Some(active) = link_repo
            .get_active_for_team_in_semester(params.team_id, project.year, project.semester.clone())
            .await?
        {
            return Err(AppError::BadRequest(format!(
                "Team is already in active project {} this semester",
                active.project_id
            )));
        }

        let link = link_repo
            .create(
                params.project_id,
                params.team_id,
                params.status.unwrap_or(ProjectTeamStatus::Active),
            )
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Assigned team {} to project {} ({:?})",
            link.team_id,
            link.project_id,
            link.status
        );

        Ok(ProjectTeam::from_entity(link))
    }

    /// Gets all assignments of a project, optionally filtered by status.
    ///
    /// Withdrawn rows are included (unless filtered out), which is how
    /// participation history stays visible.
    pub async fn get_project_teams(
        &self,
        project_id: i32,
        status: Option<ProjectTeamStatus>,
    ) -> Result<Vec<ProjectTeam>, AppError> {
        ProjectRepository::new(self.db)
            .get_by_id(project_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Project {} not found", project_id)))?;

        let links = ProjectTeamRepository::new(self.db)
            .get_by_project_id(project_id, status)
            .await?;

        Ok(links.into_iter().map(ProjectTeam::from_entity).collect())
    }

    /// Gets all assignments of a team, optionally filtered by status.
    pub async fn get_team_projects(
        &self,
        team_id: i32,
        status: Option<ProjectTeamStatus>,
    ) -> Result<Vec<ProjectTeam>, AppError> {
        TeamRepository::new(self.db)
            .get_by_id(team_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Team {} not found", team_id)))?;

        let links = ProjectTeamRepository::new(self.db)
            .get_by_team_id(team_id, status)
            .await?;

        Ok(links.into_iter().map(ProjectTeam::from_entity).collect())
    }

    /// Gets the team's current ACTIVE assignment, if any.
    ///
    /// Business rules imply at most one; the query defensively takes the
    /// first match rather than assuming the invariant holds.
    pub async fn get_current_project(&self, team_id: i32) -> Result<Option<ProjectTeam>, AppError> {
        TeamRepository::new(self.db)
            .get_by_id(team_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Team {} not found", team_id)))?;

        let links = ProjectTeamRepository::new(self.db)
            .get_by_team_id(team_id, Some(ProjectTeamStatus::Active))
            .await?;

        Ok(links.into_iter().next().map(ProjectTeam::from_entity))
    }

    /// Overwrites the status of an assignment.
    ///
    /// Re-activation re-runs the semester-exclusivity check, excluding the
    /// link being updated so a team re-activating its own assignment does not
    /// conflict with itself.
    ///
    /// # Returns
    /// - `Ok(ProjectTeam)`: The updated assignment
    /// - `Err(AppError::NotFound)`: No link for the pair
    /// - `Err(AppError::BadRequest)`: Activation would break semester
    ///   exclusivity
    pub async fn update_status(
        &self,
        project_id: i32,
        team_id: i32,
        new_status: ProjectTeamStatus,
    ) -> Result<ProjectTeam, AppError> {
        let txn = self.db.begin().await?;

        let link_repo = ProjectTeamRepository::new(&txn);
        let link = link_repo
            .get_by_project_and_team(project_id, team_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound("Link between project and team not found".to_string())
            })?;

        if new_status == ProjectTeamStatus::Active {
            let project = ProjectRepository::new(&txn)
                .get_by_id(project_id)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Project {} not found", project_id)))?;

            if let Some(other) = link_repo
                .get_active_for_team_in_semester(team_id, project.year, project.semester.clone())
                .await?
            {
                if other.id != link.id {
                    return Err(AppError::BadRequest(format!(
                        "Team is already in active project {} this semester",
                        other.project_id
                    )));
                }
            }
        }

        let updated = link_repo.update_status(link.id, new_status).await?;

        txn.commit().await?;

        Ok(ProjectTeam::from_entity(updated))
    }

    /// Withdraws a team from a project.
    ///
    /// Soft delete: the row stays with status WITHDRAWN so the engagement
    /// remains visible for reporting.
    ///
    /// # Returns
    /// - `Ok(ProjectTeam)`: The withdrawn assignment
    /// - `Err(AppError::NotFound)`: No link for the pair
    pub async fn withdraw(&self, project_id: i32, team_id: i32) -> Result<ProjectTeam, AppError> {
        let link_repo = ProjectTeamRepository::new(self.db);
        let link = link_repo
            .get_by_project_and_team(project_id, team_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound("Link between project and team not found".to_string())
            })?;

        let withdrawn = link_repo
            .update_status(link.id, ProjectTeamStatus::Withdrawn)
            .await?;

        tracing::info!("Withdrew team {} from project {}", team_id, project_id);

        Ok(ProjectTeam::from_entity(withdrawn))
    }
}
