use sea_orm::DatabaseConnection;

use crate::{
    data::{milestone::MilestoneRepository, project::ProjectRepository},
    error::AppError,
    model::{
        milestone::{CreateMilestoneParams, Milestone, UpdateMilestoneParams},
        project::{CreateProjectParams, Project, UpdateProjectParams},
    },
};
use entity::sea_orm_active_enums::ProjectStatus;

/// Earliest year a project may be scheduled for.
const MIN_PROJECT_YEAR: i32 = 2000;

/// Project lifecycle and milestone management.
pub struct ProjectService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProjectService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new project.
    ///
    /// # Returns
    /// - `Ok(Project)`: The created project, status defaulting to PLANNED
    /// - `Err(AppError::BadRequest)`: Year before 2000
    pub async fn create(&self, params: CreateProjectParams) -> Result<Project, AppError> {
        if params.year < MIN_PROJECT_YEAR {
            return Err(AppError::BadRequest(format!(
                "Project year must be {} or later",
                MIN_PROJECT_YEAR
            )));
        }

        let project = ProjectRepository::new(self.db).create(params).await?;

        Ok(Project::from_entity(project))
    }

    /// Gets a project by ID.
    pub async fn get(&self, project_id: i32) -> Result<Project, AppError> {
        let project = ProjectRepository::new(self.db)
            .get_by_id(project_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Project {} not found", project_id)))?;

        Ok(Project::from_entity(project))
    }

    /// Gets all projects.
    pub async fn get_all(&self) -> Result<Vec<Project>, AppError> {
        let projects = ProjectRepository::new(self.db).get_all().await?;

        Ok(projects.into_iter().map(Project::from_entity).collect())
    }

    /// Updates a project, touching only the fields present in `params`.
    ///
    /// Setting `status` here bypasses the guarded transitions (administrative
    /// override).
    pub async fn update(&self, params: UpdateProjectParams) -> Result<Project, AppError> {
        if let Some(year) = params.year {
            if year < MIN_PROJECT_YEAR {
                return Err(AppError::BadRequest(format!(
                    "Project year must be {} or later",
                    MIN_PROJECT_YEAR
                )));
            }
        }

        let project_repo = ProjectRepository::new(self.db);
        project_repo
            .get_by_id(params.id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Project {} not found", params.id)))?;

        let updated = project_repo.update(params).await?;

        Ok(Project::from_entity(updated))
    }

    /// Deletes a project together with its milestones and assignment rows.
    pub async fn delete(&self, project_id: i32) -> Result<(), AppError> {
        let project_repo = ProjectRepository::new(self.db);
        project_repo
            .get_by_id(project_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Project {} not found", project_id)))?;

        project_repo.delete(project_id).await?;

        Ok(())
    }

    /// Starts a project: PLANNED -> IN_PROGRESS.
    ///
    /// # Returns
    /// - `Ok(Project)`: The started project
    /// - `Err(AppError::NotFound)`: Project missing
    /// - `Err(AppError::BadRequest)`: Status is not PLANNED
    pub async fn start(&self, project_id: i32) -> Result<Project, AppError> {
        self.transition(
            project_id,
            ProjectStatus::InProgress,
            |status| *status == ProjectStatus::Planned,
            "Project can only be started from PLANNED status",
        )
        .await
    }

    /// Completes a project: IN_PROGRESS -> COMPLETED.
    ///
    /// # Returns
    /// - `Ok(Project)`: The completed project
    /// - `Err(AppError::NotFound)`: Project missing
    /// - `Err(AppError::BadRequest)`: Status is not IN_PROGRESS
    pub async fn complete(&self, project_id: i32) -> Result<Project, AppError> {
        self.transition(
            project_id,
            ProjectStatus::Completed,
            |status| *status == ProjectStatus::InProgress,
            "Project can only be completed from IN_PROGRESS status",
        )
        .await
    }

    /// Archives a project. Reachable from any state except ARCHIVED itself.
    pub async fn archive(&self, project_id: i32) -> Result<Project, AppError> {
        self.transition(
            project_id,
            ProjectStatus::Archived,
            |status| *status != ProjectStatus::Archived,
            "Project is already archived",
        )
        .await
    }

    async fn transition(
        &self,
        project_id: i32,
        target: ProjectStatus,
        guard: impl Fn(&ProjectStatus) -> bool,
        reject_reason: &str,
    ) -> Result<Project, AppError> {
        let project_repo = ProjectRepository::new(self.db);
        let project = project_repo
            .get_by_id(project_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Project {} not found", project_id)))?;

        if !guard(&project.status) {
            return Err(AppError::BadRequest(reject_reason.to_string()));
        }

        let updated = project_repo
            .update(UpdateProjectParams {
                id: project_id,
                status: Some(target),
                ..Default::default()
            })
            .await?;

        tracing::info!(
            "Project {} moved from {:?} to {:?}",
            project_id,
            project.status,
            updated.status
        );

        Ok(Project::from_entity(updated))
    }

    /// Adds a milestone to a project.
    pub async fn add_milestone(&self, params: CreateMilestoneParams) -> Result<Milestone, AppError> {
        ProjectRepository::new(self.db)
            .get_by_id(params.project_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Project {} not found", params.project_id))
            })?;

        let milestone = MilestoneRepository::new(self.db).create(params).await?;

        Ok(Milestone::from_entity(milestone))
    }

    /// Gets the milestones of a project, earliest first.
    pub async fn get_milestones(&self, project_id: i32) -> Result<Vec<Milestone>, AppError> {
        ProjectRepository::new(self.db)
            .get_by_id(project_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Project {} not found", project_id)))?;

        let milestones = MilestoneRepository::new(self.db)
            .get_by_project_id(project_id)
            .await?;

        Ok(milestones.into_iter().map(Milestone::from_entity).collect())
    }

    /// Updates a milestone, touching only the fields present in `params`.
    pub async fn update_milestone(
        &self,
        params: UpdateMilestoneParams,
    ) -> Result<Milestone, AppError> {
        let milestone_repo = MilestoneRepository::new(self.db);
        milestone_repo
            .get_by_id(params.id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Milestone {} not found", params.id)))?;

        let updated = milestone_repo.update(params).await?;

        Ok(Milestone::from_entity(updated))
    }

    /// Deletes a milestone.
    pub async fn delete_milestone(&self, milestone_id: i32) -> Result<(), AppError> {
        let milestone_repo = MilestoneRepository::new(self.db);
        milestone_repo
            .get_by_id(milestone_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Milestone {} not found", milestone_id)))?;

        milestone_repo.delete(milestone_id).await?;

        Ok(())
    }
}
