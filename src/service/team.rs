use sea_orm::DatabaseConnection;

use crate::{
    data::{
        student::StudentRepository, team::TeamRepository, team_member::TeamMemberRepository,
    },
    error::AppError,
    model::team::{AddTeamMemberParams, CreateTeamParams, Team, TeamMember, UpdateTeamParams},
};

/// Team lifecycle and membership management.
pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new team.
    pub async fn create(&self, params: CreateTeamParams) -> Result<Team, AppError> {
        let team = TeamRepository::new(self.db).create(params).await?;

        Ok(Team::from_entity(team))
    }

    /// Gets a team by ID.
    pub async fn get(&self, team_id: i32) -> Result<Team, AppError> {
        let team = TeamRepository::new(self.db)
            .get_by_id(team_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Team {} not found", team_id)))?;

        Ok(Team::from_entity(team))
    }

    /// Gets all teams.
    pub async fn get_all(&self) -> Result<Vec<Team>, AppError> {
        let teams = TeamRepository::new(self.db).get_all().await?;

        Ok(teams.into_iter().map(Team::from_entity).collect())
    }

    /// Updates a team, touching only the fields present in `params`.
    pub async fn update(&self, params: UpdateTeamParams) -> Result<Team, AppError> {
        let team_repo = TeamRepository::new(self.db);
        team_repo
            .get_by_id(params.id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Team {} not found", params.id)))?;

        let updated = team_repo.update(params).await?;

        Ok(Team::from_entity(updated))
    }

    /// Deletes a team. Memberships, meetings, and project links cascade with
    /// it.
    pub async fn delete(&self, team_id: i32) -> Result<(), AppError> {
        let team_repo = TeamRepository::new(self.db);
        team_repo
            .get_by_id(team_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Team {} not found", team_id)))?;

        team_repo.delete(team_id).await?;

        Ok(())
    }

    /// Adds a student to a team.
    ///
    /// # Returns
    /// - `Ok(TeamMember)`: The created membership
    /// - `Err(AppError::NotFound)`: Team or student missing
    /// - `Err(AppError::BadRequest)`: The student is already a member
    pub async fn add_member(&self, params: AddTeamMemberParams) -> Result<TeamMember, AppError> {
        TeamRepository::new(self.db)
            .get_by_id(params.team_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Team {} not found", params.team_id)))?;

        StudentRepository::new(self.db)
            .get_by_id(params.student_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Student {} not found", params.student_id))
            })?;

        let member_repo = TeamMemberRepository::new(self.db);
        if member_repo
            .get_by_team_and_student(params.team_id, params.student_id)
            .await?
            .is_some()
        {
            return Err(AppError::BadRequest(
                "Student is already a member of this team".to_string(),
            ));
        }

        let member = member_repo.create(params).await?;

        Ok(TeamMember::from_entity(member))
    }

    /// Removes a student from a team.
    ///
    /// # Returns
    /// - `Ok(())`: Membership removed
    /// - `Err(AppError::NotFound)`: No such membership
    pub async fn remove_member(&self, team_id: i32, student_id: i32) -> Result<(), AppError> {
        let deleted = TeamMemberRepository::new(self.db)
            .delete_by_team_and_student(team_id, student_id)
            .await?;

        if !deleted {
            return Err(AppError::NotFound(
                "Student is not a member of this team".to_string(),
            ));
        }

        Ok(())
    }

    /// Gets the memberships of a team.
    pub async fn get_members(&self, team_id: i32) -> Result<Vec<TeamMember>, AppError> {
        TeamRepository::new(self.db)
            .get_by_id(team_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Team {} not found", team_id)))?;

        let members = TeamMemberRepository::new(self.db)
            .get_by_team_id(team_id)
            .await?;

        Ok(members.into_iter().map(TeamMember::from_entity).collect())
    }
}
