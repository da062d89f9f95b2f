use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::model::team::AddTeamMemberParams;

pub struct TeamMemberRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamMemberRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a membership link between a team and a student.
    pub async fn create(
        &self,
        params: AddTeamMemberParams,
    ) -> Result<entity::team_member::Model, DbErr> {
        entity::team_member::ActiveModel {
            team_id: ActiveValue::Set(params.team_id),
            student_id: ActiveValue::Set(params.student_id),
            role: ActiveValue::Set(params.role),
            study_group: ActiveValue::Set(params.study_group),
        }
        .insert(self.db)
        .await
    }

    /// Finds the membership link for a specific (team, student) pair.
    pub async fn get_by_team_and_student(
        &self,
        team_id: i32,
        student_id: i32,
    ) -> Result<Option<entity::team_member::Model>, DbErr> {
        entity::prelude::TeamMember::find()
            .filter(entity::team_member::Column::TeamId.eq(team_id))
            .filter(entity::team_member::Column::StudentId.eq(student_id))
            .one(self.db)
            .await
    }

    /// Gets all memberships of a team.
    pub async fn get_by_team_id(
        &self,
        team_id: i32,
    ) -> Result<Vec<entity::team_member::Model>, DbErr> {
        entity::prelude::TeamMember::find()
            .filter(entity::team_member::Column::TeamId.eq(team_id))
            .order_by_asc(entity::team_member::Column::StudentId)
            .all(self.db)
            .await
    }

    /// Deletes the membership link for a (team, student) pair.
    ///
    /// # Returns
    /// - `Ok(true)`: The link existed and was removed
    /// - `Ok(false)`: No such link
    pub async fn delete_by_team_and_student(
        &self,
        team_id: i32,
        student_id: i32,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::TeamMember::delete_many()
            .filter(entity::team_member::Column::TeamId.eq(team_id))
            .filter(entity::team_member::Column::StudentId.eq(student_id))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
