use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260712_000001_create_team_table::Team, m20260712_000002_create_student_table::Student,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TeamMember::Table)
                    .if_not_exists()
                    .col(integer(TeamMember::TeamId))
                    .col(integer(TeamMember::StudentId))
                    .col(string_null(TeamMember::Role))
                    .col(string_null(TeamMember::StudyGroup))
                    .primary_key(
                        Index::create()
                            .col(TeamMember::TeamId)
                            .col(TeamMember::StudentId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_member_team_id")
                            .from(TeamMember::Table, TeamMember::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_member_student_id")
                            .from(TeamMember::Table, TeamMember::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TeamMember::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TeamMember {
    Table,
    TeamId,
    StudentId,
    Role,
    StudyGroup,
}
