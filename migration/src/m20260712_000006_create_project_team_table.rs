use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260712_000001_create_team_table::Team, m20260712_000004_create_project_table::Project,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProjectTeam::Table)
                    .if_not_exists()
                    .col(pk_auto(ProjectTeam::Id))
                    .col(integer(ProjectTeam::ProjectId))
                    .col(integer(ProjectTeam::TeamId))
                    .col(
                        timestamp(ProjectTeam::AssignedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(string_len(ProjectTeam::Status, 20))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_team_project_id")
                            .from(ProjectTeam::Table, ProjectTeam::ProjectId)
                            .to(Project::Table, Project::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_team_team_id")
                            .from(ProjectTeam::Table, ProjectTeam::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One row per (project, team) pair; semester exclusivity stays in the
        // service layer because it spans a join.
        manager
            .create_index(
                Index::create()
                    .name("uq_project_team_project_id_team_id")
                    .table(ProjectTeam::Table)
                    .col(ProjectTeam::ProjectId)
                    .col(ProjectTeam::TeamId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProjectTeam::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ProjectTeam {
    Table,
    Id,
    ProjectId,
    TeamId,
    AssignedAt,
    Status,
}
