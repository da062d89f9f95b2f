use sea_orm_migration::{prelude::*, schema::*};

use super::m20260712_000004_create_project_table::Project;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Milestone::Table)
                    .if_not_exists()
                    .col(pk_auto(Milestone::Id))
                    .col(integer(Milestone::ProjectId))
                    .col(timestamp(Milestone::Date))
                    .col(string(Milestone::Title))
                    .col(string_len(Milestone::MilestoneType, 20))
                    .col(text_null(Milestone::Description))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_milestone_project_id")
                            .from(Milestone::Table, Milestone::ProjectId)
                            .to(Project::Table, Project::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Milestone::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Milestone {
    Table,
    Id,
    ProjectId,
    Date,
    Title,
    MilestoneType,
    Description,
}
