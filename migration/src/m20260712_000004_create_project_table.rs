use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Project::Table)
                    .if_not_exists()
                    .col(pk_auto(Project::Id))
                    .col(string(Project::Name))
                    .col(text_null(Project::Description))
                    .col(text_null(Project::Goal))
                    .col(text_null(Project::Requirements))
                    .col(text_null(Project::EvalCriteria))
                    .col(integer(Project::Year))
                    .col(string_len(Project::Semester, 10))
                    .col(string_len(Project::Status, 20))
                    .col(
                        timestamp(Project::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Project::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Project {
    Table,
    Id,
    Name,
    Description,
    Goal,
    Requirements,
    EvalCriteria,
    Year,
    Semester,
    Status,
    CreatedAt,
}
