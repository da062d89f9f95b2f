use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260713_000007_create_meeting_table::Meeting, m20260713_000008_create_task_table::Task,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MeetingTask::Table)
                    .if_not_exists()
                    .col(integer(MeetingTask::MeetingId))
                    .col(integer(MeetingTask::TaskId))
                    .primary_key(
                        Index::create()
                            .col(MeetingTask::MeetingId)
                            .col(MeetingTask::TaskId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_meeting_task_meeting_id")
                            .from(MeetingTask::Table, MeetingTask::MeetingId)
                            .to(Meeting::Table, Meeting::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_meeting_task_task_id")
                            .from(MeetingTask::Table, MeetingTask::TaskId)
                            .to(Task::Table, Task::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MeetingTask::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MeetingTask {
    Table,
    MeetingId,
    TaskId,
}
