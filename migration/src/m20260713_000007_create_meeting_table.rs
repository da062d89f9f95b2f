use sea_orm_migration::{prelude::*, schema::*};

use super::m20260712_000001_create_team_table::Team;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Meeting::Table)
                    .if_not_exists()
                    .col(pk_auto(Meeting::Id))
                    .col(integer(Meeting::TeamId))
                    .col(string(Meeting::Name))
                    .col(text_null(Meeting::Resume))
                    .col(timestamp(Meeting::Date))
                    .col(string_len(Meeting::Status, 20))
                    .col(integer_null(Meeting::PreviousMeetingId))
                    .col(integer_null(Meeting::NextMeetingId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_meeting_team_id")
                            .from(Meeting::Table, Meeting::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_meeting_previous_meeting_id")
                            .from(Meeting::Table, Meeting::PreviousMeetingId)
                            .to(Meeting::Table, Meeting::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_meeting_next_meeting_id")
                            .from(Meeting::Table, Meeting::NextMeetingId)
                            .to(Meeting::Table, Meeting::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Meeting::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Meeting {
    Table,
    Id,
    TeamId,
    Name,
    Resume,
    Date,
    Status,
    PreviousMeetingId,
    NextMeetingId,
}
