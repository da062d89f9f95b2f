pub use sea_orm_migration::prelude::*;

mod m20260712_000001_create_team_table;
mod m20260712_000002_create_student_table;
mod m20260712_000003_create_team_member_table;
mod m20260712_000004_create_project_table;
mod m20260712_000005_create_milestone_table;
mod m20260712_000006_create_project_team_table;
mod m20260713_000007_create_meeting_table;
mod m20260713_000008_create_task_table;
mod m20260713_000009_create_meeting_task_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260712_000001_create_team_table::Migration),
            Box::new(m20260712_000002_create_student_table::Migration),
            Box::new(m20260712_000003_create_team_member_table::Migration),
            Box::new(m20260712_000004_create_project_table::Migration),
            Box::new(m20260712_000005_create_milestone_table::Migration),
            Box::new(m20260712_000006_create_project_team_table::Migration),
            Box::new(m20260713_000007_create_meeting_table::Migration),
            Box::new(m20260713_000008_create_task_table::Migration),
            Box::new(m20260713_000009_create_meeting_task_table::Migration),
        ]
    }
}
