//! SeaORM entity models for the projectboard database schema.

pub mod prelude;

pub mod meeting;
pub mod meeting_task;
pub mod milestone;
pub mod project;
pub mod project_team;
pub mod sea_orm_active_enums;
pub mod student;
pub mod task;
pub mod team;
pub mod team_member;
