use crate::{
    data::project::ProjectRepository,
    model::project::{CreateProjectParams, UpdateProjectParams},
};
use entity::sea_orm_active_enums::{ProjectStatus, Semester};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod create;
