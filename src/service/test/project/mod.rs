use crate::{
    error::AppError,
    model::{
        milestone::CreateMilestoneParams,
        project::{CreateProjectParams, UpdateProjectParams},
    },
    service::project::ProjectService,
};
use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::{MilestoneType, ProjectStatus, Semester};
use test_utils::{builder::TestBuilder, factory};

mod transitions;
