use crate::{
    error::AppError,
    model::task::CreateTaskParams,
    service::{meeting::MeetingService, task::TaskService},
};
use test_utils::{builder::TestBuilder, factory};

mod create_for_meeting;
mod incomplete_for_team;
