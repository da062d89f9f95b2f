//! Domain models for tasks.

/// A unit of work tracked on one or more meetings' agendas.
///
/// Tasks are independent entities; the association to meetings lives in the
/// `meeting_task` link table, so the same task can appear on several agendas
/// (for example after carry-forward).
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: i32,
    pub description: String,
    pub is_completed: bool,
}

impl Task {
    pub fn from_entity(entity: entity::task::Model) -> Self {
        Self {
            id: entity.id,
            description: entity.description,
            is_completed: entity.is_completed,
        }
    }
}

/// Parameters for creating a new task.
#[derive(Debug, Clone)]
pub struct CreateTaskParams {
    pub description: String,
}

/// Parameters for updating an existing task.
///
/// All fields are optional - only provided fields will be updated.
#[derive(Debug, Clone, Default)]
pub struct UpdateTaskParams {
    pub id: i32,
    pub description: Option<String>,
    pub is_completed: Option<bool>,
}
