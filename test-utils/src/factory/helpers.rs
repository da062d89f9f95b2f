//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a team together with one scheduled meeting.
///
/// Convenience for meeting tests that only need a valid owning team.
///
/// # Returns
/// - `Ok((team, meeting))` - Tuple of the created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_meeting_with_team(
    db: &DatabaseConnection,
) -> Result<(entity::team::Model, entity::meeting::Model), DbErr> {
    let team = crate::factory::team::create_team(db).await?;
    let meeting = crate::factory::meeting::create_meeting(db, team.id).await?;

    Ok((team, meeting))
}

/// Creates a project together with a team, unassigned.
///
/// Convenience for assignment-engine tests.
///
/// # Returns
/// - `Ok((project, team))` - Tuple of the created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_project_and_team(
    db: &DatabaseConnection,
) -> Result<(entity::project::Model, entity::team::Model), DbErr> {
    let project = crate::factory::project::create_project(db).await?;
    let team = crate::factory::team::create_team(db).await?;

    Ok((project, team))
}
