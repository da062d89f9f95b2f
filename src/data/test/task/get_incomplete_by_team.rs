use super::*;

/// Tests the deduplicated incomplete-task listing for a team.
///
/// A task linked to two meetings of the same team (the carry-forward shape)
/// must appear exactly once; completed tasks and other teams' tasks must not
/// appear at all.
///
/// Expected: Ok with each incomplete task exactly once
#[tokio::test]
async fn deduplicates_and_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_meeting_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::team::create_team(db).await?;
    let other_team = factory::team::create_team(db).await?;

    let first = factory::meeting::create_meeting(db, team.id).await?;
    let second = factory::meeting::create_meeting(db, team.id).await?;
    let foreign = factory::meeting::create_meeting(db, other_team.id).await?;

    // Forwarded across two meetings of the same team.
    let carried = factory::task::create_task(db).await?;
    // Done, so it must not show up.
    let done = factory::task::TaskFactory::new(db).completed(true).build().await?;
    // Belongs to the other team.
    let foreign_task = factory::task::create_task(db).await?;

    let link_repo = MeetingTaskRepository::new(db);
    link_repo.create(first.id, carried.id).await?;
    link_repo.create(second.id, carried.id).await?;
    link_repo.create(first.id, done.id).await?;
    link_repo.create(foreign.id, foreign_task.id).await?;

    let repo = TaskRepository::new(db);
    let tasks = repo.get_incomplete_by_team(team.id).await?;

    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].id, carried.id);

    Ok(())
}
