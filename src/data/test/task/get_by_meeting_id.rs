use super::*;

/// Tests listing the tasks on a meeting's agenda.
///
/// Expected: Ok with only the tasks linked to that meeting
#[tokio::test]
async fn lists_linked_tasks_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_meeting_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::team::create_team(db).await?;
    let meeting = factory::meeting::create_meeting(db, team.id).await?;
    let other_meeting = factory::meeting::create_meeting(db, team.id).await?;

    let linked = factory::task::create_task(db).await?;
    let elsewhere = factory::task::create_task(db).await?;

    let link_repo = MeetingTaskRepository::new(db);
    link_repo.create(meeting.id, linked.id).await?;
    link_repo.create(other_meeting.id, elsewhere.id).await?;

    let repo = TaskRepository::new(db);
    let tasks = repo.get_by_meeting_id(meeting.id).await?;

    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].id, linked.id);

    Ok(())
}

/// Tests an agenda with no tasks.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_for_bare_agenda() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_meeting_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_team, meeting) = factory::helpers::create_meeting_with_team(db).await?;

    let repo = TaskRepository::new(db);
    let tasks = repo.get_by_meeting_id(meeting.id).await?;

    assert!(tasks.is_empty());

    Ok(())
}
