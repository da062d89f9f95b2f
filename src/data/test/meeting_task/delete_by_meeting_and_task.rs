use super::*;

/// Tests removing an existing agenda link.
///
/// Expected: Ok(true) with the link gone afterwards
#[tokio::test]
async fn deletes_existing_link() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_meeting_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_team, meeting) = factory::helpers::create_meeting_with_team(db).await?;
    let task = factory::task::create_task(db).await?;

    let repo = MeetingTaskRepository::new(db);
    repo.create(meeting.id, task.id).await?;

    let deleted = repo.delete_by_meeting_and_task(meeting.id, task.id).await?;
    assert!(deleted);
    assert!(repo
        .get_by_meeting_and_task(meeting.id, task.id)
        .await?
        .is_none());

    Ok(())
}

/// Tests removing a link that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_link() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_meeting_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_team, meeting) = factory::helpers::create_meeting_with_team(db).await?;
    let task = factory::task::create_task(db).await?;

    let repo = MeetingTaskRepository::new(db);
    let deleted = repo.delete_by_meeting_and_task(meeting.id, task.id).await?;

    assert!(!deleted);

    Ok(())
}
