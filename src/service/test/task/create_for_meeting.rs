use super::*;

/// Tests authoring a task for a meeting.
///
/// The task and its agenda link are created atomically; the new task starts
/// incomplete and shows up on the meeting's agenda.
///
/// Expected: Ok with the task linked and round-tripping
#[tokio::test]
async fn creates_task_and_link() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_meeting_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_team, meeting) = factory::helpers::create_meeting_with_team(db).await?;

    let service = TaskService::new(db);
    let task = service
        .create_for_meeting(
            meeting.id,
            CreateTaskParams {
                description: "Prepare the demo".to_string(),
            },
        )
        .await?;

    assert!(!task.is_completed);
    assert_eq!(task.description, "Prepare the demo");

    let fetched = service.get(task.id).await?;
    assert_eq!(fetched, task);

    let agenda = MeetingService::new(db).get_meeting_tasks(meeting.id).await?;
    assert_eq!(agenda.len(), 1);
    assert_eq!(agenda[0].id, task.id);

    Ok(())
}

/// Tests authoring a task for a meeting that does not exist.
///
/// Expected: Err(NotFound) and no task persisted
#[tokio::test]
async fn fails_for_missing_meeting() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_meeting_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = TaskService::new(db);
    let result = service
        .create_for_meeting(
            999999,
            CreateTaskParams {
                description: "Orphan".to_string(),
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
