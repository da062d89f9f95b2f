use super::*;

/// Tests cancelling a scheduled meeting.
///
/// Expected: Ok with status CANCELED and no task forwarding
#[tokio::test]
async fn cancels_scheduled_meeting() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_meeting_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::team::create_team(db).await?;
    let meeting = factory::meeting::create_meeting(db, team.id).await?;
    let next = factory::meeting::MeetingFactory::new(db, team.id)
        .date(Utc::now() + Duration::days(7))
        .build()
        .await?;

    let open_task = factory::task::create_task(db).await?;
    crate::data::meeting_task::MeetingTaskRepository::new(db)
        .create(meeting.id, open_task.id)
        .await?;

    let service = MeetingService::new(db);
    let canceled = service.cancel(meeting.id).await?;
    assert_eq!(canceled.status, MeetingStatus::Canceled);

    // Cancellation never forwards tasks.
    let next_agenda = service.get_meeting_tasks(next.id).await?;
    assert!(next_agenda.is_empty());

    Ok(())
}

/// Tests that terminal states reject cancellation.
///
/// Expected: Err(BadRequest) for a completed meeting and for a re-cancel
#[tokio::test]
async fn rejects_terminal_states() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_meeting_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::team::create_team(db).await?;

    let completed = factory::meeting::MeetingFactory::new(db, team.id)
        .status(MeetingStatus::Completed)
        .build()
        .await?;
    let service = MeetingService::new(db);
    let result = service.cancel(completed.id).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let meeting = factory::meeting::create_meeting(db, team.id).await?;
    service.cancel(meeting.id).await?;
    let result = service.cancel(meeting.id).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
