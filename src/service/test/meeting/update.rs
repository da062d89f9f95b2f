use super::*;

/// Tests the administrative status override through partial update.
///
/// The patch path overwrites status directly, bypassing the transition
/// guards; no forwarding runs.
///
/// Expected: Ok with the status forced and the next agenda untouched
#[tokio::test]
async fn overrides_status_without_forwarding() -> Result<(), AppError> {
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
    let updated = service
        .update(UpdateMeetingParams {
            id: meeting.id,
            status: Some(MeetingStatus::Completed),
            ..Default::default()
        })
        .await?;
    assert_eq!(updated.status, MeetingStatus::Completed);

    let next_agenda = service.get_meeting_tasks(next.id).await?;
    assert!(next_agenda.is_empty());

    Ok(())
}

/// Tests updating a meeting that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_missing_meeting() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_meeting_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = MeetingService::new(db);
    let result = service
        .update(UpdateMeetingParams {
            id: 999999,
            name: Some("Ghost".to_string()),
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
