use super::*;

/// Tests that update only touches the fields present in the params.
///
/// Expected: Ok with the resume set and everything else untouched
#[tokio::test]
async fn updates_only_present_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_meeting_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_team, meeting) = factory::helpers::create_meeting_with_team(db).await?;

    let repo = MeetingRepository::new(db);
    let updated = repo
        .update(UpdateMeetingParams {
            id: meeting.id,
            resume: Some(Some("Notes from the call".to_string())),
            ..Default::default()
        })
        .await?;

    assert_eq!(updated.resume.as_deref(), Some("Notes from the call"));
    assert_eq!(updated.name, meeting.name);
    assert_eq!(updated.date, meeting.date);
    assert_eq!(updated.status, meeting.status);

    Ok(())
}

/// Tests overwriting the chain pointers through the patch.
///
/// Expected: Ok with next_meeting_id set and cleared again
#[tokio::test]
async fn overwrites_chain_pointers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_meeting_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::team::create_team(db).await?;
    let first = factory::meeting::create_meeting(db, team.id).await?;
    let second = factory::meeting::create_meeting(db, team.id).await?;

    let repo = MeetingRepository::new(db);
    let updated = repo
        .update(UpdateMeetingParams {
            id: first.id,
            next_meeting_id: Some(Some(second.id)),
            ..Default::default()
        })
        .await?;
    assert_eq!(updated.next_meeting_id, Some(second.id));

    let cleared = repo
        .update(UpdateMeetingParams {
            id: first.id,
            next_meeting_id: Some(None),
            ..Default::default()
        })
        .await?;
    assert!(cleared.next_meeting_id.is_none());

    Ok(())
}

/// Tests updating a meeting that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_meeting() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_meeting_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MeetingRepository::new(db);
    let result = repo
        .update(UpdateMeetingParams {
            id: 999999,
            name: Some("Ghost".to_string()),
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
