use super::*;

/// Tests the team-wide incomplete listing after a carry-forward.
///
/// A task forwarded across two meetings must be reported once; completing it
/// removes it from the listing.
///
/// Expected: Ok with one entry before completion and none after
#[tokio::test]
async fn deduplicates_forwarded_tasks() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_meeting_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::team::create_team(db).await?;
    let first = factory::meeting::create_meeting(db, team.id).await?;
    let second = factory::meeting::create_meeting(db, team.id).await?;

    let service = TaskService::new(db);
    let task = service
        .create_for_meeting(
            first.id,
            crate::model::task::CreateTaskParams {
                description: "Carryover".to_string(),
            },
        )
        .await?;
    service.add_to_meeting(second.id, task.id).await?;

    let incomplete = service.get_team_incomplete(team.id).await?;
    assert_eq!(incomplete.len(), 1);
    assert_eq!(incomplete[0].id, task.id);

    service.complete(task.id).await?;
    let incomplete = service.get_team_incomplete(team.id).await?;
    assert!(incomplete.is_empty());

    Ok(())
}
