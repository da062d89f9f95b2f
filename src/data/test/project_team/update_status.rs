use super::*;

/// Tests overwriting the status of an assignment row.
///
/// Expected: Ok with the status changed and everything else untouched
#[tokio::test]
async fn overwrites_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (project, team) = factory::helpers::create_project_and_team(db).await?;

    let repo = ProjectTeamRepository::new(db);
    let link = repo
        .create(project.id, team.id, ProjectTeamStatus::Active)
        .await?;

    let updated = repo
        .update_status(link.id, ProjectTeamStatus::Completed)
        .await?;

    assert_eq!(updated.status, ProjectTeamStatus::Completed);
    assert_eq!(updated.project_id, link.project_id);
    assert_eq!(updated.team_id, link.team_id);
    assert_eq!(updated.assigned_at, link.assigned_at);

    Ok(())
}

/// Tests updating a row that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_link() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProjectTeamRepository::new(db);
    let result = repo.update_status(999999, ProjectTeamStatus::Active).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
