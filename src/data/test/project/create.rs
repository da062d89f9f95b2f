use super::*;

/// Tests creating a project with an explicit status.
///
/// Expected: Ok with all fields persisted and round-trip equality
#[tokio::test]
async fn creates_project_and_round_trips() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Project)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProjectRepository::new(db);
    let project = repo
        .create(CreateProjectParams {
            name: "Campus Navigator".to_string(),
            description: Some("Indoor navigation app".to_string()),
            goal: Some("Ship an MVP".to_string()),
            requirements: Some("Mobile team of 3+".to_string()),
            eval_criteria: Some("Working demo".to_string()),
            year: 2026,
            semester: Semester::Spring,
            status: Some(ProjectStatus::InProgress),
        })
        .await?;

    assert_eq!(project.status, ProjectStatus::InProgress);
    assert_eq!(project.semester, Semester::Spring);

    let fetched = repo.get_by_id(project.id).await?.unwrap();
    assert_eq!(fetched, project);

    Ok(())
}

/// Tests that a project without an explicit status starts out PLANNED.
///
/// Expected: Ok with status defaulted to Planned
#[tokio::test]
async fn defaults_status_to_planned() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Project)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProjectRepository::new(db);
    let project = repo
        .create(CreateProjectParams {
            name: "Library Bot".to_string(),
            description: None,
            goal: None,
            requirements: None,
            eval_criteria: None,
            year: 2026,
            semester: Semester::Autumn,
            status: None,
        })
        .await?;

    assert_eq!(project.status, ProjectStatus::Planned);

    Ok(())
}
