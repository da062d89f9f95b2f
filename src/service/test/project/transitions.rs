use super::*;

/// Tests the linear PLANNED -> IN_PROGRESS -> COMPLETED flow.
///
/// Expected: Ok on each step with the status advanced
#[tokio::test]
async fn walks_the_linear_flow() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Project)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let project = factory::project::create_project(db).await?;

    let service = ProjectService::new(db);
    let started = service.start(project.id).await?;
    assert_eq!(started.status, ProjectStatus::InProgress);

    let completed = service.complete(project.id).await?;
    assert_eq!(completed.status, ProjectStatus::Completed);

    Ok(())
}

/// Tests the transition guards.
///
/// start() requires PLANNED and complete() requires IN_PROGRESS; anything
/// else is rejected.
///
/// Expected: Err(BadRequest) for each guarded violation
#[tokio::test]
async fn guards_reject_wrong_source_states() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Project)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ProjectService::new(db);

    // complete() straight from PLANNED.
    let planned = factory::project::create_project(db).await?;
    let result = service.complete(planned.id).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    // start() twice.
    service.start(planned.id).await?;
    let result = service.start(planned.id).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests archiving from any state and the already-archived rejection.
///
/// Expected: Ok from COMPLETED and from PLANNED, Err(BadRequest) when
/// archived twice
#[tokio::test]
async fn archives_from_any_state_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Project)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ProjectService::new(db);

    let fresh = factory::project::create_project(db).await?;
    let archived = service.archive(fresh.id).await?;
    assert_eq!(archived.status, ProjectStatus::Archived);

    let result = service.archive(fresh.id).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let finished = factory::project::ProjectFactory::new(db)
        .status(ProjectStatus::Completed)
        .build()
        .await?;
    let archived = service.archive(finished.id).await?;
    assert_eq!(archived.status, ProjectStatus::Archived);

    Ok(())
}

/// Tests transitions on a project that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_missing_project() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Project)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ProjectService::new(db);
    let result = service.start(999999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
