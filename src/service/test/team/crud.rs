use super::*;

/// Tests the create -> get round trip.
///
/// Expected: Ok with identical field values on both sides
#[tokio::test]
async fn round_trips_created_team() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Team)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = TeamService::new(db);
    let created = service
        .create(CreateTeamParams {
            name: "Rustaceans".to_string(),
            group_link: Some("https://t.me/rustaceans".to_string()),
        })
        .await?;

    let fetched = service.get(created.id).await?;
    assert_eq!(fetched, created);

    Ok(())
}

/// Tests the typed patch through the service.
///
/// Expected: Ok with only the named field changed
#[tokio::test]
async fn patches_only_named_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Team)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::team::TeamFactory::new(db)
        .group_link(Some("https://t.me/before".to_string()))
        .build()
        .await?;

    let service = TeamService::new(db);
    let updated = service
        .update(UpdateTeamParams {
            id: team.id,
            name: Some("After".to_string()),
            group_link: None,
        })
        .await?;

    assert_eq!(updated.name, "After");
    assert_eq!(updated.group_link.as_deref(), Some("https://t.me/before"));

    Ok(())
}

/// Tests delete and the NotFound taxonomy.
///
/// Expected: Ok on delete, Err(NotFound) on the follow-up get
#[tokio::test]
async fn deletes_and_reports_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Team)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::team::create_team(db).await?;

    let service = TeamService::new(db);
    service.delete(team.id).await?;

    let result = service.get(team.id).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    let result = service.delete(team.id).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
