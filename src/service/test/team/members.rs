use super::*;

/// Tests adding a member and the duplicate guard.
///
/// Expected: Ok on the first add, Err(BadRequest) on the second
#[tokio::test]
async fn adds_member_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_member_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::team::create_team(db).await?;
    let student = factory::student::create_student(db).await?;

    let service = TeamService::new(db);
    let member = service
        .add_member(AddTeamMemberParams {
            team_id: team.id,
            student_id: student.id,
            role: Some("lead".to_string()),
            study_group: None,
        })
        .await?;
    assert_eq!(member.role.as_deref(), Some("lead"));

    let result = service
        .add_member(AddTeamMemberParams {
            team_id: team.id,
            student_id: student.id,
            role: None,
            study_group: None,
        })
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let members = service.get_members(team.id).await?;
    assert_eq!(members.len(), 1);

    Ok(())
}

/// Tests the existence preconditions for membership.
///
/// Expected: Err(NotFound) for a missing team and for a missing student
#[tokio::test]
async fn fails_for_missing_team_or_student() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_member_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::team::create_team(db).await?;
    let student = factory::student::create_student(db).await?;

    let service = TeamService::new(db);
    let result = service
        .add_member(AddTeamMemberParams {
            team_id: 999999,
            student_id: student.id,
            role: None,
            study_group: None,
        })
        .await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    let result = service
        .add_member(AddTeamMemberParams {
            team_id: team.id,
            student_id: 999999,
            role: None,
            study_group: None,
        })
        .await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests removing a member.
///
/// Expected: Ok on removal, Err(NotFound) when removing again
#[tokio::test]
async fn removes_member() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_member_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::team::create_team(db).await?;
    let student = factory::student::create_student(db).await?;

    let service = TeamService::new(db);
    service
        .add_member(AddTeamMemberParams {
            team_id: team.id,
            student_id: student.id,
            role: None,
            study_group: None,
        })
        .await?;

    service.remove_member(team.id, student.id).await?;
    assert!(service.get_members(team.id).await?.is_empty());

    let result = service.remove_member(team.id, student.id).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
