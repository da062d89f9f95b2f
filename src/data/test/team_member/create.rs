use super::*;

/// Tests creating a membership link.
///
/// Expected: Ok with the link retrievable by pair
#[tokio::test]
async fn creates_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_member_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::team::create_team(db).await?;
    let student = factory::student::create_student(db).await?;

    let repo = TeamMemberRepository::new(db);
    let member = repo
        .create(AddTeamMemberParams {
            team_id: team.id,
            student_id: student.id,
            role: Some("lead".to_string()),
            study_group: Some("CS-301".to_string()),
        })
        .await?;

    assert_eq!(member.team_id, team.id);
    assert_eq!(member.student_id, student.id);

    let fetched = repo
        .get_by_team_and_student(team.id, student.id)
        .await?
        .unwrap();
    assert_eq!(fetched.role.as_deref(), Some("lead"));

    Ok(())
}

/// Tests the composite primary key on the membership pair.
///
/// Expected: Err on the second insert of the same (team, student) pair
#[tokio::test]
async fn rejects_duplicate_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_member_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::team::create_team(db).await?;
    let student = factory::student::create_student(db).await?;

    let repo = TeamMemberRepository::new(db);
    repo.create(AddTeamMemberParams {
        team_id: team.id,
        student_id: student.id,
        role: None,
        study_group: None,
    })
    .await?;

    let result = repo
        .create(AddTeamMemberParams {
            team_id: team.id,
            student_id: student.id,
            role: None,
            study_group: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
