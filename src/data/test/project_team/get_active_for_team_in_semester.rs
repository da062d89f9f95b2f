use super::*;

/// Tests the semester-exclusivity lookup.
///
/// Verifies that an ACTIVE assignment is found through the join on the
/// project's (year, semester) scope.
///
/// Expected: Ok(Some) for the matching scope
#[tokio::test]
async fn finds_active_link_in_scope() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let project = factory::project::ProjectFactory::new(db)
        .year(2026)
        .semester(Semester::Spring)
        .build()
        .await?;
    let team = factory::team::create_team(db).await?;

    let repo = ProjectTeamRepository::new(db);
    let link = repo
        .create(project.id, team.id, ProjectTeamStatus::Active)
        .await?;

    let found = repo
        .get_active_for_team_in_semester(team.id, 2026, Semester::Spring)
        .await?;

    assert_eq!(found.map(|l| l.id), Some(link.id));

    Ok(())
}

/// Tests that non-ACTIVE rows and other scopes do not match.
///
/// Expected: Ok(None) for a withdrawn link and for a different year
#[tokio::test]
async fn ignores_withdrawn_links_and_other_scopes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let project = factory::project::ProjectFactory::new(db)
        .year(2026)
        .semester(Semester::Spring)
        .build()
        .await?;
    let team = factory::team::create_team(db).await?;

    let repo = ProjectTeamRepository::new(db);
    repo.create(project.id, team.id, ProjectTeamStatus::Withdrawn)
        .await?;

    assert!(repo
        .get_active_for_team_in_semester(team.id, 2026, Semester::Spring)
        .await?
        .is_none());

    // A withdrawn link matches no scope at all.
    assert!(repo
        .get_active_for_team_in_semester(team.id, 2025, Semester::Spring)
        .await?
        .is_none());

    Ok(())
}
