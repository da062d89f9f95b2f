use super::*;

/// Tests listing a team's assignments with and without a status filter.
///
/// Expected: Ok with all rows unfiltered and only matching rows filtered
#[tokio::test]
async fn filters_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::team::create_team(db).await?;
    let project_a = factory::project::create_project(db).await?;
    let project_b = factory::project::create_project(db).await?;

    let repo = ProjectTeamRepository::new(db);
    repo.create(project_a.id, team.id, ProjectTeamStatus::Withdrawn)
        .await?;
    let active = repo
        .create(project_b.id, team.id, ProjectTeamStatus::Active)
        .await?;

    let all = repo.get_by_team_id(team.id, None).await?;
    assert_eq!(all.len(), 2);

    let active_only = repo
        .get_by_team_id(team.id, Some(ProjectTeamStatus::Active))
        .await?;
    assert_eq!(active_only.len(), 1);
    assert_eq!(active_only[0].id, active.id);

    Ok(())
}
