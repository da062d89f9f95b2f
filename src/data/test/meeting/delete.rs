use super::*;

/// Tests that deleting a meeting cascades to its agenda links but leaves the
/// tasks themselves in place.
///
/// Expected: Ok with the link gone and the task still present
#[tokio::test]
async fn cascades_to_links_but_not_tasks() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_meeting_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_team, meeting) = factory::helpers::create_meeting_with_team(db).await?;
    let task = factory::task::create_task(db).await?;

    crate::data::meeting_task::MeetingTaskRepository::new(db)
        .create(meeting.id, task.id)
        .await?;

    let repo = MeetingRepository::new(db);
    repo.delete(meeting.id).await?;

    assert!(repo.get_by_id(meeting.id).await?.is_none());

    let links = entity::prelude::MeetingTask::find().all(db).await?;
    assert!(links.is_empty());

    let surviving_task = entity::prelude::Task::find_by_id(task.id).one(db).await?;
    assert!(surviving_task.is_some());

    Ok(())
}
