use super::*;

/// Tests that update only touches the fields present in the params.
///
/// Expected: Ok with email set and the names untouched
#[tokio::test]
async fn updates_only_present_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let student = repo
        .create(CreateStudentParams {
            first_name: "Pavel".to_string(),
            last_name: "Petrov".to_string(),
            patronymic: None,
            email: None,
            tg_link: None,
        })
        .await?;

    let updated = repo
        .update(UpdateStudentParams {
            id: student.id,
            email: Some(Some("pavel@example.edu".to_string())),
            ..Default::default()
        })
        .await?;

    assert_eq!(updated.first_name, "Pavel");
    assert_eq!(updated.last_name, "Petrov");
    assert_eq!(updated.email.as_deref(), Some("pavel@example.edu"));

    Ok(())
}
