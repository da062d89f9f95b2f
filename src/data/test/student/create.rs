use super::*;

/// Tests creating a student and reading it back.
///
/// Expected: Ok with round-trip equality on every field
#[tokio::test]
async fn creates_student_and_round_trips() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let student = repo
        .create(CreateStudentParams {
            first_name: "Anna".to_string(),
            last_name: "Ivanova".to_string(),
            patronymic: None,
            email: Some("anna@example.edu".to_string()),
            tg_link: None,
        })
        .await?;

    let fetched = repo.get_by_id(student.id).await?.unwrap();
    assert_eq!(fetched, student);
    assert_eq!(fetched.email.as_deref(), Some("anna@example.edu"));

    Ok(())
}
