use sea_orm::DatabaseConnection;

use crate::{
    data::student::StudentRepository,
    error::AppError,
    model::student::{CreateStudentParams, Student, UpdateStudentParams},
};

/// Student CRUD.
pub struct StudentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateStudentParams) -> Result<Student, AppError> {
        let student = StudentRepository::new(self.db).create(params).await?;

        Ok(Student::from_entity(student))
    }

    pub async fn get(&self, student_id: i32) -> Result<Student, AppError> {
        let student = StudentRepository::new(self.db)
            .get_by_id(student_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Student {} not found", student_id)))?;

        Ok(Student::from_entity(student))
    }

    pub async fn get_all(&self) -> Result<Vec<Student>, AppError> {
        let students = StudentRepository::new(self.db).get_all().await?;

        Ok(students.into_iter().map(Student::from_entity).collect())
    }

    pub async fn update(&self, params: UpdateStudentParams) -> Result<Student, AppError> {
        let student_repo = StudentRepository::new(self.db);
        student_repo
            .get_by_id(params.id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Student {} not found", params.id)))?;

        let updated = student_repo.update(params).await?;

        Ok(Student::from_entity(updated))
    }

    pub async fn delete(&self, student_id: i32) -> Result<(), AppError> {
        let student_repo = StudentRepository::new(self.db);
        student_repo
            .get_by_id(student_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Student {} not found", student_id)))?;

        student_repo.delete(student_id).await?;

        Ok(())
    }
}
