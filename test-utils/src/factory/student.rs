//! Student factory for creating test student entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test students with customizable fields.
pub struct StudentFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
    patronymic: Option<String>,
    email: Option<String>,
    tg_link: Option<String>,
}

impl<'a> StudentFactory<'a> {
    /// Creates a new StudentFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"Student"`
    /// - last_name: `"Number {id}"` where id is auto-incremented
    /// - patronymic / email / tg_link: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: "Student".to_string(),
            last_name: format!("Number {}", id),
            patronymic: None,
            email: None,
            tg_link: None,
        }
    }

    /// Sets the first name.
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    /// Sets the last name.
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    /// Sets the email.
    pub fn email(mut self, email: Option<String>) -> Self {
        self.email = email;
        self
    }

    /// Builds and inserts the student entity into the database.
    pub async fn build(self) -> Result<entity::student::Model, DbErr> {
        entity::student::ActiveModel {
            id: ActiveValue::NotSet,
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            patronymic: ActiveValue::Set(self.patronymic),
            email: ActiveValue::Set(self.email),
            tg_link: ActiveValue::Set(self.tg_link),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a student with default values.
pub async fn create_student(db: &DatabaseConnection) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db).build().await
}
