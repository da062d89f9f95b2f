//! Domain models for students.

/// A student who can be a member of teams.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub patronymic: Option<String>,
    pub email: Option<String>,
    pub tg_link: Option<String>,
}

impl Student {
    pub fn from_entity(entity: entity::student::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            patronymic: entity.patronymic,
            email: entity.email,
            tg_link: entity.tg_link,
        }
    }
}

/// Parameters for creating a new student.
#[derive(Debug, Clone)]
pub struct CreateStudentParams {
    pub first_name: String,
    pub last_name: String,
    pub patronymic: Option<String>,
    pub email: Option<String>,
    pub tg_link: Option<String>,
}

/// Parameters for updating an existing student.
///
/// All fields are optional - only provided fields will be updated.
#[derive(Debug, Clone, Default)]
pub struct UpdateStudentParams {
    pub id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub patronymic: Option<Option<String>>,
    pub email: Option<Option<String>>,
    pub tg_link: Option<Option<String>>,
}
