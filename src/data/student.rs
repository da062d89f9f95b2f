use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder,
};

use crate::model::student::{CreateStudentParams, UpdateStudentParams};

pub struct StudentRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new student.
    pub async fn create(
        &self,
        params: CreateStudentParams,
    ) -> Result<entity::student::Model, DbErr> {
        entity::student::ActiveModel {
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            patronymic: ActiveValue::Set(params.patronymic),
            email: ActiveValue::Set(params.email),
            tg_link: ActiveValue::Set(params.tg_link),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a student by ID.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::student::Model>, DbErr> {
        entity::prelude::Student::find_by_id(id).one(self.db).await
    }

    /// Gets all students ordered by last name.
    pub async fn get_all(&self) -> Result<Vec<entity::student::Model>, DbErr> {
        entity::prelude::Student::find()
            .order_by_asc(entity::student::Column::LastName)
            .all(self.db)
            .await
    }

    /// Updates a student, touching only the fields present in `params`.
    pub async fn update(
        &self,
        params: UpdateStudentParams,
    ) -> Result<entity::student::Model, DbErr> {
        let student = entity::prelude::Student::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Student {} not found",
                params.id
            )))?;

        let mut active_model: entity::student::ActiveModel = student.into();

        if let Some(first_name) = params.first_name {
            active_model.first_name = ActiveValue::Set(first_name);
        }
        if let Some(last_name) = params.last_name {
            active_model.last_name = ActiveValue::Set(last_name);
        }
        if let Some(patronymic) = params.patronymic {
            active_model.patronymic = ActiveValue::Set(patronymic);
        }
        if let Some(email) = params.email {
            active_model.email = ActiveValue::Set(email);
        }
        if let Some(tg_link) = params.tg_link {
            active_model.tg_link = ActiveValue::Set(tg_link);
        }

        active_model.update(self.db).await
    }

    /// Deletes a student by ID.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Student::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
