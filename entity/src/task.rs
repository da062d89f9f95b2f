use sea_orm::entity::prelude::*;

/// A unit of work. Tasks are independent of any single meeting; agenda
/// membership lives in the `meeting_task` link table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "task")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub is_completed: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::meeting_task::Entity")]
    MeetingTask,
}

impl Related<super::meeting_task::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MeetingTask.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
