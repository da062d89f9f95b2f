use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{ProjectStatus, Semester};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "project")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub goal: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub requirements: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub eval_criteria: Option<String>,
    pub year: i32,
    pub semester: Semester,
    pub status: ProjectStatus,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::milestone::Entity")]
    Milestone,
    #[sea_orm(has_many = "super::project_team::Entity")]
    ProjectTeam,
}

impl Related<super::milestone::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Milestone.def()
    }
}

impl Related<super::project_team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectTeam.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
