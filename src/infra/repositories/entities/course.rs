//! Course database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Course;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::student_course::Entity")]
    StudentCourse,
}

impl Related<super::student_course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentCourse.def()
    }
}

/// Students reached through the `student_course` join table
impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        super::student_course::Relation::Student.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::student_course::Relation::Course.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Course {
    fn from(model: Model) -> Self {
        Course {
            id: model.id,
            title: model.title,
        }
    }
}
