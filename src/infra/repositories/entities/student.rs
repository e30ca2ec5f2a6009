//! Student database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Student;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
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

/// Courses reached through the `student_course` join table
impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        super::student_course::Relation::Course.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::student_course::Relation::Student.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Student {
    fn from(model: Model) -> Self {
        Student {
            id: model.id,
            name: model.name,
        }
    }
}
