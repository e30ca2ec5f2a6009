//! Student repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use super::entities::student::{self, ActiveModel, Entity as StudentEntity};
use crate::config::ENTITY_STUDENT;
use crate::domain::{Student, UpdateStudent};
use crate::errors::{AppError, AppResult, OptionExt};

#[cfg(test)]
use mockall::automock;

/// Student repository trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Student>>;

    async fn list(&self) -> AppResult<Vec<Student>>;

    async fn create(&self, name: String) -> AppResult<Student>;

    async fn update(&self, id: i32, changes: UpdateStudent) -> AppResult<Student>;

    /// Delete student by ID; enrollment rows go with it
    async fn delete(&self, id: i32) -> AppResult<()>;
}

pub struct StudentStore {
    db: DatabaseConnection,
}

impl StudentStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StudentRepository for StudentStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Student>> {
        let result = StudentEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Student::from))
    }

    async fn list(&self) -> AppResult<Vec<Student>> {
        let models = StudentEntity::find()
            .order_by_asc(student::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Student::from).collect())
    }

    async fn create(&self, name: String) -> AppResult<Student> {
        let active_model = ActiveModel {
            name: Set(name),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Student::from(model))
    }

    async fn update(&self, id: i32, changes: UpdateStudent) -> AppResult<Student> {
        let student = StudentEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_not_found(ENTITY_STUDENT, id)?;

        let mut active: ActiveModel = student.clone().into();

        if let Some(name) = changes.name {
            active.name = Set(name);
        }

        if !active.is_changed() {
            return Ok(Student::from(student));
        }

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Student::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = StudentEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found(ENTITY_STUDENT, id));
        }

        Ok(())
    }
}
