//! Course repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use super::entities::course::{self, ActiveModel, Entity as CourseEntity};
use crate::config::ENTITY_COURSE;
use crate::domain::{Course, UpdateCourse};
use crate::errors::{AppError, AppResult, OptionExt};

#[cfg(test)]
use mockall::automock;

/// Course repository trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Course>>;

    async fn list(&self) -> AppResult<Vec<Course>>;

    async fn create(&self, title: String) -> AppResult<Course>;

    async fn update(&self, id: i32, changes: UpdateCourse) -> AppResult<Course>;

    /// Delete course by ID; enrollment rows go with it
    async fn delete(&self, id: i32) -> AppResult<()>;
}

pub struct CourseStore {
    db: DatabaseConnection,
}

impl CourseStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CourseRepository for CourseStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Course>> {
        let result = CourseEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Course::from))
    }

    async fn list(&self) -> AppResult<Vec<Course>> {
        let models = CourseEntity::find()
            .order_by_asc(course::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Course::from).collect())
    }

    async fn create(&self, title: String) -> AppResult<Course> {
        let active_model = ActiveModel {
            title: Set(title),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Course::from(model))
    }

    async fn update(&self, id: i32, changes: UpdateCourse) -> AppResult<Course> {
        let course = CourseEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_not_found(ENTITY_COURSE, id)?;

        let mut active: ActiveModel = course.clone().into();

        if let Some(title) = changes.title {
            active.title = Set(title);
        }

        if !active.is_changed() {
            return Ok(Course::from(course));
        }

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Course::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = CourseEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found(ENTITY_COURSE, id));
        }

        Ok(())
    }
}
