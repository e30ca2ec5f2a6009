//! Course service.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::ENTITY_COURSE;
use crate::domain::{Course, CreateCourse, Student, UpdateCourse};
use crate::errors::{required, AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// Course service trait for dependency injection.
#[async_trait]
pub trait CourseService: Send + Sync {
    async fn get_course(&self, id: i32) -> AppResult<Course>;

    async fn list_courses(&self) -> AppResult<Vec<Course>>;

    async fn create_course(&self, input: CreateCourse) -> AppResult<Course>;

    async fn update_course(&self, id: i32, changes: UpdateCourse) -> AppResult<Course>;

    /// Delete a course; its enrollments are dropped with it
    async fn delete_course(&self, id: i32) -> AppResult<()>;

    /// Students enrolled in the course
    async fn get_course_students(&self, id: i32) -> AppResult<Vec<Student>>;
}

pub struct CourseManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> CourseManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> CourseService for CourseManager<U> {
    async fn get_course(&self, id: i32) -> AppResult<Course> {
        self.uow
            .courses()
            .find_by_id(id)
            .await?
            .ok_or_not_found(ENTITY_COURSE, id)
    }

    async fn list_courses(&self) -> AppResult<Vec<Course>> {
        self.uow.courses().list().await
    }

    async fn create_course(&self, input: CreateCourse) -> AppResult<Course> {
        let title = required(input.title, "title")?;

        let course = self.uow.courses().create(title).await?;
        tracing::info!(course_id = course.id, "Course created");
        Ok(course)
    }

    async fn update_course(&self, id: i32, changes: UpdateCourse) -> AppResult<Course> {
        let course = self.uow.courses().update(id, changes).await?;
        tracing::info!(course_id = id, "Course updated");
        Ok(course)
    }

    async fn delete_course(&self, id: i32) -> AppResult<()> {
        self.uow.courses().delete(id).await?;
        tracing::info!(course_id = id, "Course deleted");
        Ok(())
    }

    async fn get_course_students(&self, id: i32) -> AppResult<Vec<Student>> {
        self.get_course(id).await?;
        self.uow.enrollments().students_of(id).await
    }
}
