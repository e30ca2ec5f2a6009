//! Student service.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::ENTITY_STUDENT;
use crate::domain::{Course, CreateStudent, Student, UpdateStudent};
use crate::errors::{required, AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// Student service trait for dependency injection.
#[async_trait]
pub trait StudentService: Send + Sync {
    async fn get_student(&self, id: i32) -> AppResult<Student>;

    async fn list_students(&self) -> AppResult<Vec<Student>>;

    async fn create_student(&self, input: CreateStudent) -> AppResult<Student>;

    async fn update_student(&self, id: i32, changes: UpdateStudent) -> AppResult<Student>;

    /// Delete a student; their enrollments are dropped with them
    async fn delete_student(&self, id: i32) -> AppResult<()>;

    /// Courses the student is enrolled in
    async fn get_student_courses(&self, id: i32) -> AppResult<Vec<Course>>;
}

pub struct StudentManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> StudentManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> StudentService for StudentManager<U> {
    async fn get_student(&self, id: i32) -> AppResult<Student> {
        self.uow
            .students()
            .find_by_id(id)
            .await?
            .ok_or_not_found(ENTITY_STUDENT, id)
    }

    async fn list_students(&self) -> AppResult<Vec<Student>> {
        self.uow.students().list().await
    }

    async fn create_student(&self, input: CreateStudent) -> AppResult<Student> {
        let name = required(input.name, "name")?;

        let student = self.uow.students().create(name).await?;
        tracing::info!(student_id = student.id, "Student created");
        Ok(student)
    }

    async fn update_student(&self, id: i32, changes: UpdateStudent) -> AppResult<Student> {
        let student = self.uow.students().update(id, changes).await?;
        tracing::info!(student_id = id, "Student updated");
        Ok(student)
    }

    async fn delete_student(&self, id: i32) -> AppResult<()> {
        self.uow.students().delete(id).await?;
        tracing::info!(student_id = id, "Student deleted");
        Ok(())
    }

    async fn get_student_courses(&self, id: i32) -> AppResult<Vec<Course>> {
        self.get_student(id).await?;
        self.uow.enrollments().courses_of(id).await
    }
}
