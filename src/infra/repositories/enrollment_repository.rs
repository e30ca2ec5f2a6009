//! Enrollment repository - rows of the `student_course` join table.

use async_trait::async_trait;
use sea_orm::{
    sea_query::OnConflict, ColumnTrait, DatabaseConnection, EntityTrait, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set,
};

use super::entities::{
    course::{self, Entity as CourseEntity},
    student::{self, Entity as StudentEntity},
    student_course::{self, ActiveModel, Entity as StudentCourseEntity},
};
use crate::domain::{Course, Student};
use crate::errors::{AppError, AppResult};

#[cfg(test)]
use mockall::automock;

/// Enrollment repository trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// Whether the student is enrolled in the course
    async fn is_enrolled(&self, student_id: i32, course_id: i32) -> AppResult<bool>;

    /// Insert the pair unless it already exists. Returns true when a row was added.
    async fn enroll(&self, student_id: i32, course_id: i32) -> AppResult<bool>;

    /// Remove the pair. Returns true when a row was removed.
    async fn unenroll(&self, student_id: i32, course_id: i32) -> AppResult<bool>;

    /// Courses a student is enrolled in, ordered by course ID
    async fn courses_of(&self, student_id: i32) -> AppResult<Vec<Course>>;

    /// Students enrolled in a course, ordered by student ID
    async fn students_of(&self, course_id: i32) -> AppResult<Vec<Student>>;
}

/// Concrete implementation of EnrollmentRepository
pub struct EnrollmentStore {
    db: DatabaseConnection,
}

impl EnrollmentStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EnrollmentRepository for EnrollmentStore {
    async fn is_enrolled(&self, student_id: i32, course_id: i32) -> AppResult<bool> {
        let row = StudentCourseEntity::find_by_id((student_id, course_id))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(row.is_some())
    }

    async fn enroll(&self, student_id: i32, course_id: i32) -> AppResult<bool> {
        let row = ActiveModel {
            student_id: Set(student_id),
            course_id: Set(course_id),
        };

        // A concurrent duplicate hits the composite key and is skipped
        let inserted = StudentCourseEntity::insert(row)
            .on_conflict(
                OnConflict::columns([
                    student_course::Column::StudentId,
                    student_course::Column::CourseId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(inserted > 0)
    }

    async fn unenroll(&self, student_id: i32, course_id: i32) -> AppResult<bool> {
        let result = StudentCourseEntity::delete_by_id((student_id, course_id))
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected > 0)
    }

    async fn courses_of(&self, student_id: i32) -> AppResult<Vec<Course>> {
        let models = CourseEntity::find()
            .join(JoinType::InnerJoin, course::Relation::StudentCourse.def())
            .filter(student_course::Column::StudentId.eq(student_id))
            .order_by_asc(course::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Course::from).collect())
    }

    async fn students_of(&self, course_id: i32) -> AppResult<Vec<Student>> {
        let models = StudentEntity::find()
            .join(JoinType::InnerJoin, student::Relation::StudentCourse.def())
            .filter(student_course::Column::CourseId.eq(course_id))
            .order_by_asc(student::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Student::from).collect())
    }
}
