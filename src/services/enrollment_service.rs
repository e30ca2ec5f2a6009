//! Enrollment service - manages the student/course association.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::{ENTITY_COURSE, ENTITY_STUDENT};
use crate::domain::{Course, Enrollment, EnrollmentRequest, Student};
use crate::errors::{required, AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// Enrollment service trait for dependency injection.
#[async_trait]
pub trait EnrollmentService: Send + Sync {
    /// Enroll a student in a course. Enrolling twice is a no-op.
    async fn enroll(&self, request: EnrollmentRequest) -> AppResult<Enrollment>;

    /// Remove an existing enrollment.
    async fn unenroll(&self, request: EnrollmentRequest) -> AppResult<Enrollment>;
}

pub struct EnrollmentManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> EnrollmentManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    /// Resolve both sides of the pair, failing on the first missing one.
    async fn resolve(&self, request: EnrollmentRequest) -> AppResult<(Student, Course)> {
        let student_id = required(request.student_id, "student_id")?;
        let course_id = required(request.course_id, "course_id")?;

        let student = self
            .uow
            .students()
            .find_by_id(student_id)
            .await?
            .ok_or_not_found(ENTITY_STUDENT, student_id)?;
        let course = self
            .uow
            .courses()
            .find_by_id(course_id)
            .await?
            .ok_or_not_found(ENTITY_COURSE, course_id)?;

        Ok((student, course))
    }
}

#[async_trait]
impl<U: UnitOfWork> EnrollmentService for EnrollmentManager<U> {
    async fn enroll(&self, request: EnrollmentRequest) -> AppResult<Enrollment> {
        let (student, course) = self.resolve(request).await?;
        let enrollments = self.uow.enrollments();

        let changed = if enrollments.is_enrolled(student.id, course.id).await? {
            false
        } else {
            enrollments.enroll(student.id, course.id).await?
        };

        if changed {
            tracing::info!(student_id = student.id, course_id = course.id, "Student enrolled");
        }

        Ok(Enrollment {
            student,
            course,
            changed,
        })
    }

    async fn unenroll(&self, request: EnrollmentRequest) -> AppResult<Enrollment> {
        let (student, course) = self.resolve(request).await?;

        if !self.uow.enrollments().unenroll(student.id, course.id).await? {
            return Err(AppError::NotFound(format!(
                "Enrollment of {} {} in {} {}",
                ENTITY_STUDENT, student.id, ENTITY_COURSE, course.id
            )));
        }

        tracing::info!(student_id = student.id, course_id = course.id, "Student unenrolled");
        Ok(Enrollment {
            student,
            course,
            changed: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;
    use tokio_test::{assert_err, assert_ok};

    use super::*;
    use crate::infra::{MockCourseRepository, MockEnrollmentRepository, MockStudentRepository};
    use crate::services::test_support::TestUnitOfWork;

    fn request(student_id: i32, course_id: i32) -> EnrollmentRequest {
        EnrollmentRequest {
            student_id: Some(student_id),
            course_id: Some(course_id),
        }
    }

    fn ana_and_math() -> (MockStudentRepository, MockCourseRepository) {
        let mut students = MockStudentRepository::new();
        students.expect_find_by_id().returning(|id| {
            Ok(Some(Student {
                id,
                name: "Ana".to_string(),
            }))
        });
        let mut courses = MockCourseRepository::new();
        courses.expect_find_by_id().returning(|id| {
            Ok(Some(Course {
                id,
                title: "Math".to_string(),
            }))
        });
        (students, courses)
    }

    #[tokio::test]
    async fn test_enroll_adds_pair() {
        let (students, courses) = ana_and_math();
        let mut enrollments = MockEnrollmentRepository::new();
        enrollments.expect_is_enrolled().returning(|_, _| Ok(false));
        enrollments
            .expect_enroll()
            .with(eq(1), eq(2))
            .times(1)
            .returning(|_, _| Ok(true));

        let uow = TestUnitOfWork::default()
            .with_students(students)
            .with_courses(courses)
            .with_enrollments(enrollments);
        let service = EnrollmentManager::new(Arc::new(uow));
        let enrollment = assert_ok!(service.enroll(request(1, 2)).await);

        assert!(enrollment.changed);
        assert_eq!(enrollment.enrolled_message(), "Ana enrolled in Math");
    }

    #[tokio::test]
    async fn test_enroll_twice_is_noop() {
        let (students, courses) = ana_and_math();
        let mut enrollments = MockEnrollmentRepository::new();
        enrollments.expect_is_enrolled().returning(|_, _| Ok(true));
        enrollments.expect_enroll().never();

        let uow = TestUnitOfWork::default()
            .with_students(students)
            .with_courses(courses)
            .with_enrollments(enrollments);
        let service = EnrollmentManager::new(Arc::new(uow));
        let enrollment = assert_ok!(service.enroll(request(1, 1)).await);

        assert!(!enrollment.changed);
        assert_eq!(enrollment.enrolled_message(), "Ana enrolled in Math");
    }

    #[tokio::test]
    async fn test_enroll_missing_course() {
        let (students, _) = ana_and_math();
        let mut courses = MockCourseRepository::new();
        courses.expect_find_by_id().returning(|_| Ok(None));

        let uow = TestUnitOfWork::default()
            .with_students(students)
            .with_courses(courses);
        let service = EnrollmentManager::new(Arc::new(uow));
        let err = assert_err!(service.enroll(request(1, 42)).await);

        assert_eq!(err.to_string(), "Course 42 not found");
    }

    #[tokio::test]
    async fn test_enroll_requires_both_ids() {
        let service = EnrollmentManager::new(Arc::new(TestUnitOfWork::default()));
        let input = EnrollmentRequest {
            student_id: Some(1),
            course_id: None,
        };
        let err = assert_err!(service.enroll(input).await);

        assert_eq!(err.to_string(), "Missing required field: course_id");
    }

    #[tokio::test]
    async fn test_unenroll_unknown_pair() {
        let (students, courses) = ana_and_math();
        let mut enrollments = MockEnrollmentRepository::new();
        enrollments.expect_unenroll().returning(|_, _| Ok(false));

        let uow = TestUnitOfWork::default()
            .with_students(students)
            .with_courses(courses)
            .with_enrollments(enrollments);
        let service = EnrollmentManager::new(Arc::new(uow));
        let err = assert_err!(service.unenroll(request(1, 3)).await);

        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(err.to_string(), "Enrollment of Student 1 in Course 3 not found");
    }
}
