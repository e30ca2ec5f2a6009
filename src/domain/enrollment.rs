//! Student/course enrollment (many-to-many association).

use serde::Deserialize;
use utoipa::ToSchema;

use super::{Course, Student};

/// Enrollment request payload; both ids are required
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct EnrollmentRequest {
    #[schema(example = 1)]
    pub student_id: Option<i32>,
    #[schema(example = 1)]
    pub course_id: Option<i32>,
}

/// Result of an enroll or unenroll call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrollment {
    pub student: Student,
    pub course: Course,
    /// Whether the call changed the association table
    pub changed: bool,
}

impl Enrollment {
    /// Confirmation for an enroll call
    pub fn enrolled_message(&self) -> String {
        format!("{} enrolled in {}", self.student.name, self.course.title)
    }

    /// Confirmation for an unenroll call
    pub fn unenrolled_message(&self) -> String {
        format!("{} unenrolled from {}", self.student.name, self.course.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_both_sides() {
        let enrollment = Enrollment {
            student: Student {
                id: 1,
                name: "Ana".to_string(),
            },
            course: Course {
                id: 1,
                title: "Math".to_string(),
            },
            changed: true,
        };
        assert_eq!(enrollment.enrolled_message(), "Ana enrolled in Math");
        assert_eq!(enrollment.unenrolled_message(), "Ana unenrolled from Math");
    }
}
