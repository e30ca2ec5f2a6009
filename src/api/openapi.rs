//! OpenAPI documentation configuration.
//!
//! The document is served as JSON at `/api-docs/openapi.json`.

use utoipa::OpenApi;

use crate::api::handlers::{
    author_handler, book_handler, course_handler, enrollment_handler, health_handler,
    profile_handler, student_handler, user_handler,
};
use crate::domain::{
    Author, Book, Course, CreateAuthor, CreateBook, CreateCourse, CreateProfile, CreateStudent,
    CreateUser, EnrollmentRequest, Profile, Student, UpdateAuthor, UpdateBook, UpdateCourse,
    UpdateProfile, UpdateStudent, UpdateUser, User,
};
use crate::errors::{ErrorBody, ErrorResponse};
use crate::types::MessageResponse;

/// OpenAPI documentation for the relations API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Relations API",
        version = "0.1.0",
        description = "CRUD over users, profiles, authors, books, students and courses, plus course enrollment",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        health_handler::health_check,
        // Users
        user_handler::create_user,
        user_handler::list_users,
        user_handler::get_user,
        user_handler::update_user,
        user_handler::delete_user,
        user_handler::get_user_profile,
        // Profiles
        profile_handler::create_profile,
        profile_handler::list_profiles,
        profile_handler::get_profile,
        profile_handler::update_profile,
        profile_handler::delete_profile,
        // Authors
        author_handler::create_author,
        author_handler::list_authors,
        author_handler::get_author,
        author_handler::update_author,
        author_handler::delete_author,
        author_handler::get_author_books,
        // Books
        book_handler::create_book,
        book_handler::list_books,
        book_handler::get_book,
        book_handler::update_book,
        book_handler::delete_book,
        // Students
        student_handler::create_student,
        student_handler::list_students,
        student_handler::get_student,
        student_handler::update_student,
        student_handler::delete_student,
        student_handler::get_student_courses,
        // Courses
        course_handler::create_course,
        course_handler::list_courses,
        course_handler::get_course,
        course_handler::update_course,
        course_handler::delete_course,
        course_handler::get_course_students,
        // Enrollment
        enrollment_handler::enroll,
        enrollment_handler::unenroll,
    ),
    components(
        schemas(
            // Domain types
            User, CreateUser, UpdateUser,
            Profile, CreateProfile, UpdateProfile,
            Author, CreateAuthor, UpdateAuthor,
            Book, CreateBook, UpdateBook,
            Student, CreateStudent, UpdateStudent,
            Course, CreateCourse, UpdateCourse,
            EnrollmentRequest,
            // Responses
            MessageResponse,
            ErrorResponse,
            ErrorBody,
            health_handler::HealthResponse,
            health_handler::ServiceStatus,
            health_handler::ServiceHealth,
        )
    ),
    tags(
        (name = "Users", description = "Users and their profile"),
        (name = "Profiles", description = "One profile per user"),
        (name = "Authors", description = "Authors and their books"),
        (name = "Books", description = "Books owned by an author"),
        (name = "Students", description = "Students and their courses"),
        (name = "Courses", description = "Courses and their students"),
        (name = "Enrollment", description = "Student/course association"),
        (name = "Health", description = "Service health")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_entity_paths() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        assert!(paths.contains_key("/api/users"));
        assert!(paths.contains_key("/api/users/{id}/profile"));
        assert!(paths.contains_key("/api/authors/{id}/books"));
        assert!(paths.contains_key("/api/enroll"));
        assert!(paths.contains_key("/health"));
    }
}
