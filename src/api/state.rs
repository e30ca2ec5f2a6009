//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::{
    AuthorService, BookService, CourseService, EnrollmentService, ProfileService,
    ServiceContainer, Services, StudentService, UserService,
};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
    pub profile_service: Arc<dyn ProfileService>,
    pub author_service: Arc<dyn AuthorService>,
    pub book_service: Arc<dyn BookService>,
    pub student_service: Arc<dyn StudentService>,
    pub course_service: Arc<dyn CourseService>,
    pub enrollment_service: Arc<dyn EnrollmentService>,
    /// Database connection (health checks)
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from a connected database.
    ///
    /// Services are wired through the ServiceContainer, all sharing one
    /// Unit of Work over the database pool.
    pub fn from_database(database: Arc<Database>) -> Self {
        let container = Services::from_connection(database.get_connection());
        Self::from_container(&container, database)
    }

    /// Create application state from any service container.
    pub fn from_container(container: &dyn ServiceContainer, database: Arc<Database>) -> Self {
        Self {
            user_service: container.users(),
            profile_service: container.profiles(),
            author_service: container.authors(),
            book_service: container.books(),
            student_service: container.students(),
            course_service: container.courses(),
            enrollment_service: container.enrollments(),
            database,
        }
    }
}
