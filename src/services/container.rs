//! Service Container - Centralized service access.
//!
//! SOLID (SRP): Manages service lifecycle and access.
//! SOLID (DIP): Depends on service traits, not implementations.

use std::sync::Arc;

use super::{
    AuthorManager, AuthorService, BookManager, BookService, CourseManager, CourseService,
    EnrollmentManager, EnrollmentService, ProfileManager, ProfileService, StudentManager,
    StudentService, UserManager, UserService,
};
use crate::infra::Persistence;

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    fn users(&self) -> Arc<dyn UserService>;

    fn profiles(&self) -> Arc<dyn ProfileService>;

    fn authors(&self) -> Arc<dyn AuthorService>;

    fn books(&self) -> Arc<dyn BookService>;

    fn students(&self) -> Arc<dyn StudentService>;

    fn courses(&self) -> Arc<dyn CourseService>;

    fn enrollments(&self) -> Arc<dyn EnrollmentService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    user_service: Arc<dyn UserService>,
    profile_service: Arc<dyn ProfileService>,
    author_service: Arc<dyn AuthorService>,
    book_service: Arc<dyn BookService>,
    student_service: Arc<dyn StudentService>,
    course_service: Arc<dyn CourseService>,
    enrollment_service: Arc<dyn EnrollmentService>,
}

impl Services {
    /// Create service container from a database connection.
    ///
    /// All services share one Unit of Work and therefore one pool.
    pub fn from_connection(db: sea_orm::DatabaseConnection) -> Self {
        let uow = Arc::new(Persistence::new(db));

        Self {
            user_service: Arc::new(UserManager::new(uow.clone())),
            profile_service: Arc::new(ProfileManager::new(uow.clone())),
            author_service: Arc::new(AuthorManager::new(uow.clone())),
            book_service: Arc::new(BookManager::new(uow.clone())),
            student_service: Arc::new(StudentManager::new(uow.clone())),
            course_service: Arc::new(CourseManager::new(uow.clone())),
            enrollment_service: Arc::new(EnrollmentManager::new(uow)),
        }
    }
}

impl ServiceContainer for Services {
    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    fn profiles(&self) -> Arc<dyn ProfileService> {
        self.profile_service.clone()
    }

    fn authors(&self) -> Arc<dyn AuthorService> {
        self.author_service.clone()
    }

    fn books(&self) -> Arc<dyn BookService> {
        self.book_service.clone()
    }

    fn students(&self) -> Arc<dyn StudentService> {
        self.student_service.clone()
    }

    fn courses(&self) -> Arc<dyn CourseService> {
        self.course_service.clone()
    }

    fn enrollments(&self) -> Arc<dyn EnrollmentService> {
        self.enrollment_service.clone()
    }
}
