//! Unit of Work pattern implementation.
//!
//! Centralizes access to all repositories so services depend on a single
//! injected hub instead of seven separate stores. Every repository write is
//! one statement against the shared pool; nothing here opens a transaction.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::repositories::{
    AuthorRepository, AuthorStore, BookRepository, BookStore, CourseRepository, CourseStore,
    EnrollmentRepository, EnrollmentStore, ProfileRepository, ProfileStore, StudentRepository,
    StudentStore, UserRepository, UserStore,
};

/// Unit of Work trait for dependency injection.
pub trait UnitOfWork: Send + Sync {
    /// Get user repository
    fn users(&self) -> Arc<dyn UserRepository>;

    /// Get profile repository
    fn profiles(&self) -> Arc<dyn ProfileRepository>;

    /// Get author repository
    fn authors(&self) -> Arc<dyn AuthorRepository>;

    /// Get book repository
    fn books(&self) -> Arc<dyn BookRepository>;

    /// Get student repository
    fn students(&self) -> Arc<dyn StudentRepository>;

    /// Get course repository
    fn courses(&self) -> Arc<dyn CourseRepository>;

    /// Get enrollment (student/course association) repository
    fn enrollments(&self) -> Arc<dyn EnrollmentRepository>;
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    user_repo: Arc<UserStore>,
    profile_repo: Arc<ProfileStore>,
    author_repo: Arc<AuthorStore>,
    book_repo: Arc<BookStore>,
    student_repo: Arc<StudentStore>,
    course_repo: Arc<CourseStore>,
    enrollment_repo: Arc<EnrollmentStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            user_repo: Arc::new(UserStore::new(db.clone())),
            profile_repo: Arc::new(ProfileStore::new(db.clone())),
            author_repo: Arc::new(AuthorStore::new(db.clone())),
            book_repo: Arc::new(BookStore::new(db.clone())),
            student_repo: Arc::new(StudentStore::new(db.clone())),
            course_repo: Arc::new(CourseStore::new(db.clone())),
            enrollment_repo: Arc::new(EnrollmentStore::new(db)),
        }
    }
}

impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn profiles(&self) -> Arc<dyn ProfileRepository> {
        self.profile_repo.clone()
    }

    fn authors(&self) -> Arc<dyn AuthorRepository> {
        self.author_repo.clone()
    }

    fn books(&self) -> Arc<dyn BookRepository> {
        self.book_repo.clone()
    }

    fn students(&self) -> Arc<dyn StudentRepository> {
        self.student_repo.clone()
    }

    fn courses(&self) -> Arc<dyn CourseRepository> {
        self.course_repo.clone()
    }

    fn enrollments(&self) -> Arc<dyn EnrollmentRepository> {
        self.enrollment_repo.clone()
    }
}
