//! HTTP request handlers.

pub mod author_handler;
pub mod book_handler;
pub mod course_handler;
pub mod enrollment_handler;
pub mod health_handler;
pub mod profile_handler;
pub mod student_handler;
pub mod user_handler;

pub use author_handler::author_routes;
pub use book_handler::book_routes;
pub use course_handler::course_routes;
pub use enrollment_handler::enrollment_routes;
pub use health_handler::health_check;
pub use profile_handler::profile_routes;
pub use student_handler::student_routes;
pub use user_handler::user_routes;
