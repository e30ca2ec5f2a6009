//! Application route configuration.

use axum::{http::Uri, response::Json, routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use super::handlers::{
    author_routes, book_routes, course_routes, enrollment_routes, health_check, profile_routes,
    student_routes, user_routes,
};
use super::openapi::ApiDoc;
use super::AppState;
use crate::config::API_PREFIX;
use crate::errors::AppError;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check (outside the API prefix)
        .route("/health", get(health_check))
        // OpenAPI document
        .route("/api-docs/openapi.json", get(openapi_json))
        // Entity routes
        .nest(API_PREFIX, api_routes())
        // Unknown routes answer with the JSON error body
        .fallback(route_not_found)
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Entity and association routes, mounted under the API prefix
fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/users", user_routes())
        .nest("/profiles", profile_routes())
        .nest("/authors", author_routes())
        .nest("/books", book_routes())
        .nest("/students", student_routes())
        .nest("/courses", course_routes())
        .nest("/enroll", enrollment_routes())
}

/// Serve the generated OpenAPI document
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn route_not_found(uri: Uri) -> AppError {
    AppError::RouteNotFound(uri.path().to_string())
}
