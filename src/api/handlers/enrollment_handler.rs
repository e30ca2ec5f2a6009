//! Enrollment handlers.

use axum::{extract::State, response::Json, routing::post, Router};

use crate::api::extractors::JsonBody;
use crate::api::AppState;
use crate::domain::EnrollmentRequest;
use crate::errors::{AppResult, ErrorResponse};
use crate::types::MessageResponse;

/// Create enrollment routes
pub fn enrollment_routes() -> Router<AppState> {
    Router::new().route("/", post(enroll).delete(unenroll))
}

/// Enroll a student in a course (idempotent)
#[utoipa::path(
    post,
    path = "/api/enroll",
    tag = "Enrollment",
    request_body = EnrollmentRequest,
    responses(
        (status = 200, description = "Student enrolled", body = MessageResponse),
        (status = 400, description = "Missing id or malformed body", body = ErrorResponse),
        (status = 404, description = "Student or course not found", body = ErrorResponse)
    )
)]
pub async fn enroll(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<EnrollmentRequest>,
) -> AppResult<Json<MessageResponse>> {
    let enrollment = state.enrollment_service.enroll(payload).await?;
    Ok(Json(MessageResponse::new(enrollment.enrolled_message())))
}

/// Remove a student from a course
#[utoipa::path(
    delete,
    path = "/api/enroll",
    tag = "Enrollment",
    request_body = EnrollmentRequest,
    responses(
        (status = 200, description = "Student unenrolled", body = MessageResponse),
        (status = 400, description = "Missing id or malformed body", body = ErrorResponse),
        (status = 404, description = "Student, course or enrollment not found", body = ErrorResponse)
    )
)]
pub async fn unenroll(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<EnrollmentRequest>,
) -> AppResult<Json<MessageResponse>> {
    let enrollment = state.enrollment_service.unenroll(payload).await?;
    Ok(Json(MessageResponse::new(enrollment.unenrolled_message())))
}
