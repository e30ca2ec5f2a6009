//! Student handlers.

use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};

use crate::api::extractors::{EntityId, JsonBody};
use crate::api::AppState;
use crate::config::ENTITY_STUDENT;
use crate::domain::{Course, CreateStudent, Student, UpdateStudent};
use crate::errors::{AppResult, ErrorResponse};
use crate::types::MessageResponse;

/// Create student routes
pub fn student_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_students).post(create_student))
        .route(
            "/:id",
            get(get_student).put(update_student).delete(delete_student),
        )
        .route("/:id/courses", get(get_student_courses))
}

#[utoipa::path(
    post,
    path = "/api/students",
    tag = "Students",
    request_body = CreateStudent,
    responses(
        (status = 201, description = "Student created", body = Student),
        (status = 400, description = "Missing name or malformed body", body = ErrorResponse)
    )
)]
pub async fn create_student(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateStudent>,
) -> AppResult<(StatusCode, Json<Student>)> {
    let student = state.student_service.create_student(payload).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

#[utoipa::path(
    get,
    path = "/api/students",
    tag = "Students",
    responses(
        (status = 200, description = "All students ordered by id", body = Vec<Student>)
    )
)]
pub async fn list_students(State(state): State<AppState>) -> AppResult<Json<Vec<Student>>> {
    let students = state.student_service.list_students().await?;
    Ok(Json(students))
}

#[utoipa::path(
    get,
    path = "/api/students/{id}",
    tag = "Students",
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student", body = Student),
        (status = 404, description = "Student not found", body = ErrorResponse)
    )
)]
pub async fn get_student(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<Json<Student>> {
    let student = state.student_service.get_student(id).await?;
    Ok(Json(student))
}

#[utoipa::path(
    put,
    path = "/api/students/{id}",
    tag = "Students",
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    request_body = UpdateStudent,
    responses(
        (status = 200, description = "Student updated", body = Student),
        (status = 404, description = "Student not found", body = ErrorResponse)
    )
)]
pub async fn update_student(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    JsonBody(payload): JsonBody<UpdateStudent>,
) -> AppResult<Json<Student>> {
    let student = state.student_service.update_student(id, payload).await?;
    Ok(Json(student))
}

/// Delete a student along with their enrollments
#[utoipa::path(
    delete,
    path = "/api/students/{id}",
    tag = "Students",
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student deleted", body = MessageResponse),
        (status = 404, description = "Student not found", body = ErrorResponse)
    )
)]
pub async fn delete_student(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<Json<MessageResponse>> {
    state.student_service.delete_student(id).await?;
    Ok(Json(MessageResponse::deleted(ENTITY_STUDENT, id)))
}

/// List the courses a student is enrolled in
#[utoipa::path(
    get,
    path = "/api/students/{id}/courses",
    tag = "Students",
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Courses ordered by id", body = Vec<Course>),
        (status = 404, description = "Student not found", body = ErrorResponse)
    )
)]
pub async fn get_student_courses(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<Json<Vec<Course>>> {
    let courses = state.student_service.get_student_courses(id).await?;
    Ok(Json(courses))
}
