//! Course handlers.

use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};

use crate::api::extractors::{EntityId, JsonBody};
use crate::api::AppState;
use crate::config::ENTITY_COURSE;
use crate::domain::{Course, CreateCourse, Student, UpdateCourse};
use crate::errors::{AppResult, ErrorResponse};
use crate::types::MessageResponse;

/// Create course routes
pub fn course_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_courses).post(create_course))
        .route(
            "/:id",
            get(get_course).put(update_course).delete(delete_course),
        )
        .route("/:id/students", get(get_course_students))
}

#[utoipa::path(
    post,
    path = "/api/courses",
    tag = "Courses",
    request_body = CreateCourse,
    responses(
        (status = 201, description = "Course created", body = Course),
        (status = 400, description = "Missing title or malformed body", body = ErrorResponse)
    )
)]
pub async fn create_course(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateCourse>,
) -> AppResult<(StatusCode, Json<Course>)> {
    let course = state.course_service.create_course(payload).await?;
    Ok((StatusCode::CREATED, Json(course)))
}

#[utoipa::path(
    get,
    path = "/api/courses",
    tag = "Courses",
    responses(
        (status = 200, description = "All courses ordered by id", body = Vec<Course>)
    )
)]
pub async fn list_courses(State(state): State<AppState>) -> AppResult<Json<Vec<Course>>> {
    let courses = state.course_service.list_courses().await?;
    Ok(Json(courses))
}

#[utoipa::path(
    get,
    path = "/api/courses/{id}",
    tag = "Courses",
    params(
        ("id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Course", body = Course),
        (status = 404, description = "Course not found", body = ErrorResponse)
    )
)]
pub async fn get_course(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<Json<Course>> {
    let course = state.course_service.get_course(id).await?;
    Ok(Json(course))
}

#[utoipa::path(
    put,
    path = "/api/courses/{id}",
    tag = "Courses",
    params(
        ("id" = i32, Path, description = "Course ID")
    ),
    request_body = UpdateCourse,
    responses(
        (status = 200, description = "Course updated", body = Course),
        (status = 404, description = "Course not found", body = ErrorResponse)
    )
)]
pub async fn update_course(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    JsonBody(payload): JsonBody<UpdateCourse>,
) -> AppResult<Json<Course>> {
    let course = state.course_service.update_course(id, payload).await?;
    Ok(Json(course))
}

#[utoipa::path(
    delete,
    path = "/api/courses/{id}",
    tag = "Courses",
    params(
        ("id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Course deleted", body = MessageResponse),
        (status = 404, description = "Course not found", body = ErrorResponse)
    )
)]
pub async fn delete_course(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<Json<MessageResponse>> {
    state.course_service.delete_course(id).await?;
    Ok(Json(MessageResponse::deleted(ENTITY_COURSE, id)))
}

#[utoipa::path(
    get,
    path = "/api/courses/{id}/students",
    tag = "Courses",
    params(
        ("id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Enrolled students ordered by id", body = Vec<Student>),
        (status = 404, description = "Course not found", body = ErrorResponse)
    )
)]
pub async fn get_course_students(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<Json<Vec<Student>>> {
    let students = state.course_service.get_course_students(id).await?;
    Ok(Json(students))
}
