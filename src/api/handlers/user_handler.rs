//! User handlers.

use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};

use crate::api::extractors::{EntityId, JsonBody};
use crate::api::AppState;
use crate::config::ENTITY_USER;
use crate::domain::{CreateUser, Profile, UpdateUser, User};
use crate::errors::{AppResult, ErrorResponse};
use crate::types::MessageResponse;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
        .route("/:id/profile", get(get_user_profile))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Missing username or malformed body", body = ErrorResponse),
        (status = 409, description = "Username already taken", body = ErrorResponse)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateUser>,
) -> AppResult<(StatusCode, Json<User>)> {
    let user = state.user_service.create_user(payload).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// List all users
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users ordered by id", body = Vec<User>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User", body = User),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<Json<User>> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(user))
}

/// Update user
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 409, description = "Username already taken", body = ErrorResponse)
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    JsonBody(payload): JsonBody<UpdateUser>,
) -> AppResult<Json<User>> {
    let user = state.user_service.update_user(id, payload).await?;
    Ok(Json(user))
}

/// Delete user
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 409, description = "User still has a profile", body = ErrorResponse)
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<Json<MessageResponse>> {
    state.user_service.delete_user(id).await?;
    Ok(Json(MessageResponse::deleted(ENTITY_USER, id)))
}

/// Get the profile of a user
#[utoipa::path(
    get,
    path = "/api/users/{id}/profile",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Profile owned by the user", body = Profile),
        (status = 404, description = "User or profile not found", body = ErrorResponse)
    )
)]
pub async fn get_user_profile(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<Json<Profile>> {
    let profile = state.user_service.get_user_profile(id).await?;
    Ok(Json(profile))
}
