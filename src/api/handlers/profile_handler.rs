//! Profile handlers.

use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};

use crate::api::extractors::{EntityId, JsonBody};
use crate::api::AppState;
use crate::config::ENTITY_PROFILE;
use crate::domain::{CreateProfile, Profile, UpdateProfile};
use crate::errors::{AppResult, ErrorResponse};
use crate::types::MessageResponse;

/// Create profile routes
pub fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_profiles).post(create_profile))
        .route(
            "/:id",
            get(get_profile).put(update_profile).delete(delete_profile),
        )
}

/// Create a profile for a user
#[utoipa::path(
    post,
    path = "/api/profiles",
    tag = "Profiles",
    request_body = CreateProfile,
    responses(
        (status = 201, description = "Profile created", body = Profile),
        (status = 400, description = "Missing field or malformed body", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 409, description = "User already has a profile", body = ErrorResponse)
    )
)]
pub async fn create_profile(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateProfile>,
) -> AppResult<(StatusCode, Json<Profile>)> {
    let profile = state.profile_service.create_profile(payload).await?;
    Ok((StatusCode::CREATED, Json(profile)))
}

/// List all profiles
#[utoipa::path(
    get,
    path = "/api/profiles",
    tag = "Profiles",
    responses(
        (status = 200, description = "All profiles ordered by id", body = Vec<Profile>)
    )
)]
pub async fn list_profiles(State(state): State<AppState>) -> AppResult<Json<Vec<Profile>>> {
    let profiles = state.profile_service.list_profiles().await?;
    Ok(Json(profiles))
}

/// Get profile by ID
#[utoipa::path(
    get,
    path = "/api/profiles/{id}",
    tag = "Profiles",
    params(
        ("id" = i32, Path, description = "Profile ID")
    ),
    responses(
        (status = 200, description = "Profile", body = Profile),
        (status = 404, description = "Profile not found", body = ErrorResponse)
    )
)]
pub async fn get_profile(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<Json<Profile>> {
    let profile = state.profile_service.get_profile(id).await?;
    Ok(Json(profile))
}

/// Update profile
#[utoipa::path(
    put,
    path = "/api/profiles/{id}",
    tag = "Profiles",
    params(
        ("id" = i32, Path, description = "Profile ID")
    ),
    request_body = UpdateProfile,
    responses(
        (status = 200, description = "Profile updated", body = Profile),
        (status = 404, description = "Profile or target user not found", body = ErrorResponse),
        (status = 409, description = "Target user already has a profile", body = ErrorResponse)
    )
)]
pub async fn update_profile(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    JsonBody(payload): JsonBody<UpdateProfile>,
) -> AppResult<Json<Profile>> {
    let profile = state.profile_service.update_profile(id, payload).await?;
    Ok(Json(profile))
}

/// Delete profile
#[utoipa::path(
    delete,
    path = "/api/profiles/{id}",
    tag = "Profiles",
    params(
        ("id" = i32, Path, description = "Profile ID")
    ),
    responses(
        (status = 200, description = "Profile deleted", body = MessageResponse),
        (status = 404, description = "Profile not found", body = ErrorResponse)
    )
)]
pub async fn delete_profile(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<Json<MessageResponse>> {
    state.profile_service.delete_profile(id).await?;
    Ok(Json(MessageResponse::deleted(ENTITY_PROFILE, id)))
}
