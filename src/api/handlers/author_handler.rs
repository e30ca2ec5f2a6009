//! Author handlers.

use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};

use crate::api::extractors::{EntityId, JsonBody};
use crate::api::AppState;
use crate::config::ENTITY_AUTHOR;
use crate::domain::{Author, Book, CreateAuthor, UpdateAuthor};
use crate::errors::{AppResult, ErrorResponse};
use crate::types::MessageResponse;

/// Create author routes
pub fn author_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_authors).post(create_author))
        .route(
            "/:id",
            get(get_author).put(update_author).delete(delete_author),
        )
        .route("/:id/books", get(get_author_books))
}

#[utoipa::path(
    post,
    path = "/api/authors",
    tag = "Authors",
    request_body = CreateAuthor,
    responses(
        (status = 201, description = "Author created", body = Author),
        (status = 400, description = "Missing name or malformed body", body = ErrorResponse)
    )
)]
pub async fn create_author(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateAuthor>,
) -> AppResult<(StatusCode, Json<Author>)> {
    let author = state.author_service.create_author(payload).await?;
    Ok((StatusCode::CREATED, Json(author)))
}

#[utoipa::path(
    get,
    path = "/api/authors",
    tag = "Authors",
    responses(
        (status = 200, description = "All authors ordered by id", body = Vec<Author>)
    )
)]
pub async fn list_authors(State(state): State<AppState>) -> AppResult<Json<Vec<Author>>> {
    let authors = state.author_service.list_authors().await?;
    Ok(Json(authors))
}

#[utoipa::path(
    get,
    path = "/api/authors/{id}",
    tag = "Authors",
    params(
        ("id" = i32, Path, description = "Author ID")
    ),
    responses(
        (status = 200, description = "Author", body = Author),
        (status = 404, description = "Author not found", body = ErrorResponse)
    )
)]
pub async fn get_author(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<Json<Author>> {
    let author = state.author_service.get_author(id).await?;
    Ok(Json(author))
}

#[utoipa::path(
    put,
    path = "/api/authors/{id}",
    tag = "Authors",
    params(
        ("id" = i32, Path, description = "Author ID")
    ),
    request_body = UpdateAuthor,
    responses(
        (status = 200, description = "Author updated", body = Author),
        (status = 404, description = "Author not found", body = ErrorResponse)
    )
)]
pub async fn update_author(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    JsonBody(payload): JsonBody<UpdateAuthor>,
) -> AppResult<Json<Author>> {
    let author = state.author_service.update_author(id, payload).await?;
    Ok(Json(author))
}

/// Delete an author without books
#[utoipa::path(
    delete,
    path = "/api/authors/{id}",
    tag = "Authors",
    params(
        ("id" = i32, Path, description = "Author ID")
    ),
    responses(
        (status = 200, description = "Author deleted", body = MessageResponse),
        (status = 404, description = "Author not found", body = ErrorResponse),
        (status = 409, description = "Author still has books", body = ErrorResponse)
    )
)]
pub async fn delete_author(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<Json<MessageResponse>> {
    state.author_service.delete_author(id).await?;
    Ok(Json(MessageResponse::deleted(ENTITY_AUTHOR, id)))
}

/// List the books of an author
#[utoipa::path(
    get,
    path = "/api/authors/{id}/books",
    tag = "Authors",
    params(
        ("id" = i32, Path, description = "Author ID")
    ),
    responses(
        (status = 200, description = "Books ordered by id", body = Vec<Book>),
        (status = 404, description = "Author not found", body = ErrorResponse)
    )
)]
pub async fn get_author_books(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.author_service.get_author_books(id).await?;
    Ok(Json(books))
}
