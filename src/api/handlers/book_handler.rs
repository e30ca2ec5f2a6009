//! Book handlers.

use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};

use crate::api::extractors::{EntityId, JsonBody};
use crate::api::AppState;
use crate::config::ENTITY_BOOK;
use crate::domain::{Book, CreateBook, UpdateBook};
use crate::errors::{AppResult, ErrorResponse};
use crate::types::MessageResponse;

/// Create book routes
pub fn book_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_books).post(create_book))
        .route("/:id", get(get_book).put(update_book).delete(delete_book))
}

/// Create a book for an existing author
#[utoipa::path(
    post,
    path = "/api/books",
    tag = "Books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Missing field or malformed body", body = ErrorResponse),
        (status = 404, description = "Author not found", body = ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateBook>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let book = state.book_service.create_book(payload).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

#[utoipa::path(
    get,
    path = "/api/books",
    tag = "Books",
    responses(
        (status = 200, description = "All books ordered by id", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.book_service.list_books().await?;
    Ok(Json(books))
}

#[utoipa::path(
    get,
    path = "/api/books/{id}",
    tag = "Books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book", body = Book),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<Json<Book>> {
    let book = state.book_service.get_book(id).await?;
    Ok(Json(book))
}

#[utoipa::path(
    put,
    path = "/api/books/{id}",
    tag = "Books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 404, description = "Book or target author not found", body = ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    JsonBody(payload): JsonBody<UpdateBook>,
) -> AppResult<Json<Book>> {
    let book = state.book_service.update_book(id, payload).await?;
    Ok(Json(book))
}

#[utoipa::path(
    delete,
    path = "/api/books/{id}",
    tag = "Books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<Json<MessageResponse>> {
    state.book_service.delete_book(id).await?;
    Ok(Json(MessageResponse::deleted(ENTITY_BOOK, id)))
}
