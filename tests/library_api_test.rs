//! Integration tests for authors and books (one-to-many).

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{delete, get, post, put, spawn_app};

#[tokio::test]
async fn test_author_with_book() {
    let app = spawn_app().await;

    let (status, author) = post(&app, "/api/authors", json!({ "name": "Orwell" })).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(author, json!({ "id": 1, "name": "Orwell" }));

    let (status, book) = post(
        &app,
        "/api/books",
        json!({ "title": "1984", "author_id": 1 }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(book, json!({ "id": 1, "title": "1984", "author_id": 1 }));

    let (status, fetched) = get(&app, "/api/books/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, book);

    let (status, books) = get(&app, "/api/authors/1/books").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(books, json!([{ "id": 1, "title": "1984", "author_id": 1 }]));
}

#[tokio::test]
async fn test_book_for_unknown_author_is_not_found() {
    let app = spawn_app().await;

    let (status, body) = post(&app, "/api/books", json!({ "title": "X", "author_id": 99 })).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Author 99 not found");
}

#[tokio::test]
async fn test_book_requires_title_and_author() {
    let app = spawn_app().await;

    let (status, body) = post(&app, "/api/books", json!({ "author_id": 1 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "Missing required field: title");

    let (status, body) = post(&app, "/api/books", json!({ "title": "1984" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "Missing required field: author_id");
}

#[tokio::test]
async fn test_move_book_between_authors() {
    let app = spawn_app().await;
    post(&app, "/api/authors", json!({ "name": "Orwell" })).await;
    post(&app, "/api/authors", json!({ "name": "Huxley" })).await;
    post(&app, "/api/books", json!({ "title": "Brave New World", "author_id": 1 })).await;

    let (status, body) = put(&app, "/api/books/1", json!({ "author_id": 2 })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Brave New World");
    assert_eq!(body["author_id"], 2);

    let (status, _) = put(&app, "/api/books/1", json!({ "author_id": 5 })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, books) = get(&app, "/api/authors/1/books").await;
    assert_eq!(books, json!([]));
}

#[tokio::test]
async fn test_delete_author_with_books_is_restricted() {
    let app = spawn_app().await;
    post(&app, "/api/authors", json!({ "name": "Orwell" })).await;
    post(&app, "/api/books", json!({ "title": "1984", "author_id": 1 })).await;

    let (status, body) = delete(&app, "/api/authors/1").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "CONFLICT");

    let (status, body) = delete(&app, "/api/books/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Book 1 deleted");

    let (status, body) = delete(&app, "/api/authors/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Author 1 deleted");
}

#[tokio::test]
async fn test_update_missing_author_is_not_found() {
    let app = spawn_app().await;

    let (status, body) = put(&app, "/api/authors/4", json!({ "name": "Nobody" })).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Author 4 not found");
}

#[tokio::test]
async fn test_books_of_unknown_author_is_not_found() {
    let app = spawn_app().await;

    let (status, _) = get(&app, "/api/authors/3/books").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
