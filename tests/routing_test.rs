//! Integration tests for routing, request parsing and service endpoints.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{get, post, send_raw, spawn_app};

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = spawn_app().await;

    let (status, body) = send_raw(&app, Method::POST, "/api/authors", "{\"name\": ").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_array_body_is_bad_request() {
    let app = spawn_app().await;

    let (status, body) = send_raw(&app, Method::POST, "/api/authors", "[\"Orwell\"]").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");

    let (status, body) = send_raw(&app, Method::POST, "/api/enroll", "[1, 1]").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");

    // Nothing was written
    let (_, authors) = get(&app, "/api/authors").await;
    assert_eq!(authors, json!([]));
}

#[tokio::test]
async fn test_wrong_field_type_is_bad_request() {
    let app = spawn_app().await;

    let (status, body) = post(&app, "/api/students", json!({ "name": 42 })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_non_integer_id_is_not_found() {
    let app = spawn_app().await;

    let (status, body) = get(&app, "/api/users/abc").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_unknown_route_is_json_not_found() {
    let app = spawn_app().await;

    let (status, body) = get(&app, "/api/widgets").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "No route matches /api/widgets");
}

#[tokio::test]
async fn test_trailing_slash_is_not_routed() {
    let app = spawn_app().await;

    let (status, body) = get(&app, "/api/books/").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "No route matches /api/books/");
}

#[tokio::test]
async fn test_health_reports_database() {
    let app = spawn_app().await;

    let (status, body) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["services"]["database"]["status"], "healthy");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = spawn_app().await;

    let (status, body) = get(&app, "/api-docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "Relations API");
    assert!(body["paths"]["/api/enroll"]["post"].is_object());
}
