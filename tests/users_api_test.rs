//! Integration tests for users and profiles (one-to-one).

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{delete, get, post, put, spawn_app};

#[tokio::test]
async fn test_create_user_returns_created_row() {
    let app = spawn_app().await;

    let (status, body) = post(&app, "/api/users", json!({ "username": "ana" })).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "id": 1, "username": "ana" }));

    let (status, body) = get(&app, "/api/users/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "ana");
}

#[tokio::test]
async fn test_list_users_in_id_order() {
    let app = spawn_app().await;
    for name in ["carol", "ana", "bob"] {
        post(&app, "/api/users", json!({ "username": name })).await;
    }

    let (status, body) = get(&app, "/api/users").await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(body[0]["username"], "carol");
}

#[tokio::test]
async fn test_missing_username_is_validation_error() {
    let app = spawn_app().await;

    let (status, body) = post(&app, "/api/users", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["message"], "Missing required field: username");

    // Explicit null counts as absent
    let (status, _) = post(&app, "/api/users", json!({ "username": null })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_duplicate_username_conflicts() {
    let app = spawn_app().await;
    post(&app, "/api/users", json!({ "username": "ana" })).await;
    post(&app, "/api/users", json!({ "username": "bob" })).await;

    let (status, body) = post(&app, "/api/users", json!({ "username": "ana" })).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "CONFLICT");

    // Renaming onto a taken name is refused too
    let (status, _) = put(&app, "/api/users/2", json!({ "username": "ana" })).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_get_missing_user_is_not_found() {
    let app = spawn_app().await;

    let (status, body) = get(&app, "/api/users/7").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({ "error": { "code": "NOT_FOUND", "message": "User 7 not found" } })
    );
}

#[tokio::test]
async fn test_profile_partial_update_keeps_other_fields() {
    let app = spawn_app().await;
    post(&app, "/api/users", json!({ "username": "ana" })).await;
    let (status, profile) = post(
        &app,
        "/api/profiles",
        json!({ "bio": "Mathematician", "user_id": 1 }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let uri = format!("/api/profiles/{}", profile["id"]);
    let (status, body) = put(&app, &uri, json!({ "bio": "Poet" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": profile["id"], "bio": "Poet", "user_id": 1 }));

    // An empty patch changes nothing
    let (status, body) = put(&app, &uri, json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bio"], "Poet");
}

#[tokio::test]
async fn test_profile_for_unknown_user_is_not_found() {
    let app = spawn_app().await;

    let (status, body) = post(&app, "/api/profiles", json!({ "bio": "x", "user_id": 9 })).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "User 9 not found");

    let (_, profiles) = get(&app, "/api/profiles").await;
    assert_eq!(profiles, json!([]));
}

#[tokio::test]
async fn test_second_profile_for_user_conflicts() {
    let app = spawn_app().await;
    post(&app, "/api/users", json!({ "username": "ana" })).await;
    post(&app, "/api/profiles", json!({ "bio": "first", "user_id": 1 })).await;

    let (status, _) = post(&app, "/api/profiles", json!({ "bio": "second", "user_id": 1 })).await;

    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_user_profile_traversal() {
    let app = spawn_app().await;
    post(&app, "/api/users", json!({ "username": "ana" })).await;

    let (status, _) = get(&app, "/api/users/1/profile").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    post(&app, "/api/profiles", json!({ "bio": "hello", "user_id": 1 })).await;
    let (status, body) = get(&app, "/api/users/1/profile").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bio"], "hello");
}

#[tokio::test]
async fn test_delete_user_with_profile_is_restricted() {
    let app = spawn_app().await;
    post(&app, "/api/users", json!({ "username": "ana" })).await;
    post(&app, "/api/profiles", json!({ "bio": "hello", "user_id": 1 })).await;

    let (status, body) = delete(&app, "/api/users/1").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["message"], "User 1 still has a profile");

    let (status, body) = delete(&app, "/api/profiles/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Profile 1 deleted" }));

    let (status, body) = delete(&app, "/api/users/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "User 1 deleted" }));

    let (status, _) = get(&app, "/api/users/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Deleting again reports the missing row
    let (status, _) = delete(&app, "/api/users/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
