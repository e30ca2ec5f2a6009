//! Create, read, patch and delete cycle run against every entity.

mod common;

use axum::{http::StatusCode, Router};
use serde_json::{json, Value};

use common::{delete, get, post, put, spawn_app};

struct Case {
    /// Collection path under the API prefix
    path: &'static str,
    /// Display name used in messages
    entity: &'static str,
    /// Rows the entity refers to, created first
    parents: Vec<(&'static str, Value)>,
    create: Value,
    patch: Value,
}

fn cases() -> Vec<Case> {
    vec![
        Case {
            path: "/api/users",
            entity: "User",
            parents: vec![],
            create: json!({ "username": "ana" }),
            patch: json!({ "username": "ana.b" }),
        },
        Case {
            path: "/api/profiles",
            entity: "Profile",
            parents: vec![("/api/users", json!({ "username": "ana" }))],
            create: json!({ "bio": "Reader", "user_id": 1 }),
            patch: json!({ "bio": "Writer" }),
        },
        Case {
            path: "/api/authors",
            entity: "Author",
            parents: vec![],
            create: json!({ "name": "Orwell" }),
            patch: json!({ "name": "George Orwell" }),
        },
        Case {
            path: "/api/books",
            entity: "Book",
            parents: vec![("/api/authors", json!({ "name": "Orwell" }))],
            create: json!({ "title": "1984", "author_id": 1 }),
            patch: json!({ "title": "Animal Farm" }),
        },
        Case {
            path: "/api/students",
            entity: "Student",
            parents: vec![],
            create: json!({ "name": "Ana" }),
            patch: json!({ "name": "Ana B" }),
        },
        Case {
            path: "/api/courses",
            entity: "Course",
            parents: vec![],
            create: json!({ "title": "Math" }),
            patch: json!({ "title": "Algebra" }),
        },
    ]
}

/// Fields sent on create echoed back with the assigned id.
fn with_id(fields: Value, id: i64) -> Value {
    let mut row = fields;
    row["id"] = json!(id);
    row
}

async fn run_cycle(app: &Router, case: &Case) {
    for (parent_path, parent) in &case.parents {
        let (status, _) = post(app, parent_path, parent.clone()).await;
        assert_eq!(status, StatusCode::CREATED, "{}: parent {}", case.entity, parent_path);
    }

    let item = format!("{}/1", case.path);

    let (status, created) = post(app, case.path, case.create.clone()).await;
    assert_eq!(status, StatusCode::CREATED, "{}: create", case.entity);
    assert_eq!(created, with_id(case.create.clone(), 1), "{}: create", case.entity);

    let (status, fetched) = get(app, &item).await;
    assert_eq!(status, StatusCode::OK, "{}: get", case.entity);
    assert_eq!(fetched, created, "{}: get", case.entity);

    let (status, listed) = get(app, case.path).await;
    assert_eq!(status, StatusCode::OK, "{}: list", case.entity);
    assert_eq!(listed, json!([created.clone()]), "{}: list", case.entity);

    let (status, unchanged) = put(app, &item, json!({})).await;
    assert_eq!(status, StatusCode::OK, "{}: empty patch", case.entity);
    assert_eq!(unchanged, created, "{}: empty patch", case.entity);

    let (status, patched) = put(app, &item, case.patch.clone()).await;
    assert_eq!(status, StatusCode::OK, "{}: patch", case.entity);
    for (field, value) in created.as_object().into_iter().flatten() {
        let expected = case.patch.get(field).unwrap_or(value);
        assert_eq!(&patched[field], expected, "{}: patch {}", case.entity, field);
    }

    let (status, _) = get(app, &item).await;
    assert_eq!(status, StatusCode::OK, "{}: get after patch", case.entity);

    let (status, body) = delete(app, &item).await;
    assert_eq!(status, StatusCode::OK, "{}: delete", case.entity);
    assert_eq!(body["message"], format!("{} 1 deleted", case.entity));

    let (status, body) = get(app, &item).await;
    assert_eq!(status, StatusCode::NOT_FOUND, "{}: get after delete", case.entity);
    assert_eq!(body["error"]["message"], format!("{} 1 not found", case.entity));

    let (status, _) = delete(app, &item).await;
    assert_eq!(status, StatusCode::NOT_FOUND, "{}: second delete", case.entity);

    let (_, listed) = get(app, case.path).await;
    assert_eq!(listed, json!([]), "{}: list after delete", case.entity);
}

#[tokio::test]
async fn test_crud_cycle_for_every_entity() {
    for case in cases() {
        // Fresh database per entity so ids start at 1
        let app = spawn_app().await;
        run_cycle(&app, &case).await;
    }
}

#[tokio::test]
async fn test_update_missing_row_is_not_found_for_every_entity() {
    let app = spawn_app().await;

    for case in cases() {
        let (status, body) = put(&app, &format!("{}/9", case.path), case.patch.clone()).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", case.entity);
        assert_eq!(body["error"]["message"], format!("{} 9 not found", case.entity));
    }
}
