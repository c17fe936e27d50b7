mod common;

use axum::http::StatusCode;
use common::{TestApp, generate_unique_name};
use serde_json::{Value, json};

async fn create_faculty(app: &TestApp, name: &str) -> Value {
    let (status, body) = app
        .post(
            "/api/faculties",
            json!({ "name": name, "director": "Dra. Pérez" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

#[tokio::test]
async fn test_create_faculty() {
    let app = TestApp::new();
    let name = generate_unique_name("Engineering");

    let body = create_faculty(&app, &name).await;

    assert_eq!(body["name"], name);
    assert_eq!(body["director"], "Dra. Pérez");
    assert!(body["id"].is_string());
    assert!(body["created_at"].is_string());
    assert_eq!(app.faculties.len(), 1);
}

#[tokio::test]
async fn test_create_faculty_with_spanish_key() {
    let app = TestApp::new();

    let (status, body) = app
        .post("/api/faculties", json!({ "nombre": "Medicina" }))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Medicina");
    assert!(body["director"].is_null());
}

#[tokio::test]
async fn test_create_faculty_duplicate_name() {
    let app = TestApp::new();
    create_faculty(&app, "Engineering").await;

    let (status, body) = app
        .post("/api/faculties", json!({ "name": "Engineering" }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "A faculty with this name already exists");
    assert_eq!(app.faculties.len(), 1);
}

#[tokio::test]
async fn test_create_faculty_body_errors() {
    let app = TestApp::new();

    let (status, body) = app.post("/api/faculties", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "name is required");

    let (status, _) = app.post("/api/faculties", json!({ "name": 42 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.post("/api/faculties", json!({ "name": "" })).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = app
        .post("/api/faculties", json!({ "name": "x".repeat(256) }))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    assert_eq!(app.faculties.calls().create(), 0);
}

#[tokio::test]
async fn test_get_faculty() {
    let app = TestApp::new();
    let created = create_faculty(&app, "Engineering").await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = app.get(&format!("/api/faculties/{}", id)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id);
    assert_eq!(body["name"], "Engineering");
    assert!(body["programs"].is_array());
}

#[tokio::test]
async fn test_get_faculty_not_found() {
    let app = TestApp::new();

    let (status, body) = app
        .get("/api/faculties/00000000-0000-0000-0000-000000000001")
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Faculty not found");
}

#[tokio::test]
async fn test_get_faculty_invalid_id() {
    let app = TestApp::new();

    let (status, _) = app.get("/api/faculties/not-a-uuid").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(app.faculties.calls().get(), 0);
}

#[tokio::test]
async fn test_list_faculties_pagination() {
    let app = TestApp::new();
    for i in 0..7 {
        create_faculty(&app, &format!("Faculty {}", i)).await;
    }

    let (status, body) = app.get("/api/faculties").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 5);
    assert_eq!(body["meta"]["total"], 7);
    assert_eq!(body["meta"]["limit"], 5);
    assert_eq!(body["meta"]["has_more"], true);

    let (_, body) = app.get("/api/faculties?desde=5&hasta=5").await;
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["name"], "Faculty 5");
    assert_eq!(body["meta"]["offset"], 5);
    assert_eq!(body["meta"]["has_more"], false);

    let (_, body) = app.get("/api/faculties?limit=3&page=2").await;
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 3);
    assert_eq!(data[0]["name"], "Faculty 3");
    assert_eq!(body["meta"]["page"], 2);
}

#[tokio::test]
async fn test_list_faculties_rejects_non_numeric_limit() {
    let app = TestApp::new();

    let (status, _) = app.get("/api/faculties?limit=ten").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(app.faculties.calls().list(), 0);
}

#[tokio::test]
async fn test_update_faculty() {
    let app = TestApp::new();
    let created = create_faculty(&app, "Engineering").await;
    let uri = format!("/api/faculties/{}", created["id"].as_str().unwrap());

    let (status, body) = app.put(&uri, json!({ "director": "Dr. Ruiz" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Faculty updated successfully");

    let (_, body) = app.get(&uri).await;
    assert_eq!(body["name"], "Engineering");
    assert_eq!(body["director"], "Dr. Ruiz");
}

#[tokio::test]
async fn test_update_faculty_to_taken_name() {
    let app = TestApp::new();
    create_faculty(&app, "Engineering").await;
    let other = create_faculty(&app, "Medicine").await;
    let uri = format!("/api/faculties/{}", other["id"].as_str().unwrap());

    let (status, _) = app.put(&uri, json!({ "name": "Engineering" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = app.get(&uri).await;
    assert_eq!(body["name"], "Medicine");
}

#[tokio::test]
async fn test_update_faculty_not_found() {
    let app = TestApp::new();

    let (status, _) = app
        .put(
            "/api/faculties/00000000-0000-0000-0000-000000000001",
            json!({ "name": "Ghost" }),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_faculty_twice() {
    let app = TestApp::new();
    let created = create_faculty(&app, "Engineering").await;
    let uri = format!("/api/faculties/{}", created["id"].as_str().unwrap());

    let (status, body) = app.delete(&uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Faculty deleted successfully");
    assert!(app.faculties.is_empty());

    let (status, _) = app.delete(&uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.get(&uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_faculties_with_max_offset_and_page() {
    let app = TestApp::new();
    create_faculty(&app, "Engineering").await;

    let (status, body) = app.get("/api/faculties?offset=9223372036854775807").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].as_array().unwrap().is_empty());
    assert_eq!(body["meta"]["offset"], i64::MAX);
    assert_eq!(body["meta"]["total"], 1);
    assert_eq!(body["meta"]["has_more"], false);

    let (status, body) = app
        .get("/api/faculties?page=9223372036854775807&limit=100")
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].as_array().unwrap().is_empty());
    assert_eq!(body["meta"]["offset"], i64::MAX);
    assert_eq!(body["meta"]["has_more"], false);
}
