mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::{Value, json};

async fn create_program(app: &TestApp, body: Value) -> Value {
    let (status, body) = app.post("/api/programs", body).await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

#[tokio::test]
async fn test_create_program_with_faculty() {
    let app = TestApp::new();
    let faculty_id = "6f1c2a3b-4d5e-4f60-8a7b-9c0d1e2f3a4b";

    let body = create_program(
        &app,
        json!({ "nombre": "Ingeniería en Sistemas", "id_facultad": faculty_id }),
    )
    .await;

    assert_eq!(body["name"], "Ingeniería en Sistemas");
    assert_eq!(body["faculty_id"], faculty_id);
    assert_eq!(app.programs.len(), 1);
}

#[tokio::test]
async fn test_create_program_without_faculty() {
    let app = TestApp::new();

    let body = create_program(&app, json!({ "name": "Undeclared" })).await;

    assert!(body["faculty_id"].is_null());
}

#[tokio::test]
async fn test_create_program_invalid_faculty_id() {
    let app = TestApp::new();

    let (status, _) = app
        .post(
            "/api/programs",
            json!({ "name": "Law", "faculty_id": "nope" }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(app.programs.is_empty());
}

#[tokio::test]
async fn test_create_program_duplicate_name() {
    let app = TestApp::new();
    create_program(&app, json!({ "name": "Law" })).await;

    let (status, body) = app.post("/api/programs", json!({ "name": "Law" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "A program with this name already exists");
    assert_eq!(app.programs.len(), 1);
}

#[tokio::test]
async fn test_get_program_detail_shape() {
    let app = TestApp::new();
    let created = create_program(&app, json!({ "name": "Law" })).await;

    let (status, body) = app
        .get(&format!("/api/programs/{}", created["id"].as_str().unwrap()))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Law");
    assert!(body["subjects"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_list_programs_default_page() {
    let app = TestApp::new();
    for i in 0..6 {
        create_program(&app, json!({ "name": format!("Program {}", i) })).await;
    }

    let (status, body) = app.get("/api/programs").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 5);
    assert_eq!(body["meta"]["total"], 6);
}

#[tokio::test]
async fn test_update_program_keeps_omitted_fields() {
    let app = TestApp::new();
    let faculty_id = "6f1c2a3b-4d5e-4f60-8a7b-9c0d1e2f3a4b";
    let created = create_program(&app, json!({ "name": "Law", "faculty_id": faculty_id })).await;
    let uri = format!("/api/programs/{}", created["id"].as_str().unwrap());

    let (status, body) = app.put(&uri, json!({ "name": "Civil Law" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Program updated successfully");

    let (_, body) = app.get(&uri).await;
    assert_eq!(body["name"], "Civil Law");
    assert_eq!(body["faculty_id"], faculty_id);
}

#[tokio::test]
async fn test_update_program_validation() {
    let app = TestApp::new();
    let created = create_program(&app, json!({ "name": "Law" })).await;
    let uri = format!("/api/programs/{}", created["id"].as_str().unwrap());

    let (status, _) = app.put(&uri, json!({ "name": "" })).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(app.programs.calls().update(), 0);
}

#[tokio::test]
async fn test_delete_program() {
    let app = TestApp::new();
    let created = create_program(&app, json!({ "name": "Law" })).await;
    let uri = format!("/api/programs/{}", created["id"].as_str().unwrap());

    let (status, body) = app.delete(&uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Program deleted successfully");

    let (status, body) = app.delete(&uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Program not found");
}
