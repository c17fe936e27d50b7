mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::{Value, json};

async fn create_professor(app: &TestApp, body: Value) -> Value {
    let (status, body) = app.post("/api/professors", body).await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

#[tokio::test]
async fn test_create_professor_with_spanish_keys() {
    let app = TestApp::new();
    let subject_id = "9e8d7c6b-5a4f-4e3d-8c2b-1a0f9e8d7c6b";

    let body = create_professor(
        &app,
        json!({ "nombre": "Ana", "apellido": "García", "id_materia": subject_id }),
    )
    .await;

    assert_eq!(body["first_name"], "Ana");
    assert_eq!(body["last_name"], "García");
    assert_eq!(body["subject_id"], subject_id);
}

#[tokio::test]
async fn test_professor_names_need_not_be_unique() {
    let app = TestApp::new();
    let professor = json!({ "first_name": "Ana", "last_name": "García" });

    create_professor(&app, professor.clone()).await;
    create_professor(&app, professor).await;

    assert_eq!(app.professors.len(), 2);
}

#[tokio::test]
async fn test_create_professor_validation() {
    let app = TestApp::new();

    let (status, body) = app
        .post("/api/professors", json!({ "first_name": "Ana" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "last_name is required");

    let (status, _) = app
        .post(
            "/api/professors",
            json!({ "first_name": "Ana", "last_name": "x".repeat(101) }),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    assert!(app.professors.is_empty());
}

#[tokio::test]
async fn test_get_professor_detail_shape() {
    let app = TestApp::new();
    let created = create_professor(&app, json!({ "first_name": "Ana", "last_name": "García" })).await;

    let (status, body) = app
        .get(&format!("/api/professors/{}", created["id"].as_str().unwrap()))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["first_name"], "Ana");
    assert!(body["subject"].is_null());
}

#[tokio::test]
async fn test_list_professors_limit_is_clamped() {
    let app = TestApp::new();
    for i in 0..3 {
        create_professor(
            &app,
            json!({ "first_name": format!("Name{}", i), "last_name": "Test" }),
        )
        .await;
    }

    let (_, body) = app.get("/api/professors?hasta=0").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["meta"]["limit"], 1);

    let (_, body) = app.get("/api/professors?limit=1000").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
    assert_eq!(body["meta"]["limit"], 100);
}

#[tokio::test]
async fn test_update_professor() {
    let app = TestApp::new();
    let created = create_professor(&app, json!({ "first_name": "Ana", "last_name": "García" })).await;
    let uri = format!("/api/professors/{}", created["id"].as_str().unwrap());

    let (status, body) = app.put(&uri, json!({ "apellido": "López" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Professor updated successfully");

    let (_, body) = app.get(&uri).await;
    assert_eq!(body["first_name"], "Ana");
    assert_eq!(body["last_name"], "López");
}

#[tokio::test]
async fn test_delete_professor_twice() {
    let app = TestApp::new();
    let created = create_professor(&app, json!({ "first_name": "Ana", "last_name": "García" })).await;
    let uri = format!("/api/professors/{}", created["id"].as_str().unwrap());

    let (status, _) = app.delete(&uri).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app.delete(&uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Professor not found");
    assert_eq!(app.professors.calls().delete(), 2);
}
