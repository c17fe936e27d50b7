//! Runs the router against Postgres. Needs `DATABASE_URL`:
//! `cargo test --test integration_postgres -- --ignored`

mod common;

use academia::academia_config::CorsConfig;
use academia::router::init_router;
use academia::state::AppState;
use axum::Router;
use axum::http::StatusCode;
use common::{authed, test_signer};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::PgPool;
use tower::ServiceExt;

struct PgApp {
    router: Router,
    token: String,
}

impl PgApp {
    fn new(pool: PgPool) -> Self {
        let signer = test_signer();
        let token = signer
            .issue(academia::academia_auth::Identity::new("Ana", "ana@example.com"))
            .unwrap();
        Self {
            router: init_router(AppState::postgres(pool, signer, CorsConfig::default())),
            token,
        }
    }

    async fn call(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(authed(method, uri, &self.token, body))
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    async fn create(&self, uri: &str, body: Value) -> String {
        let (status, body) = self.call("POST", uri, Some(body)).await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["id"].as_str().unwrap().to_string()
    }
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_relations_are_embedded(pool: PgPool) {
    let app = PgApp::new(pool);

    let faculty_id = app
        .create("/api/faculties", json!({ "name": "Engineering", "director": "Dra. Pérez" }))
        .await;
    let program_id = app
        .create("/api/programs", json!({ "name": "Systems", "faculty_id": faculty_id }))
        .await;
    let subject_id = app
        .create("/api/subjects", json!({ "name": "Algebra", "program_id": program_id }))
        .await;
    app.create(
        "/api/professors",
        json!({ "first_name": "Ana", "last_name": "García", "subject_id": subject_id }),
    )
    .await;

    let (_, faculty) = app
        .call("GET", &format!("/api/faculties/{}", faculty_id), None)
        .await;
    assert_eq!(faculty["programs"][0]["name"], "Systems");

    let (_, program) = app
        .call("GET", &format!("/api/programs/{}", program_id), None)
        .await;
    assert_eq!(program["faculty"]["name"], "Engineering");
    assert_eq!(program["subjects"][0]["name"], "Algebra");

    let (_, subject) = app
        .call("GET", &format!("/api/subjects/{}", subject_id), None)
        .await;
    assert_eq!(subject["program"]["name"], "Systems");
    assert_eq!(subject["professors"][0]["last_name"], "García");

    let (_, page) = app.call("GET", "/api/professors", None).await;
    assert_eq!(page["data"][0]["subject"]["name"], "Algebra");
    assert_eq!(page["meta"]["total"], 1);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_deleting_parent_detaches_children(pool: PgPool) {
    let app = PgApp::new(pool);

    let faculty_id = app.create("/api/faculties", json!({ "name": "Law" })).await;
    let program_id = app
        .create("/api/programs", json!({ "name": "Civil Law", "faculty_id": faculty_id }))
        .await;

    let (status, _) = app
        .call("DELETE", &format!("/api/faculties/{}", faculty_id), None)
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, program) = app
        .call("GET", &format!("/api/programs/{}", program_id), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(program["faculty_id"].is_null());
    assert!(program["faculty"].is_null());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_constraint_violations_are_400(pool: PgPool) {
    let app = PgApp::new(pool);
    app.create("/api/faculties", json!({ "name": "Medicine" })).await;

    let (status, body) = app
        .call("POST", "/api/faculties", Some(json!({ "name": "Medicine" })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "A faculty with this name already exists");

    let (status, body) = app
        .call(
            "POST",
            "/api/programs",
            Some(json!({
                "name": "Orphan",
                "faculty_id": "00000000-0000-0000-0000-000000000009"
            })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Referenced faculty does not exist");

    let (_, page) = app.call("GET", "/api/programs", None).await;
    assert_eq!(page["meta"]["total"], 0);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_update_and_delete_missing_rows_are_404(pool: PgPool) {
    let app = PgApp::new(pool);
    let uri = "/api/subjects/00000000-0000-0000-0000-000000000003";

    let (status, _) = app.call("PUT", uri, Some(json!({ "name": "Ghost" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.call("DELETE", uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
