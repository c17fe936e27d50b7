#![allow(dead_code)]

use std::sync::Arc;

use academia::academia_auth::{Identity, TokenSigner};
use academia::academia_config::{CorsConfig, TokenConfig};
use academia::academia_models::{Faculty, Professor, Program, Subject};
use academia::repository::memory::MemoryRepository;
use academia::router::init_router;
use academia::state::AppState;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "test-signing-secret";
pub const TEST_TTL_SECONDS: i64 = 120;

/// Router backed by in-memory repositories, with handles to each store.
pub struct TestApp {
    pub router: Router,
    pub signer: TokenSigner,
    pub faculties: Arc<MemoryRepository<Faculty>>,
    pub programs: Arc<MemoryRepository<Program>>,
    pub subjects: Arc<MemoryRepository<Subject>>,
    pub professors: Arc<MemoryRepository<Professor>>,
}

impl TestApp {
    pub fn new() -> Self {
        let signer = test_signer();
        let faculties = Arc::new(MemoryRepository::new());
        let programs = Arc::new(MemoryRepository::new());
        let subjects = Arc::new(MemoryRepository::new());
        let professors = Arc::new(MemoryRepository::new());

        let state = AppState {
            faculties: faculties.clone(),
            programs: programs.clone(),
            subjects: subjects.clone(),
            professors: professors.clone(),
            tokens: Arc::new(signer.clone()),
            cors_config: CorsConfig::default(),
            metrics: None,
        };

        Self {
            router: init_router(state),
            signer,
            faculties,
            programs,
            subjects,
            professors,
        }
    }

    pub fn token(&self) -> String {
        self.signer
            .issue(Identity::new("Test User", "test@example.com"))
            .unwrap()
    }

    /// Total repository calls across every store.
    pub fn storage_calls(&self) -> usize {
        self.faculties.calls().total()
            + self.programs.calls().total()
            + self.subjects.calls().total()
            + self.professors.calls().total()
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(authed("GET", uri, &self.token(), None)).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(authed("POST", uri, &self.token(), Some(body)))
            .await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(authed("PUT", uri, &self.token(), Some(body)))
            .await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(authed("DELETE", uri, &self.token(), None)).await
    }
}

pub fn test_signer() -> TokenSigner {
    TokenSigner::new(&TokenConfig::new(TEST_SECRET, TEST_TTL_SECONDS)).unwrap()
}

/// Request with an optional raw `Authorization` header and optional JSON body.
pub fn request(
    method: &str,
    uri: &str,
    authorization: Option<&str>,
    body: Option<Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(value) = authorization {
        builder = builder.header("authorization", value);
    }
    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub fn authed(method: &str, uri: &str, token: &str, body: Option<Value>) -> Request<Body> {
    request(method, uri, Some(&format!("Bearer {}", token)), body)
}

pub fn generate_unique_name(prefix: &str) -> String {
    format!("{} {}", prefix, uuid::Uuid::new_v4())
}
