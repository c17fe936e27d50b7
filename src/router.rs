use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::metrics::{metrics_app, metrics_middleware};
use crate::middleware::auth::require_token;
use crate::modules::auth::init_auth_router;
use crate::modules::faculties::init_faculties_router;
use crate::modules::professors::init_professors_router;
use crate::modules::programs::init_programs_router;
use crate::modules::subjects::init_subjects_router;
use crate::state::AppState;
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::{Json, Router, middleware};
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

fn cors_layer(state: &AppState) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = state
        .cors_config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ])
}

/// Builds the application router.
///
/// Every entity router is wrapped in [`require_token`]; `/api/auth/login`,
/// `/health`, `/metrics` and the documentation UIs are public.
pub fn init_router(state: AppState) -> Router {
    let metrics_handle = state.metrics.clone();

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .route("/health", get(health))
        .nest(
            "/api",
            Router::new()
                .nest("/auth", init_auth_router())
                .nest(
                    "/faculties",
                    init_faculties_router()
                        .route_layer(middleware::from_fn_with_state(state.clone(), require_token)),
                )
                .nest(
                    "/programs",
                    init_programs_router()
                        .route_layer(middleware::from_fn_with_state(state.clone(), require_token)),
                )
                .nest(
                    "/subjects",
                    init_subjects_router()
                        .route_layer(middleware::from_fn_with_state(state.clone(), require_token)),
                )
                .nest(
                    "/professors",
                    init_professors_router()
                        .route_layer(middleware::from_fn_with_state(state.clone(), require_token)),
                ),
        )
        .with_state(state.clone());

    let router = match metrics_handle {
        Some(handle) => router.merge(metrics_app(handle)),
        None => router,
    };

    router
        .layer(cors_layer(&state))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
}
