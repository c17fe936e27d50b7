use std::sync::Arc;

use academia_auth::TokenSigner;
use academia_config::CorsConfig;
use academia_models::{Faculty, Professor, Program, Subject};
use metrics_exporter_prometheus::PrometheusHandle;
use sqlx::PgPool;

use crate::modules::faculties::repository::PgFacultyRepository;
use crate::modules::professors::repository::PgProfessorRepository;
use crate::modules::programs::repository::PgProgramRepository;
use crate::modules::subjects::repository::PgSubjectRepository;
use crate::repository::CrudRepository;

/// Shared by every handler and the auth middleware. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub faculties: Arc<dyn CrudRepository<Faculty>>,
    pub programs: Arc<dyn CrudRepository<Program>>,
    pub subjects: Arc<dyn CrudRepository<Subject>>,
    pub professors: Arc<dyn CrudRepository<Professor>>,
    pub tokens: Arc<TokenSigner>,
    pub cors_config: CorsConfig,
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// State backed by the Postgres repositories.
    pub fn postgres(db: PgPool, tokens: TokenSigner, cors_config: CorsConfig) -> Self {
        Self {
            faculties: Arc::new(PgFacultyRepository::new(db.clone())),
            programs: Arc::new(PgProgramRepository::new(db.clone())),
            subjects: Arc::new(PgSubjectRepository::new(db.clone())),
            professors: Arc::new(PgProfessorRepository::new(db)),
            tokens: Arc::new(tokens),
            cors_config,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Option<PrometheusHandle>) -> Self {
        self.metrics = metrics;
        self
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("tokens", &self.tokens)
            .field("cors_config", &self.cors_config)
            .field("metrics", &self.metrics.is_some())
            .finish_non_exhaustive()
    }
}
