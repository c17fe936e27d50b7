//! # Academia DB
//!
//! PostgreSQL connection pool for the Academia API.
//!
//! # Example
//!
//! ```ignore
//! use academia_config::DatabaseConfig;
//! use academia_db::init_db_pool;
//!
//! let pool = init_db_pool(&DatabaseConfig::from_env()?).await?;
//! ```

use academia_config::DatabaseConfig;
use sqlx::postgres::PgPoolOptions;

/// Connects a pool sized by `config.max_connections`.
///
/// Called once at startup; the pool is cheap to clone and is shared by every
/// repository.
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await?;

    tracing::info!(
        max_connections = config.max_connections,
        "Database pool initialized"
    );

    Ok(pool)
}

pub use sqlx::PgPool;
