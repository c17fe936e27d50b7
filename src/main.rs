use academia::academia_auth::TokenSigner;
use academia::academia_config::{CorsConfig, DatabaseConfig, ServerConfig, TokenConfig};
use academia::academia_db::init_db_pool;
use academia::logging::{init_tracing, shutdown_tracer};
use academia::metrics::init_metrics;
use academia::router::init_router;
use academia::state::AppState;
use dotenvy::dotenv;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    init_tracing()?;

    let token_config = TokenConfig::from_env()?;
    let tokens = TokenSigner::new(&token_config)?;
    let server_config = ServerConfig::from_env()?;

    let db = init_db_pool(&DatabaseConfig::from_env()?).await?;
    sqlx::migrate!().run(&db).await?;

    let state = AppState::postgres(db, tokens, CorsConfig::from_env()).with_metrics(init_metrics()?);
    let app = init_router(state);

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!(address = %server_config.address(), "Server running");
    info!("Swagger UI available at /swagger-ui, Scalar UI at /scalar");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    shutdown_tracer().await;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    info!("Shutdown signal received");
}
