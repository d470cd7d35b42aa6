//! Server: reads config from the environment, prepares the SQLite tables, and serves the API.

use course_catalog_api::{build_app, connect, ensure_tables, AppState, ServerConfig};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("course_catalog_api=info,tower_http=info")),
        )
        .init();

    let pool = connect(&config.database_url).await?;
    ensure_tables(&pool).await?;
    tracing::info!("connection to the database successful");

    let state = AppState {
        pool,
        bcrypt_cost: config.bcrypt_cost,
        log_errors: config.log_errors,
    };
    let app = build_app(state, config.max_body_bytes);

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
