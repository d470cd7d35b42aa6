//! Liveness, readiness and version routes, outside `/api`.

use crate::handlers::route_not_found;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// 200 when the pool answers `SELECT 1`, 503 otherwise.
async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => (StatusCode::OK, Json(json!({ "status": "ok", "database": "ok" }))),
        Err(e) => {
            tracing::warn!("readiness check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "degraded", "database": "unavailable" })),
            )
        }
    }
}

async fn version() -> impl IntoResponse {
    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health).fallback(route_not_found))
        .route("/ready", get(ready).fallback(route_not_found))
        .route("/version", get(version).fallback(route_not_found))
        .with_state(state)
}
