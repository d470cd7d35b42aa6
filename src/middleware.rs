//! Opt-in logging of server errors.

use crate::error::ErrorReport;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

/// Log every 5xx response with its cause when `ENABLE_GLOBAL_ERROR_LOGGING` is set.
pub async fn report_errors(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let response = next.run(req).await;
    if state.log_errors && response.status().is_server_error() {
        let cause = response
            .extensions()
            .get::<ErrorReport>()
            .map(|r| r.0.as_str())
            .unwrap_or("unknown");
        tracing::error!(%method, %uri, status = %response.status(), "global error handler: {}", cause);
    }
    response
}
