//! Router assembly.

mod api;
mod common;

pub use api::api_routes;
pub use common::common_routes;

use crate::handlers::route_not_found;
use crate::middleware::report_errors;
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, middleware::from_fn_with_state, Router};
use tower_http::trace::TraceLayer;

/// The full application: common routes, `/api`, a JSON 404 fallback, and the error/trace layers.
/// The body limit is enforced by the body extractor so oversized requests still get a JSON 413.
pub fn build_app(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .nest("/api", api_routes(state.clone()))
        .fallback(route_not_found)
        .layer(from_fn_with_state(state, report_errors))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
}
