//! User and course routes, mounted under `/api`.

use crate::handlers::{courses, route_not_found, users};
use crate::state::AppState;
use axum::{routing::get, Router};

/// Unsupported methods on a known path answer like an unknown path.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/users",
            get(users::current_user).post(users::register).fallback(route_not_found),
        )
        .route(
            "/courses",
            get(courses::list).post(courses::create).fallback(route_not_found),
        )
        .route(
            "/courses/:id",
            get(courses::read)
                .put(courses::update)
                .delete(courses::delete)
                .fallback(route_not_found),
        )
        .with_state(state)
}
