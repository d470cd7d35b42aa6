//! HTTP handlers for users, courses, and unmatched routes.

pub mod courses;
pub mod users;

use crate::response::message_body;
use axum::{http::StatusCode, response::IntoResponse, Json};

/// Fallback for any path no route matches.
pub async fn route_not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(message_body("Route Not Found")))
}
