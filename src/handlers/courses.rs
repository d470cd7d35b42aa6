//! Course handlers: public reads, owner-only writes.

use crate::auth::require_owner;
use crate::error::AppError;
use crate::extractors::{CurrentUser, JsonBody};
use crate::response::located;
use crate::service::{CourseService, RequestValidator};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// Ids that do not parse cannot match a row, so they read as not found.
fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str.parse().map_err(|_| AppError::NotFound("Course".into()))
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let courses = CourseService::list_with_owners(&state.pool).await?;
    Ok((StatusCode::OK, Json(courses)))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let course = CourseService::read_with_owner(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Course".into()))?;
    Ok((StatusCode::OK, Json(course)))
}

pub async fn create(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let course = RequestValidator::new_course(body)?;
    let id = CourseService::create(&state.pool, identity.id, &course).await?;
    tracing::info!(course_id = id, owner_id = identity.id, "course created");
    Ok(located(StatusCode::CREATED, &format!("/courses/{}", id)))
}

pub async fn update(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    Path(id_str): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let changes = RequestValidator::course_changes(body)?;
    let id = parse_id(&id_str)?;
    let mut course = CourseService::find(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Course".into()))?;
    require_owner(&identity, &course)?;
    changes.apply(&mut course);
    CourseService::update(&state.pool, &course).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let course = CourseService::find(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Course".into()))?;
    require_owner(&identity, &course)?;
    CourseService::delete(&state.pool, course.id, identity.id).await?;
    tracing::info!(course_id = course.id, "course deleted");
    Ok(StatusCode::NO_CONTENT)
}
