//! User handlers: current user lookup and registration.

use crate::auth::hash_password;
use crate::error::AppError;
use crate::extractors::{CurrentUser, JsonBody};
use crate::response::located;
use crate::service::{CreateOutcome, RequestValidator, UserService};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

/// GET /api/users — the authenticated user, without password or timestamps.
pub async fn current_user(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::find_by_id(&state.pool, identity.id)
        .await?
        .ok_or_else(|| AppError::NotFound("User".into()))?;
    Ok((StatusCode::OK, Json(user)))
}

/// POST /api/users — 201 on create, 200 when the email is already registered. Both set `Location: /`.
pub async fn register(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let user = RequestValidator::new_user(body)?;

    if UserService::exists_with_email(&state.pool, &user.email_address).await? {
        tracing::info!("an account already exists with the email address {}", user.email_address);
        return Ok(located(StatusCode::OK, "/"));
    }

    let hash = hash_password(user.password.clone(), state.bcrypt_cost).await?;
    match UserService::create(&state.pool, &user, &hash).await? {
        CreateOutcome::Created(id) => {
            tracing::info!(user_id = id, "new user created");
            Ok(located(StatusCode::CREATED, "/"))
        }
        CreateOutcome::AlreadyExists => {
            tracing::info!("an account already exists with the email address {}", user.email_address);
            Ok(located(StatusCode::OK, "/"))
        }
    }
}
