//! Credential verification against stored bcrypt hashes, and the ownership gate.

mod authorize;
mod basic;

pub use authorize::{authorize, require_owner, Decision};
pub use basic::{parse_basic, Credentials};

use crate::error::AppError;
use crate::models::Identity;
use crate::service::UserService;
use sqlx::SqlitePool;

/// Verify an `Authorization` header value and return the matching identity.
///
/// Each failure carries a distinct reason for the server log; the HTTP layer
/// collapses all of them into the same 401 body.
pub async fn authenticate(pool: &SqlitePool, header: Option<&str>) -> Result<Identity, AppError> {
    let credentials = header
        .and_then(parse_basic)
        .ok_or_else(|| AppError::Unauthenticated("Auth header not found".into()))?;

    let user = UserService::find_by_email(pool, &credentials.name)
        .await?
        .ok_or_else(|| {
            AppError::Unauthenticated(format!("User not found for username: {}", credentials.name))
        })?;

    if !verify_password(credentials.secret, user.password.clone()).await? {
        return Err(AppError::Unauthenticated(format!(
            "Authentication failure for username: {}",
            user.email_address
        )));
    }

    tracing::debug!(user_id = user.id, "authentication successful");
    Ok(Identity::from(user))
}

/// Salted bcrypt hash, computed off the async executor.
pub async fn hash_password(password: String, cost: u32) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
        .map_err(AppError::from)
}

pub async fn verify_password(password: String, hash: String) -> Result<bool, AppError> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
        .map_err(AppError::from)
}
