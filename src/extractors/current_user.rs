//! Extract the authenticated user from the `Authorization` header.

use crate::auth::authenticate;
use crate::error::AppError;
use crate::models::Identity;
use crate::state::AppState;
use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

/// Extractor that runs credential verification. Handlers taking it reject
/// unauthenticated requests with 401 before their body runs.
#[derive(Clone, Debug)]
pub struct CurrentUser(pub Identity);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok());
        let identity = authenticate(&state.pool, header).await?;
        Ok(CurrentUser(identity))
    }
}
