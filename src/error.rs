//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sqlx::error::ErrorKind;
use thiserror::Error;

use crate::response::{errors_body, message_body, unexpected_body};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {name}: '{value}'")]
    InvalidValue { name: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
    /// Carries the server-side reason; clients only ever see "Access Denied".
    #[error("unauthenticated: {0}")]
    Unauthenticated(String),
    #[error("forbidden")]
    Forbidden,
    #[error("{0} Not Found")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    /// The body could not be read at all (too large, aborted).
    #[error("{1}")]
    BodyRejected(StatusCode, String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("password hashing: {0}")]
    Hash(#[from] bcrypt::BcryptError),
    #[error("internal: {0}")]
    Internal(String),
}

/// Attached to 5xx responses so the error-reporting middleware can log the cause.
#[derive(Clone, Debug)]
pub struct ErrorReport(pub String);

/// Constraint failures raised by the database itself are client errors, not server faults.
fn constraint_message(e: &sqlx::Error) -> Option<String> {
    let sqlx::Error::Database(db) = e else {
        return None;
    };
    match db.kind() {
        ErrorKind::UniqueViolation
        | ErrorKind::ForeignKeyViolation
        | ErrorKind::NotNullViolation
        | ErrorKind::CheckViolation => Some(db.message().to_string()),
        _ => None,
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Db(e) if constraint_message(e).is_some() => StatusCode::BAD_REQUEST,
            AppError::BodyRejected(status, _) => *status,
            AppError::Db(_) | AppError::Hash(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            AppError::Validation(errors) => errors_body(errors),
            AppError::Unauthenticated(reason) => {
                tracing::warn!("{}", reason);
                message_body("Access Denied")
            }
            AppError::Forbidden => message_body("Access Denied"),
            AppError::NotFound(_) | AppError::BadRequest(_) | AppError::BodyRejected(..) => {
                message_body(&self.to_string())
            }
            AppError::Db(e) => match constraint_message(e) {
                Some(message) => errors_body(&[message]),
                None => unexpected_body("Internal Server Error"),
            },
            AppError::Hash(_) | AppError::Internal(_) => unexpected_body("Internal Server Error"),
        };
        let mut response = (status, Json(body)).into_response();
        if status.is_server_error() {
            response.extensions_mut().insert(ErrorReport(self.to_string()));
        }
        response
    }
}
