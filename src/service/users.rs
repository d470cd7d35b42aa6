//! User persistence: lookups by email or id, and idempotent create keyed on email.

use crate::error::AppError;
use crate::models::{NewUser, UserRecord, UserView};
use sqlx::SqlitePool;

/// Outcome of [`UserService::create`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CreateOutcome {
    Created(i64),
    AlreadyExists,
}

pub struct UserService;

impl UserService {
    /// Full row including the password hash, for credential checks only.
    pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<UserRecord>, AppError> {
        let row = sqlx::query_as::<_, UserRecord>(
            "SELECT id, first_name, last_name, email_address, password FROM users WHERE email_address = ?",
        )
        .bind(email)
        .fetch_optional(pool)
        .await?;
        Ok(row)
    }

    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<UserView>, AppError> {
        let row = sqlx::query_as::<_, UserView>(
            "SELECT id, first_name, last_name, email_address FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(row)
    }

    pub async fn exists_with_email(pool: &SqlitePool, email: &str) -> Result<bool, AppError> {
        let row: Option<(i64,)> = sqlx::query_as("SELECT id FROM users WHERE email_address = ?")
            .bind(email)
            .fetch_optional(pool)
            .await?;
        Ok(row.is_some())
    }

    /// Insert a user whose password is already hashed. A concurrent insert of the same
    /// email resolves to `AlreadyExists` rather than a constraint error.
    pub async fn create(
        pool: &SqlitePool,
        user: &NewUser,
        password_hash: &str,
    ) -> Result<CreateOutcome, AppError> {
        let row: Option<(i64,)> = sqlx::query_as(
            "INSERT INTO users (first_name, last_name, email_address, password) VALUES (?, ?, ?, ?) \
             ON CONFLICT (email_address) DO NOTHING RETURNING id",
        )
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email_address)
        .bind(password_hash)
        .fetch_optional(pool)
        .await?;
        Ok(match row {
            Some((id,)) => CreateOutcome::Created(id),
            None => CreateOutcome::AlreadyExists,
        })
    }
}
