//! Shared application state for all routes.

use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    /// bcrypt work factor for newly hashed passwords.
    pub bcrypt_cost: u32,
    pub log_errors: bool,
}
