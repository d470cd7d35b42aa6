//! SQLite pool setup and table DDL for users and courses.

use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

const USERS_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        first_name TEXT NOT NULL CHECK (length(trim(first_name)) > 0),
        last_name TEXT NOT NULL CHECK (length(trim(last_name)) > 0),
        email_address TEXT NOT NULL UNIQUE CHECK (length(trim(email_address)) > 0),
        password TEXT NOT NULL CHECK (length(password) > 0),
        created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
        updated_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
"#;

const COURSES_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS courses (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL CHECK (length(trim(title)) > 0),
        description TEXT NOT NULL CHECK (length(trim(description)) > 0),
        estimated_time TEXT,
        materials_needed TEXT,
        owner_id INTEGER NOT NULL REFERENCES users (id) ON DELETE CASCADE,
        created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
        updated_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
"#;

const COURSES_OWNER_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS courses_owner_id_idx ON courses (owner_id)";

/// Open a pool for `database_url`, creating the file if missing. Foreign keys are enforced.
/// An in-memory database lives only as long as its connection, so it gets exactly one that never expires.
pub async fn connect(database_url: &str) -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool_opts = if database_url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(5)
    };
    Ok(pool_opts.connect_with(opts).await?)
}

/// Create the users and courses tables if they do not exist yet.
pub async fn ensure_tables(pool: &SqlitePool) -> Result<(), AppError> {
    for ddl in [USERS_DDL, COURSES_DDL, COURSES_OWNER_INDEX] {
        sqlx::query(ddl).execute(pool).await?;
    }
    tracing::debug!("tables ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ensure_tables_is_idempotent() {
        let pool = connect("sqlite::memory:").await.unwrap();
        ensure_tables(&pool).await.unwrap();
        ensure_tables(&pool).await.unwrap();
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN ('users', 'courses')",
        )
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(count, 2);
    }

    #[tokio::test]
    async fn blank_titles_violate_check_constraint() {
        let pool = connect("sqlite::memory:").await.unwrap();
        ensure_tables(&pool).await.unwrap();
        sqlx::query("INSERT INTO users (first_name, last_name, email_address, password) VALUES ('a', 'b', 'c@d.e', 'h')")
            .execute(&pool)
            .await
            .unwrap();
        let err = sqlx::query("INSERT INTO courses (title, description, owner_id) VALUES ('  ', 'd', 1)")
            .execute(&pool)
            .await
            .unwrap_err();
        assert_eq!(AppError::Db(err).status(), axum::http::StatusCode::BAD_REQUEST);
    }
}
