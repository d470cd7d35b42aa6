//! Server configuration read from the environment (and `.env` when present).

use crate::error::ConfigError;
use std::collections::HashMap;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_DATABASE_URL: &str = "sqlite://fsjstd-restapi.db";
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;
/// bcrypt accepts work factors in this range only.
pub const MIN_BCRYPT_COST: u32 = 4;
pub const MAX_BCRYPT_COST: u32 = 31;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub database_url: String,
    /// `ENABLE_GLOBAL_ERROR_LOGGING=true` logs every 5xx response with its cause.
    pub log_errors: bool,
    pub bcrypt_cost: u32,
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            port: DEFAULT_PORT,
            database_url: DEFAULT_DATABASE_URL.into(),
            log_errors: false,
            bcrypt_cost: bcrypt::DEFAULT_COST,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl ServerConfig {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_vars(&std::env::vars().collect())
    }

    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let defaults = ServerConfig::default();
        let get = |name: &str| vars.get(name).map(|s| s.trim()).filter(|s| !s.is_empty());

        let port = match get("PORT") {
            Some(v) => parse_value("PORT", v)?,
            None => defaults.port,
        };
        let bcrypt_cost = match get("BCRYPT_COST") {
            Some(v) => parse_value::<u32>("BCRYPT_COST", v)?.clamp(MIN_BCRYPT_COST, MAX_BCRYPT_COST),
            None => defaults.bcrypt_cost,
        };
        let max_body_bytes = match get("MAX_BODY_BYTES") {
            Some(v) => parse_value("MAX_BODY_BYTES", v)?,
            None => defaults.max_body_bytes,
        };

        Ok(ServerConfig {
            port,
            database_url: get("DATABASE_URL").map(str::to_string).unwrap_or(defaults.database_url),
            log_errors: get("ENABLE_GLOBAL_ERROR_LOGGING").is_some_and(|v| v.eq_ignore_ascii_case("true")),
            bcrypt_cost,
            max_body_bytes,
        })
    }
}

fn parse_value<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        name,
        value: value.to_string(),
    })
}
