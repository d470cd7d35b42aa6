//! Course catalog API: users register and authenticate with HTTP Basic credentials,
//! and own courses that anyone can read but only the owner can change.

pub mod auth;
pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError};
pub use routes::{api_routes, build_app, common_routes};
pub use service::{CourseService, RequestValidator, UserService};
pub use state::AppState;
pub use store::{connect, ensure_tables};
