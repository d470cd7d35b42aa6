//! Response body and header helpers shared by handlers and error mapping.

use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Serialize)]
pub struct MessageBody<'a> {
    pub message: &'a str,
}

pub fn message_body(message: &str) -> Value {
    json!(MessageBody { message })
}

pub fn errors_body<S: AsRef<str>>(errors: &[S]) -> Value {
    let errors: Vec<&str> = errors.iter().map(AsRef::as_ref).collect();
    json!({ "errors": errors })
}

/// Body for unexpected failures: a message plus an empty error object so internals never leak.
pub fn unexpected_body(message: &str) -> Value {
    json!({ "message": message, "error": {} })
}

/// Empty response carrying a `Location` header, used for 201/200 on create.
pub fn located(status: StatusCode, location: &str) -> (StatusCode, HeaderMap) {
    let mut headers = HeaderMap::new();
    if let Ok(value) = HeaderValue::from_str(location) {
        headers.insert(header::LOCATION, value);
    }
    (status, headers)
}
