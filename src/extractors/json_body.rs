//! Request body as loose JSON, with every rejection reported through `AppError`.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde_json::{Map, Value};

/// A missing or blank body reads as `{}` so the validator can list the missing fields.
/// Content-Type is not checked.
#[derive(Clone, Debug)]
pub struct JsonBody(pub Value);

#[async_trait]
impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BodyRejected(e.status(), e.body_text()))?;
        parse(&bytes).map(JsonBody)
    }
}

fn parse(bytes: &[u8]) -> Result<Value, AppError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_slice(bytes)
        .map_err(|e| AppError::BadRequest(format!("Request body is not valid JSON: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_or_blank_body_is_an_empty_object() {
        assert_eq!(parse(b"").unwrap(), json!({}));
        assert_eq!(parse(b" \n ").unwrap(), json!({}));
    }

    #[test]
    fn malformed_json_is_a_bad_request() {
        assert!(matches!(parse(b"{not json"), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn valid_json_passes_through() {
        assert_eq!(parse(br#"{"title":"Intro"}"#).unwrap(), json!({ "title": "Intro" }));
    }
}
