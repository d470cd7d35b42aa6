//! HTTP Basic credential parsing.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub name: String,
    pub secret: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("name", &self.name)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Parse an `Authorization` header value of the form `Basic base64(name:secret)`.
/// The scheme is case-insensitive; the secret may itself contain colons.
pub fn parse_basic(header: &str) -> Option<Credentials> {
    let (scheme, encoded) = header.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }
    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (name, secret) = decoded.split_once(':')?;
    Some(Credentials {
        name: name.to_string(),
        secret: secret.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(raw: &str) -> String {
        format!("Basic {}", STANDARD.encode(raw))
    }

    #[test]
    fn parses_name_and_secret() {
        let c = parse_basic(&header("kim@x.com:testing123")).unwrap();
        assert_eq!(c.name, "kim@x.com");
        assert_eq!(c.secret, "testing123");
    }

    #[test]
    fn secret_may_contain_colons() {
        let c = parse_basic(&header("kim@x.com:a:b:c")).unwrap();
        assert_eq!(c.secret, "a:b:c");
    }

    #[test]
    fn scheme_is_case_insensitive() {
        let raw = format!("bAsIc {}", STANDARD.encode("a:b"));
        assert!(parse_basic(&raw).is_some());
    }

    #[test]
    fn rejects_malformed_headers() {
        assert!(parse_basic("Bearer abc").is_none());
        assert!(parse_basic("Basic").is_none());
        assert!(parse_basic("Basic !!!not-base64").is_none());
        assert!(parse_basic(&header("no-colon-here")).is_none());
    }

    #[test]
    fn debug_redacts_secret() {
        let c = parse_basic(&header("kim@x.com:testing123")).unwrap();
        assert!(!format!("{:?}", c).contains("testing123"));
    }
}
