//! Request validation from per-resource field rule tables.

use crate::error::AppError;
use crate::models::{CourseChanges, NewCourse, NewUser};
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::OnceLock;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Email,
}

/// One entry in a rule table: which JSON field, whether it must be present and non-blank, and its format.
#[derive(Clone, Copy, Debug)]
pub struct FieldRule {
    pub field: &'static str,
    pub required: bool,
    pub format: Option<Format>,
}

impl FieldRule {
    const fn required(field: &'static str) -> Self {
        FieldRule { field, required: true, format: None }
    }

    const fn optional(field: &'static str) -> Self {
        FieldRule { field, required: false, format: None }
    }

    const fn with_format(self, format: Format) -> Self {
        FieldRule { format: Some(format), ..self }
    }
}

pub const USER_RULES: &[FieldRule] = &[
    FieldRule::required("firstName"),
    FieldRule::required("lastName"),
    FieldRule::required("emailAddress").with_format(Format::Email),
    FieldRule::required("password"),
];

pub const COURSE_RULES: &[FieldRule] = &[
    FieldRule::required("title"),
    FieldRule::required("description"),
    FieldRule::optional("estimatedTime"),
    FieldRule::optional("materialsNeeded"),
];

pub struct RequestValidator;

impl RequestValidator {
    /// Check `body` against `rules`. Returns one message per failing field, in table order.
    pub fn validate(body: &Map<String, Value>, rules: &[FieldRule]) -> Vec<String> {
        rules
            .iter()
            .filter_map(|rule| check_field(rule, body.get(rule.field)))
            .collect()
    }

    pub fn new_user(body: Value) -> Result<NewUser, AppError> {
        let body = checked(body, USER_RULES)?;
        Ok(NewUser {
            first_name: required_str(&body, "firstName"),
            last_name: required_str(&body, "lastName"),
            email_address: required_str(&body, "emailAddress"),
            password: required_str(&body, "password"),
        })
    }

    pub fn new_course(body: Value) -> Result<NewCourse, AppError> {
        let body = checked(body, COURSE_RULES)?;
        Ok(NewCourse {
            title: required_str(&body, "title"),
            description: required_str(&body, "description"),
            estimated_time: optional_str(&body, "estimatedTime").flatten(),
            materials_needed: optional_str(&body, "materialsNeeded").flatten(),
        })
    }

    /// Owner fields in the body are ignored; ownership never changes through an update.
    pub fn course_changes(body: Value) -> Result<CourseChanges, AppError> {
        let body = checked(body, COURSE_RULES)?;
        Ok(CourseChanges {
            title: required_str(&body, "title"),
            description: required_str(&body, "description"),
            estimated_time: optional_str(&body, "estimatedTime"),
            materials_needed: optional_str(&body, "materialsNeeded"),
        })
    }
}

fn checked(body: Value, rules: &[FieldRule]) -> Result<Map<String, Value>, AppError> {
    let Value::Object(map) = body else {
        return Err(AppError::BadRequest("Request body must be a JSON object".into()));
    };
    let errors = RequestValidator::validate(&map, rules);
    if errors.is_empty() {
        Ok(map)
    } else {
        Err(AppError::Validation(errors))
    }
}

fn check_field(rule: &FieldRule, value: Option<&Value>) -> Option<String> {
    let missing = format!("Please provide a value for \"{}\"", rule.field);
    match value {
        None | Some(Value::Null) => rule.required.then_some(missing),
        Some(Value::String(s)) if s.trim().is_empty() => rule.required.then_some(missing),
        Some(Value::String(s)) => match rule.format {
            Some(Format::Email) if !is_email(s) => Some(format!(
                "Please provide a valid email address for \"{}\"",
                rule.field
            )),
            _ => None,
        },
        Some(_) => Some(format!("\"{}\" must be a string", rule.field)),
    }
}

fn is_email(s: &str) -> bool {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL
        .get_or_init(|| Regex::new(EMAIL_PATTERN).ok())
        .as_ref()
        .is_some_and(|re| re.is_match(s))
}

/// Only called after validation, so the field is a non-blank string.
fn required_str(body: &Map<String, Value>, field: &str) -> String {
    body.get(field).and_then(Value::as_str).unwrap_or_default().to_string()
}

/// `None` when absent, `Some(None)` when null or blank.
fn optional_str(body: &Map<String, Value>, field: &str) -> Option<Option<String>> {
    body.get(field).map(|v| {
        v.as_str()
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(m) => m,
            _ => unreachable!(),
        }
    }

    #[test]
    fn complete_user_passes() {
        let body = map(json!({
            "firstName": "Kim",
            "lastName": "Drezdon",
            "emailAddress": "kim@x.com",
            "password": "testing123"
        }));
        assert!(RequestValidator::validate(&body, USER_RULES).is_empty());
    }

    #[test]
    fn one_message_per_missing_field_in_table_order() {
        let body = map(json!({ "firstName": "Kim", "lastName": "   ", "password": null }));
        assert_eq!(
            RequestValidator::validate(&body, USER_RULES),
            vec![
                "Please provide a value for \"lastName\"",
                "Please provide a value for \"emailAddress\"",
                "Please provide a value for \"password\"",
            ]
        );
    }

    #[test]
    fn malformed_email_is_rejected() {
        let body = map(json!({
            "firstName": "Kim",
            "lastName": "Drezdon",
            "emailAddress": "not-an-email",
            "password": "pw"
        }));
        assert_eq!(
            RequestValidator::validate(&body, USER_RULES),
            vec!["Please provide a valid email address for \"emailAddress\""]
        );
    }

    #[test]
    fn non_string_values_are_rejected() {
        let body = map(json!({ "title": 5, "description": "d", "estimatedTime": true }));
        assert_eq!(
            RequestValidator::validate(&body, COURSE_RULES),
            vec!["\"title\" must be a string", "\"estimatedTime\" must be a string"]
        );
    }

    #[test]
    fn optional_course_fields_may_be_absent_or_null() {
        let body = map(json!({ "title": "Intro", "description": "d", "materialsNeeded": null }));
        assert!(RequestValidator::validate(&body, COURSE_RULES).is_empty());
    }

    #[test]
    fn course_changes_distinguish_absent_from_cleared() {
        let changes = RequestValidator::course_changes(json!({
            "title": "Intro",
            "description": "d",
            "materialsNeeded": "",
            "ownerId": 99
        }))
        .unwrap();
        assert_eq!(changes.estimated_time, None);
        assert_eq!(changes.materials_needed, Some(None));
    }

    #[test]
    fn non_object_body_is_a_bad_request() {
        let err = RequestValidator::new_course(json!(["title"])).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn new_course_reports_all_missing_fields() {
        match RequestValidator::new_course(json!({})) {
            Err(AppError::Validation(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("unexpected: {:?}", other),
        }
    }
}
