//! Ownership gate for course mutations.

use crate::error::AppError;
use crate::models::{Course, Identity};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Allowed,
    Denied,
}

/// Allowed iff the course belongs to `identity`.
pub fn authorize(identity: &Identity, course: &Course) -> Decision {
    if course.owner_id == identity.id {
        Decision::Allowed
    } else {
        Decision::Denied
    }
}

/// [`authorize`] as a `Result`, for use with `?` in handlers.
pub fn require_owner(identity: &Identity, course: &Course) -> Result<(), AppError> {
    match authorize(identity, course) {
        Decision::Allowed => Ok(()),
        Decision::Denied => {
            tracing::info!(user_id = identity.id, course_id = course.id, "course mutation denied to non-owner");
            Err(AppError::Forbidden)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(id: i64) -> Identity {
        Identity {
            id,
            first_name: "Kim".into(),
            last_name: "Drezdon".into(),
            email_address: "kim@x.com".into(),
        }
    }

    fn course(owner_id: i64) -> Course {
        Course {
            id: 1,
            title: "Intro".into(),
            description: "d".into(),
            estimated_time: None,
            materials_needed: None,
            owner_id,
        }
    }

    #[test]
    fn owner_is_allowed() {
        assert_eq!(authorize(&identity(1), &course(1)), Decision::Allowed);
        assert!(require_owner(&identity(1), &course(1)).is_ok());
    }

    #[test]
    fn non_owner_is_denied() {
        assert_eq!(authorize(&identity(2), &course(1)), Decision::Denied);
        assert!(matches!(require_owner(&identity(2), &course(1)), Err(AppError::Forbidden)));
    }
}
