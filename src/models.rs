//! Typed records for users and courses, plus the shapes returned to clients.

use serde::Serialize;
use sqlx::FromRow;

/// Stored user row including the password hash. Never serialized.
#[derive(Clone, Debug, FromRow)]
pub struct UserRecord {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub password: String,
}

/// The authenticated user attached to a request. Carries no secret.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
}

impl From<UserRecord> for Identity {
    fn from(u: UserRecord) -> Self {
        Identity {
            id: u.id,
            first_name: u.first_name,
            last_name: u.last_name,
            email_address: u.email_address,
        }
    }
}

/// Public view of a user; the same fields as [`Identity`].
pub type UserView = Identity;

#[derive(Clone, Debug, FromRow)]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
    pub owner_id: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseView {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
    pub owner_id: i64,
    pub owner: UserView,
}

/// Course joined with its owner's public columns.
#[derive(Debug, FromRow)]
pub struct CourseOwnerRow {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
    pub owner_id: i64,
    pub owner_first_name: String,
    pub owner_last_name: String,
    pub owner_email_address: String,
}

impl From<CourseOwnerRow> for CourseView {
    fn from(r: CourseOwnerRow) -> Self {
        CourseView {
            id: r.id,
            title: r.title,
            description: r.description,
            estimated_time: r.estimated_time,
            materials_needed: r.materials_needed,
            owner_id: r.owner_id,
            owner: UserView {
                id: r.owner_id,
                first_name: r.owner_first_name,
                last_name: r.owner_last_name,
                email_address: r.owner_email_address,
            },
        }
    }
}

#[derive(Clone, Debug)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    /// Plaintext as received; hashed before it reaches the store.
    pub password: String,
}

#[derive(Clone, Debug)]
pub struct NewCourse {
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
}

/// Changes for an existing course. The outer `None` on optional fields means "leave as is".
#[derive(Clone, Debug, Default)]
pub struct CourseChanges {
    pub title: String,
    pub description: String,
    pub estimated_time: Option<Option<String>>,
    pub materials_needed: Option<Option<String>>,
}

impl CourseChanges {
    pub fn apply(self, course: &mut Course) {
        course.title = self.title;
        course.description = self.description;
        if let Some(v) = self.estimated_time {
            course.estimated_time = v;
        }
        if let Some(v) = self.materials_needed {
            course.materials_needed = v;
        }
    }
}
