//! Persistence services for users and courses, and request validation.

mod courses;
mod users;
mod validation;
pub use courses::CourseService;
pub use users::{CreateOutcome, UserService};
pub use validation::{FieldRule, Format, RequestValidator, COURSE_RULES, USER_RULES};
