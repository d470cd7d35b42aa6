//! Course persistence. Mutations are guarded on owner so a row that changed hands
//! or vanished between lookup and write reports not found.

use crate::error::AppError;
use crate::models::{Course, CourseOwnerRow, CourseView, NewCourse};
use sqlx::SqlitePool;

const SELECT_WITH_OWNER: &str = "\
    SELECT c.id, c.title, c.description, c.estimated_time, c.materials_needed, c.owner_id, \
           u.first_name AS owner_first_name, u.last_name AS owner_last_name, \
           u.email_address AS owner_email_address \
    FROM courses c JOIN users u ON u.id = c.owner_id";

pub struct CourseService;

impl CourseService {
    pub async fn list_with_owners(pool: &SqlitePool) -> Result<Vec<CourseView>, AppError> {
        let sql = format!("{} ORDER BY c.id", SELECT_WITH_OWNER);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, CourseOwnerRow>(&sql).fetch_all(pool).await?;
        Ok(rows.into_iter().map(CourseView::from).collect())
    }

    pub async fn read_with_owner(pool: &SqlitePool, id: i64) -> Result<Option<CourseView>, AppError> {
        let sql = format!("{} WHERE c.id = ?", SELECT_WITH_OWNER);
        let row = sqlx::query_as::<_, CourseOwnerRow>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(CourseView::from))
    }

    pub async fn find(pool: &SqlitePool, id: i64) -> Result<Option<Course>, AppError> {
        let row = sqlx::query_as::<_, Course>(
            "SELECT id, title, description, estimated_time, materials_needed, owner_id \
             FROM courses WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(row)
    }

    /// Insert a course owned by `owner_id`. Returns the new id.
    pub async fn create(pool: &SqlitePool, owner_id: i64, course: &NewCourse) -> Result<i64, AppError> {
        let (id,): (i64,) = sqlx::query_as(
            "INSERT INTO courses (title, description, estimated_time, materials_needed, owner_id) \
             VALUES (?, ?, ?, ?, ?) RETURNING id",
        )
        .bind(&course.title)
        .bind(&course.description)
        .bind(&course.estimated_time)
        .bind(&course.materials_needed)
        .bind(owner_id)
        .fetch_one(pool)
        .await?;
        Ok(id)
    }

    /// Write every mutable column of `course`. `owner_id` is only matched, never written.
    pub async fn update(pool: &SqlitePool, course: &Course) -> Result<(), AppError> {
        let result = sqlx::query(
            "UPDATE courses SET title = ?, description = ?, estimated_time = ?, materials_needed = ?, \
             updated_at = CURRENT_TIMESTAMP WHERE id = ? AND owner_id = ?",
        )
        .bind(&course.title)
        .bind(&course.description)
        .bind(&course.estimated_time)
        .bind(&course.materials_needed)
        .bind(course.id)
        .bind(course.owner_id)
        .execute(pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Course".into()));
        }
        Ok(())
    }

    pub async fn delete(pool: &SqlitePool, id: i64, owner_id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = ? AND owner_id = ?")
            .bind(id)
            .bind(owner_id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Course".into()));
        }
        Ok(())
    }
}
