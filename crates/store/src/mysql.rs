//! MySQL implementation of the catalog store traits.
//!
//! Reads the learning platform's relational schema: `Course` rows joined
//! to their `Category` name, and per-user `Enrollment` rows. The pool is
//! expected to be created lazily by the caller and is simply reused here;
//! connection failures propagate as store errors with no retry.

use async_trait::async_trait;
use sqlx::mysql::MySqlPool;
use sqlx::FromRow;
use tracing::debug;

use catalog::{Course, CourseStore, Enrollment, EnrollmentStore, StoreError, UserId};

/// MySQL-backed course and enrollment store.
#[derive(Debug, Clone)]
pub struct MySqlCatalogStore {
    pool: MySqlPool,
}

impl MySqlCatalogStore {
    /// Create a store over an existing connection pool.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Create a store whose pool connects on first use.
    ///
    /// Only the URL is validated here; an unreachable server surfaces as
    /// `StoreError::Unavailable` on the first query instead.
    pub fn connect_lazy(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = sqlx::mysql::MySqlPoolOptions::new()
            .max_connections(max_connections)
            .connect_lazy(database_url)
            .map_err(map_sqlx_error)?;
        Ok(Self::new(pool))
    }
}

/// Raw published-course row, before defaulting of nullable columns.
#[derive(Debug, FromRow)]
struct CourseRow {
    id: String,
    title: String,
    description: Option<String>,
    level: Option<String>,
    average_rating: Option<f32>,
    enrollments_count: Option<i32>,
    category: Option<String>,
}

impl From<CourseRow> for Course {
    fn from(row: CourseRow) -> Self {
        Course {
            id: row.id,
            title: row.title,
            description: row.description,
            level: row.level,
            category: row.category,
            average_rating: row.average_rating.unwrap_or(0.0),
            enrollments_count: row.enrollments_count.unwrap_or(0).max(0) as u32,
        }
    }
}

#[derive(Debug, FromRow)]
struct EnrollmentRow {
    user_id: String,
    course_id: String,
    progress: Option<f32>,
    is_completed: Option<bool>,
    category_id: Option<String>,
}

impl From<EnrollmentRow> for Enrollment {
    fn from(row: EnrollmentRow) -> Self {
        Enrollment {
            user_id: row.user_id,
            course_id: row.course_id,
            progress: row.progress.unwrap_or(0.0),
            is_completed: row.is_completed.unwrap_or(false),
            category_id: row.category_id,
        }
    }
}

#[async_trait]
impl CourseStore for MySqlCatalogStore {
    async fn fetch_published_courses(&self) -> Result<Vec<Course>, StoreError> {
        let rows: Vec<CourseRow> = sqlx::query_as(
            r#"
            SELECT c.id, c.title, c.description, c.level, c.average_rating,
                   c.enrollments_count, cat.name AS category
            FROM Course c
            LEFT JOIN Category cat ON c.category_id = cat.id
            WHERE c.status = 'published'
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        debug!("fetched {} published courses", rows.len());
        Ok(rows.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl EnrollmentStore for MySqlCatalogStore {
    async fn fetch_user_enrollments(&self, user_id: &UserId) -> Result<Vec<Enrollment>, StoreError> {
        let rows: Vec<EnrollmentRow> = sqlx::query_as(
            r#"
            SELECT e.user_id, e.course_id, e.progress, e.is_completed, c.category_id
            FROM Enrollment e
            JOIN Course c ON e.course_id = c.id
            WHERE e.user_id = ?
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        debug!("fetched {} enrollments for user {}", rows.len(), user_id);
        Ok(rows.into_iter().map(Into::into).collect())
    }
}

/// Classify sqlx failures into the store error taxonomy.
///
/// Connectivity problems (unreachable server, exhausted pool, TLS) map to
/// `Unavailable`; everything else is a `Query` failure.
fn map_sqlx_error(err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed => StoreError::Unavailable(err.to_string()),
        other => StoreError::Query(other.to_string()),
    }
}
