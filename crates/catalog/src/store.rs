//! Store traits implemented by the data access layer.
//!
//! The engine only ever sees these two contracts; the concrete MySQL
//! implementation lives in the `store` crate and an in-memory double in
//! [`crate::memory`].

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Course, Enrollment, UserId};

/// Supplies the corpus of courses eligible for training and ranking.
#[async_trait]
pub trait CourseStore: Send + Sync {
    /// Fetch all courses with published status, category name included.
    async fn fetch_published_courses(&self) -> Result<Vec<Course>>;
}

/// Supplies a user's historical enrollments.
#[async_trait]
pub trait EnrollmentStore: Send + Sync {
    /// Fetch every enrollment for the given user, in store order.
    async fn fetch_user_enrollments(&self, user_id: &UserId) -> Result<Vec<Enrollment>>;
}
