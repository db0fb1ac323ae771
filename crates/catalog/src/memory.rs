//! In-memory implementation of the store traits.
//!
//! Used by tests and the offline CLI harness. Courses inserted here are
//! treated as already published; enrollments are filtered per user at
//! fetch time.

use async_trait::async_trait;

use crate::error::Result;
use crate::store::{CourseStore, EnrollmentStore};
use crate::types::{Course, Enrollment, UserId};

/// An insert-based, read-after-build catalog held entirely in memory.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCatalog {
    courses: Vec<Course>,
    enrollments: Vec<Enrollment>,
}

impl InMemoryCatalog {
    /// Creates a new, empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a course into the catalog
    pub fn insert_course(&mut self, course: Course) {
        self.courses.push(course);
    }

    /// Insert an enrollment record
    pub fn insert_enrollment(&mut self, enrollment: Enrollment) {
        self.enrollments.push(enrollment);
    }

    /// Get counts for debugging/validation
    pub fn counts(&self) -> (usize, usize) {
        (self.courses.len(), self.enrollments.len())
    }
}

#[async_trait]
impl CourseStore for InMemoryCatalog {
    async fn fetch_published_courses(&self) -> Result<Vec<Course>> {
        Ok(self.courses.clone())
    }
}

#[async_trait]
impl EnrollmentStore for InMemoryCatalog {
    async fn fetch_user_enrollments(&self, user_id: &UserId) -> Result<Vec<Enrollment>> {
        Ok(self
            .enrollments
            .iter()
            .filter(|e| &e.user_id == user_id)
            .cloned()
            .collect())
    }
}
