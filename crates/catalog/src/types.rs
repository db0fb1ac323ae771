//! Core domain types for the course catalog.
//!
//! This module defines the data structures shared by every crate in the
//! workspace: the course snapshot used for training, enrollment records,
//! and the recommendation items returned to callers.

use serde::{Deserialize, Serialize};

// =============================================================================
// Type Aliases
// =============================================================================
// These make the domain clearer and prevent mixing up user ids with course ids

/// Unique identifier for a course (UUID string in the platform schema)
pub type CourseId = String;

/// Unique identifier for a user
pub type UserId = String;

// =============================================================================
// Course-related Types
// =============================================================================

/// A published course as seen by the recommendation engine.
///
/// This is an immutable snapshot taken at fetch time; the engine never
/// mutates it. Text fields other than the title are nullable in the
/// platform schema, so they are `Option` here and substituted with the
/// empty string during feature extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub description: Option<String>,
    /// Difficulty level ("beginner", "intermediate", "expert", "all")
    pub level: Option<String>,
    /// Category name, joined in from the category table
    pub category: Option<String>,
    /// Average rating on a 0-5 scale
    pub average_rating: f32,
    pub enrollments_count: u32,
}

/// A user's enrollment in a course.
///
/// Read-only input to recommendation; owned by the enrollment store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrollment {
    pub user_id: UserId,
    pub course_id: CourseId,
    /// Completion progress in percent (0-100)
    pub progress: f32,
    pub is_completed: bool,
    pub category_id: Option<String>,
}

// =============================================================================
// Recommendation Output
// =============================================================================

/// A single ranked recommendation returned to the caller.
///
/// `similarity_score` is a cosine similarity in [-1, 1] for content-based
/// items, or fixed at 1.0 for popularity-fallback items. `reason` is only
/// present for fallback items ("popular") and is omitted from JSON otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationItem {
    pub course_id: CourseId,
    pub similarity_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl RecommendationItem {
    /// Content-similarity item with no reason tag.
    pub fn similar(course_id: CourseId, similarity_score: f64) -> Self {
        Self {
            course_id,
            similarity_score,
            reason: None,
        }
    }

    /// Popularity-fallback item: score pinned to 1.0, tagged "popular".
    pub fn popular(course_id: CourseId) -> Self {
        Self {
            course_id,
            similarity_score: 1.0,
            reason: Some("popular".to_string()),
        }
    }
}
