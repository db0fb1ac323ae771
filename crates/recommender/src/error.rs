//! Error types for the recommendation orchestrator.

use catalog::StoreError;
use thiserror::Error;

/// Failures that reach callers of the recommender.
///
/// Data-quality conditions (unknown course ids, cold-start users, an
/// empty corpus) never surface here; they degrade to empty or fallback
/// results inside the orchestrator.
#[derive(Error, Debug)]
pub enum RecommendError {
    /// The course or enrollment store could not be read
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The background training task panicked or was cancelled
    #[error("training task failed: {0}")]
    Training(String),
}

/// Convenience type alias for recommender results
pub type Result<T> = std::result::Result<T, RecommendError>;
