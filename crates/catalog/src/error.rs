//! Error types for the data stores.

use thiserror::Error;

/// Errors surfaced by course and enrollment stores.
///
/// These are the only errors that propagate to callers of the
/// recommendation engine; every data-quality condition (unknown course,
/// cold-start user, empty corpus) degrades to an empty or fallback result
/// instead.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backing store could not be reached
    #[error("data store unavailable: {0}")]
    Unavailable(String),

    /// A query against the store failed
    #[error("store query failed: {0}")]
    Query(String),
}

/// Convenience type alias for store results
pub type Result<T> = std::result::Result<T, StoreError>;
