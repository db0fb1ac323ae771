//! # Rankers Crate
//!
//! Candidate ranking sources for course recommendations.
//!
//! ## Components
//!
//! ### Similarity
//! Content-based neighbors over trained embeddings:
//! - "Courses whose text looks like this course's text"
//! - Cosine similarity, stable descending sort, query excluded by identity
//!
//! ### Popularity
//! Cold-start fallback over raw catalog signals:
//! - Composite of enrollment volume and average rating
//! - Emits fixed-score candidates tagged as popular
//!
//! ## Example Usage
//!
//! ```ignore
//! use rankers::{similar_courses, PopularityRanker};
//!
//! let neighbors = similar_courses(&embeddings, "course-id", 3)?;
//! let fallback = PopularityRanker::new().top(&courses, 10);
//! ```

// Public modules
pub mod popularity;
pub mod similarity;
pub mod types;

// Re-export commonly used types
pub use popularity::PopularityRanker;
pub use similarity::{similar_courses, SimilarityError};
pub use types::{Candidate, CandidateSource};
