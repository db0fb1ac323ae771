//! Recommender crate for the course recommendation engine.
//!
//! This crate contains the hybrid orchestrator that combines content
//! similarity with popularity fallback, and owns the trained embedding
//! state.

pub mod engine;
pub mod error;

pub use engine::{HybridRecommender, PER_COURSE_FANOUT};
pub use error::{RecommendError, Result};
