//! # Features Crate
//!
//! Turns course text metadata into dense embeddings.
//!
//! ## Pipeline
//!
//! 1. **text**: build one document per course (title, description,
//!    category, level) and tokenize it
//! 2. **tfidf**: weigh the corpus vocabulary, capped at 1000 terms
//! 3. **svd**: reduce to a 50-dimensional dense embedding space
//!
//! ## Example Usage
//!
//! ```ignore
//! use features::FeatureExtractor;
//!
//! let extractor = FeatureExtractor::new();
//! if let Some(embeddings) = extractor.train(&courses) {
//!     let sims = embeddings.similarities_to(0);
//! }
//! ```

// Public modules
pub mod extractor;
pub mod svd;
pub mod text;
pub mod tfidf;

// Re-export commonly used types
pub use extractor::{CourseEmbeddings, FeatureExtractor, DEFAULT_EMBEDDING_DIMS, DEFAULT_MAX_FEATURES};
pub use svd::TruncatedSvd;
pub use tfidf::TfidfVectorizer;
