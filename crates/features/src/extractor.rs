//! Feature extraction: course metadata to dense embeddings.
//!
//! Builds one text document per course, vectorizes the corpus with
//! TF-IDF, and reduces it to a dense embedding matrix with truncated SVD.
//! The resulting [`CourseEmbeddings`] pairs each matrix row with its
//! course id and is only ever replaced wholesale by a new training pass.

use std::collections::HashMap;

use catalog::{Course, CourseId};
use nalgebra::DMatrix;
use tracing::{info, warn};

use crate::svd::TruncatedSvd;
use crate::text::build_document;
use crate::tfidf::TfidfVectorizer;

/// Vocabulary cap for the TF-IDF pass.
pub const DEFAULT_MAX_FEATURES: usize = 1000;

/// Target dimensionality of the course embedding space.
pub const DEFAULT_EMBEDDING_DIMS: usize = 50;

/// Trains course embeddings from catalog text metadata.
#[derive(Debug, Clone)]
pub struct FeatureExtractor {
    max_features: usize,
    embedding_dims: usize,
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self {
            max_features: DEFAULT_MAX_FEATURES,
            embedding_dims: DEFAULT_EMBEDDING_DIMS,
        }
    }
}

impl FeatureExtractor {
    /// Create an extractor with the default vocabulary cap and dimensions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the vocabulary cap (default: 1000)
    pub fn with_max_features(mut self, max_features: usize) -> Self {
        self.max_features = max_features;
        self
    }

    /// Configure the embedding dimensionality (default: 50)
    pub fn with_embedding_dims(mut self, embedding_dims: usize) -> Self {
        self.embedding_dims = embedding_dims;
        self
    }

    /// Train embeddings over the given corpus.
    ///
    /// Returns `None` for an empty corpus: training is a no-op rather than
    /// a fault, and the caller keeps whatever state it already had.
    pub fn train(&self, corpus: &[Course]) -> Option<CourseEmbeddings> {
        if corpus.is_empty() {
            warn!("no courses available for training");
            return None;
        }

        let documents: Vec<String> = corpus.iter().map(build_document).collect();
        let tfidf = TfidfVectorizer::new(self.max_features).fit_transform(&documents);
        let embeddings = TruncatedSvd::new(self.embedding_dims).fit_transform(&tfidf);
        let course_ids: Vec<CourseId> = corpus.iter().map(|c| c.id.clone()).collect();

        info!(
            "trained embeddings for {} courses ({} dimensions)",
            course_ids.len(),
            embeddings.ncols()
        );
        Some(CourseEmbeddings::new(embeddings, course_ids))
    }
}

/// One training pass worth of course embeddings.
///
/// Row `i` of the matrix is the embedding of `course_ids()[i]`. The id
/// index keeps the first occurrence of each id; duplicate ids in the
/// corpus are a data-integrity violation upstream.
#[derive(Debug, Clone)]
pub struct CourseEmbeddings {
    matrix: DMatrix<f64>,
    course_ids: Vec<CourseId>,
    index: HashMap<CourseId, usize>,
}

impl CourseEmbeddings {
    pub fn new(matrix: DMatrix<f64>, course_ids: Vec<CourseId>) -> Self {
        debug_assert_eq!(matrix.nrows(), course_ids.len());

        let mut index = HashMap::with_capacity(course_ids.len());
        for (row, id) in course_ids.iter().enumerate() {
            index.entry(id.clone()).or_insert(row);
        }
        Self {
            matrix,
            course_ids,
            index,
        }
    }

    /// Number of embedded courses
    pub fn len(&self) -> usize {
        self.course_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.course_ids.is_empty()
    }

    /// Dimensionality of the embedding space
    pub fn dims(&self) -> usize {
        self.matrix.ncols()
    }

    /// Course ids positionally aligned with the matrix rows
    pub fn course_ids(&self) -> &[CourseId] {
        &self.course_ids
    }

    /// Row index of a course id, if it was part of the training corpus
    pub fn position(&self, course_id: &str) -> Option<usize> {
        self.index.get(course_id).copied()
    }

    /// Cosine similarity between the embedding at `row` and every row.
    ///
    /// Zero-norm embeddings (courses whose document was all stop words)
    /// score 0.0 against everything.
    pub fn similarities_to(&self, row: usize) -> Vec<f64> {
        let query = self.matrix.row(row);
        let query_norm = query.norm();

        (0..self.matrix.nrows())
            .map(|other_row| {
                let other = self.matrix.row(other_row);
                let denom = query_norm * other.norm();
                if denom > 0.0 {
                    query.dot(&other) / denom
                } else {
                    0.0
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(id: &str, title: &str) -> Course {
        Course {
            id: id.to_string(),
            title: title.to_string(),
            description: None,
            level: None,
            category: None,
            average_rating: 0.0,
            enrollments_count: 0,
        }
    }

    fn sample_corpus() -> Vec<Course> {
        vec![
            course("a", "python machine learning"),
            course("b", "python data analysis"),
            course("c", "watercolor painting basics"),
        ]
    }

    #[test]
    fn test_embeddings_align_with_course_ids() {
        let embeddings = FeatureExtractor::new().train(&sample_corpus()).unwrap();

        assert_eq!(embeddings.len(), 3);
        assert_eq!(embeddings.course_ids(), &["a", "b", "c"]);
        assert_eq!(embeddings.position("a"), Some(0));
        assert_eq!(embeddings.position("c"), Some(2));
        assert_eq!(embeddings.position("missing"), None);
    }

    #[test]
    fn test_empty_corpus_is_a_no_op() {
        assert!(FeatureExtractor::new().train(&[]).is_none());
    }

    #[test]
    fn test_dims_clamped_to_corpus_size() {
        let embeddings = FeatureExtractor::new().train(&sample_corpus()).unwrap();
        // 3 documents cannot support 50 dimensions
        assert!(embeddings.dims() <= 3);
    }

    #[test]
    fn test_similarity_favors_shared_vocabulary() {
        let embeddings = FeatureExtractor::new().train(&sample_corpus()).unwrap();
        let sims = embeddings.similarities_to(0);

        assert_eq!(sims.len(), 3);
        assert!((sims[0] - 1.0).abs() < 1e-9, "self-similarity should be 1.0");
        assert!(
            sims[1] > sims[2],
            "python courses should be closer than painting: {} vs {}",
            sims[1],
            sims[2]
        );
    }

    #[test]
    fn test_duplicate_ids_keep_first_position() {
        let corpus = vec![
            course("dup", "first occurrence"),
            course("dup", "second occurrence"),
        ];
        let embeddings = FeatureExtractor::new().train(&corpus).unwrap();
        assert_eq!(embeddings.position("dup"), Some(0));
    }

    #[test]
    fn test_training_handles_missing_text_fields() {
        let corpus = vec![
            Course {
                id: "sparse".to_string(),
                title: "Untitled".to_string(),
                description: None,
                level: None,
                category: None,
                average_rating: 0.0,
                enrollments_count: 0,
            },
            course("full", "complete metadata here"),
        ];

        let embeddings = FeatureExtractor::new().train(&corpus).unwrap();
        assert_eq!(embeddings.len(), 2);
    }
}
