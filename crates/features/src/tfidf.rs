//! Term-frequency / inverse-document-frequency vectorization.
//!
//! Converts a corpus of documents into a dense matrix of lexical weights:
//! one row per document, one column per vocabulary term. The vocabulary is
//! capped at a fixed size, keeping the highest-total-frequency terms, and
//! rows are L2-normalized so cosine similarity reduces to a dot product.

use std::collections::{HashMap, HashSet};

use nalgebra::DMatrix;
use rayon::prelude::*;
use tracing::debug;

use crate::text::tokenize;

/// TF-IDF vectorizer with a bounded vocabulary.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    max_features: usize,
}

impl TfidfVectorizer {
    /// Create a vectorizer that keeps at most `max_features` terms.
    pub fn new(max_features: usize) -> Self {
        Self { max_features }
    }

    /// Vectorize the corpus into a documents x vocabulary weight matrix.
    ///
    /// IDF is smoothed (`ln((1 + n) / (1 + df)) + 1`) so terms present in
    /// every document still carry a positive weight. Vocabulary ties at the
    /// frequency cutoff resolve lexicographically, keeping the output
    /// deterministic for a fixed corpus.
    pub fn fit_transform(&self, documents: &[String]) -> DMatrix<f64> {
        if documents.is_empty() {
            return DMatrix::zeros(0, 0);
        }

        let tokenized: Vec<Vec<String>> = documents.par_iter().map(|d| tokenize(d)).collect();

        // Total term counts (for the vocabulary cap) and document frequencies
        let mut term_counts: HashMap<&str, usize> = HashMap::new();
        let mut doc_freq: HashMap<&str, usize> = HashMap::new();
        for tokens in &tokenized {
            for term in tokens {
                *term_counts.entry(term.as_str()).or_insert(0) += 1;
            }
            let unique: HashSet<&str> = tokens.iter().map(|t| t.as_str()).collect();
            for term in unique {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        // Keep the most frequent terms up to the cap
        let mut ranked: Vec<(&str, usize)> = term_counts.into_iter().collect();
        ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(self.max_features);

        let vocabulary: HashMap<&str, usize> = ranked
            .iter()
            .enumerate()
            .map(|(idx, (term, _))| (*term, idx))
            .collect();
        debug!(
            "built vocabulary of {} terms from {} documents",
            vocabulary.len(),
            documents.len()
        );

        let n = documents.len() as f64;
        let mut idf = vec![0.0f64; vocabulary.len()];
        for (term, &idx) in &vocabulary {
            let df = doc_freq.get(term).copied().unwrap_or(0) as f64;
            idf[idx] = ((1.0 + n) / (1.0 + df)).ln() + 1.0;
        }

        let mut matrix = DMatrix::zeros(documents.len(), vocabulary.len());
        for (row, tokens) in tokenized.iter().enumerate() {
            let mut tf: HashMap<&str, f64> = HashMap::new();
            for term in tokens {
                *tf.entry(term.as_str()).or_insert(0.0) += 1.0;
            }
            for (term, count) in tf {
                if let Some(&col) = vocabulary.get(term) {
                    matrix[(row, col)] = count * idf[col];
                }
            }

            // L2-normalize the row; all-stop-word documents stay zero
            let norm = matrix.row(row).norm();
            if norm > 0.0 {
                for col in 0..matrix.ncols() {
                    matrix[(row, col)] /= norm;
                }
            }
        }

        matrix
    }
}
