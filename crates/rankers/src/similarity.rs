//! Content-based neighbor search over trained course embeddings.
//!
//! "Courses whose text looks like this course's text": cosine similarity
//! between the query embedding and every other embedding, ranked
//! descending.

use catalog::CourseId;
use features::CourseEmbeddings;
use thiserror::Error;
use tracing::debug;

use crate::types::{Candidate, CandidateSource};

/// Lookup failures during neighbor search.
///
/// Kept separate from store errors on purpose: an unknown course id is a
/// data-quality condition the orchestrator degrades to an empty result,
/// not a fault that should reach the caller.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SimilarityError {
    /// The course id was not part of the most recent training corpus
    #[error("course {course_id} not found in trained embeddings")]
    UnknownCourse { course_id: CourseId },
}

/// Find the `k` courses most similar to `course_id`.
///
/// The query course itself is excluded by row identity, never by
/// assuming it sorts first. The sort is stable and descending, so equal
/// scores keep their corpus order. Returns `min(k, corpus_size - 1)`
/// candidates when the id exists.
pub fn similar_courses(
    embeddings: &CourseEmbeddings,
    course_id: &str,
    k: usize,
) -> Result<Vec<Candidate>, SimilarityError> {
    let query_row = embeddings
        .position(course_id)
        .ok_or_else(|| SimilarityError::UnknownCourse {
            course_id: course_id.to_string(),
        })?;

    let similarities = embeddings.similarities_to(query_row);

    let mut scored: Vec<(usize, f64)> = similarities.into_iter().enumerate().collect();
    // Stable sort: ties keep corpus order
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let candidates: Vec<Candidate> = scored
        .into_iter()
        .filter(|(row, _)| *row != query_row)
        .take(k)
        .map(|(row, score)| {
            Candidate::new(
                embeddings.course_ids()[row].clone(),
                CandidateSource::Similarity,
                score,
            )
        })
        .collect();

    debug!(
        "found {} neighbors for course {} (k={})",
        candidates.len(),
        course_id,
        k
    );
    Ok(candidates)
}
