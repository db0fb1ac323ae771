//! Candidate types shared by the ranking sources.

use catalog::{CourseId, RecommendationItem};

/// Which ranking source produced a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandidateSource {
    /// Content-based neighbor of an enrolled course
    Similarity,
    /// Popularity fallback for users without history
    Popularity,
}

/// A candidate course with its ranking score.
///
/// Similarity candidates carry a cosine score in [-1, 1]; popularity
/// candidates carry the fixed score 1.0 (their composite score is internal
/// to the ranker).
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub course_id: CourseId,
    pub score: f64,
    pub source: CandidateSource,
}

impl Candidate {
    pub fn new(course_id: CourseId, source: CandidateSource, score: f64) -> Self {
        Self {
            course_id,
            score,
            source,
        }
    }
}

impl From<Candidate> for RecommendationItem {
    fn from(candidate: Candidate) -> Self {
        match candidate.source {
            CandidateSource::Similarity => {
                RecommendationItem::similar(candidate.course_id, candidate.score)
            }
            CandidateSource::Popularity => RecommendationItem::popular(candidate.course_id),
        }
    }
}
