//! Popularity ranking for cold-start fallback.
//!
//! Ranks the corpus by a composite of enrollment volume and average
//! rating. Used when a user has no enrollment history and no
//! personalization signal exists.

use catalog::Course;
use tracing::debug;

use crate::types::{Candidate, CandidateSource};

/// Default weight on raw enrollment counts.
const DEFAULT_ENROLLMENT_WEIGHT: f64 = 0.7;

/// Default weight on the scaled average rating.
const DEFAULT_RATING_WEIGHT: f64 = 0.3;

/// Factor bringing a 0-5 rating into the typical magnitude of enrollment
/// counts. A normalization heuristic, not a principled scale.
const RATING_SCALE: f64 = 100.0;

/// Ranks courses by composite popularity.
#[derive(Debug, Clone)]
pub struct PopularityRanker {
    enrollment_weight: f64,
    rating_weight: f64,
}

impl Default for PopularityRanker {
    fn default() -> Self {
        Self {
            enrollment_weight: DEFAULT_ENROLLMENT_WEIGHT,
            rating_weight: DEFAULT_RATING_WEIGHT,
        }
    }
}

impl PopularityRanker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the enrollment-count weight (default: 0.7)
    pub fn with_enrollment_weight(mut self, weight: f64) -> Self {
        self.enrollment_weight = weight;
        self
    }

    /// Configure the rating weight (default: 0.3)
    pub fn with_rating_weight(mut self, weight: f64) -> Self {
        self.rating_weight = weight;
        self
    }

    /// The `limit` most popular courses, highest composite score first.
    ///
    /// Emitted candidates carry the fixed score 1.0; the composite is
    /// only used for ordering. Courses with equal composite scores keep
    /// their corpus iteration order, which is otherwise unspecified.
    pub fn top(&self, courses: &[Course], limit: usize) -> Vec<Candidate> {
        let mut scored: Vec<(&Course, f64)> = courses
            .iter()
            .map(|course| (course, self.composite_score(course)))
            .collect();

        // Stable sort: ties keep corpus order
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        let candidates: Vec<Candidate> = scored
            .into_iter()
            .take(limit)
            .map(|(course, _)| {
                Candidate::new(course.id.clone(), CandidateSource::Popularity, 1.0)
            })
            .collect();

        debug!("ranked {} popular courses (limit={})", candidates.len(), limit);
        candidates
    }

    /// Composite popularity: enrollments x 0.7 + rating x 100 x 0.3.
    fn composite_score(&self, course: &Course) -> f64 {
        course.enrollments_count as f64 * self.enrollment_weight
            + course.average_rating as f64 * RATING_SCALE * self.rating_weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(id: &str, enrollments: u32, rating: f32) -> Course {
        Course {
            id: id.to_string(),
            title: format!("Course {}", id),
            description: None,
            level: None,
            category: None,
            average_rating: rating,
            enrollments_count: enrollments,
        }
    }

    #[test]
    fn test_composite_weights_enrollments_against_ratings() {
        // 100*0.7 + 4*100*0.3 = 190 beats 50*0.7 + 5*100*0.3 = 185
        // beats 10*0.7 + 3*100*0.3 = 97
        let corpus = vec![
            course("a", 100, 4.0),
            course("b", 50, 5.0),
            course("c", 10, 3.0),
        ];

        let top = PopularityRanker::new().top(&corpus, 1);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].course_id, "a");
    }

    #[test]
    fn test_full_ordering() {
        let corpus = vec![
            course("c", 10, 3.0),
            course("a", 100, 4.0),
            course("b", 50, 5.0),
        ];

        let top = PopularityRanker::new().top(&corpus, 3);
        let ids: Vec<&str> = top.iter().map(|c| c.course_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_truncates_to_limit() {
        let corpus: Vec<Course> = (0..10).map(|i| course(&i.to_string(), i, 0.0)).collect();

        let top = PopularityRanker::new().top(&corpus, 4);
        assert_eq!(top.len(), 4);
    }

    #[test]
    fn test_emitted_score_is_fixed() {
        let corpus = vec![course("a", 1000, 5.0)];
        let top = PopularityRanker::new().top(&corpus, 1);

        assert_eq!(top[0].score, 1.0);
        assert_eq!(top[0].source, CandidateSource::Popularity);
    }

    #[test]
    fn test_ties_keep_corpus_order() {
        let corpus = vec![
            course("first", 10, 2.0),
            course("second", 10, 2.0),
        ];

        let top = PopularityRanker::new().top(&corpus, 2);
        assert_eq!(top[0].course_id, "first");
        assert_eq!(top[1].course_id, "second");
    }

    #[test]
    fn test_empty_corpus_yields_empty_ranking() {
        let top = PopularityRanker::new().top(&[], 5);
        assert!(top.is_empty());
    }
}
