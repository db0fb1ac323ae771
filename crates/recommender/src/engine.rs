//! # Hybrid Recommender
//!
//! This module coordinates the recommendation pipeline:
//! 1. Ensure embeddings are trained (lazily, on first use)
//! 2. Fetch the user's enrollment history
//! 3. Cold-start users fall back to popularity ranking
//! 4. Otherwise expand each enrolled course into its nearest neighbors
//! 5. Merge, deduplicate, and drop already-enrolled candidates
//! 6. Rank by similarity score and truncate
//!
//! The trained embeddings live in a single guarded slot that is replaced
//! wholesale on retrain: readers clone an `Arc` snapshot and compute
//! against it, so an in-flight query never observes a half-updated
//! matrix/id pairing, and lazy training under the write lock collapses
//! concurrent trainers into one.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

use catalog::{CourseStore, EnrollmentStore, RecommendationItem, UserId};
use features::{CourseEmbeddings, FeatureExtractor};
use rankers::{similar_courses, Candidate, PopularityRanker, SimilarityError};

use crate::error::{RecommendError, Result};

/// Neighbors taken per enrolled course before merging.
pub const PER_COURSE_FANOUT: usize = 3;

/// Main orchestrator combining content similarity and popularity.
pub struct HybridRecommender {
    courses: Arc<dyn CourseStore>,
    enrollments: Arc<dyn EnrollmentStore>,
    extractor: FeatureExtractor,
    popularity: PopularityRanker,
    per_course_fanout: usize,
    /// Trained state: swapped as a unit, shared with readers via Arc
    model: RwLock<Option<Arc<CourseEmbeddings>>>,
}

impl HybridRecommender {
    /// Create a recommender over the given stores with default tuning.
    pub fn new(courses: Arc<dyn CourseStore>, enrollments: Arc<dyn EnrollmentStore>) -> Self {
        Self {
            courses,
            enrollments,
            extractor: FeatureExtractor::new(),
            popularity: PopularityRanker::new(),
            per_course_fanout: PER_COURSE_FANOUT,
            model: RwLock::new(None),
        }
    }

    /// Configure the feature extractor (default: 1000 terms, 50 dims)
    pub fn with_extractor(mut self, extractor: FeatureExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    /// Configure the per-enrollment neighbor fan-out (default: 3)
    pub fn with_per_course_fanout(mut self, fanout: usize) -> Self {
        self.per_course_fanout = fanout;
        self
    }

    /// Retrain from the full current corpus, replacing any prior model.
    ///
    /// Returns the number of courses indexed; 0 means the corpus was
    /// empty and the previous model (if any) was left in place.
    #[instrument(skip(self))]
    pub async fn train(&self) -> Result<usize> {
        let mut slot = self.model.write().await;
        self.retrain(&mut slot).await
    }

    async fn retrain(&self, slot: &mut Option<Arc<CourseEmbeddings>>) -> Result<usize> {
        info!("training recommendation model");
        let corpus = self.courses.fetch_published_courses().await?;

        let extractor = self.extractor.clone();
        let trained = tokio::task::spawn_blocking(move || extractor.train(&corpus))
            .await
            .map_err(|e| RecommendError::Training(e.to_string()))?;

        match trained {
            Some(embeddings) => {
                let count = embeddings.len();
                *slot = Some(Arc::new(embeddings));
                info!("model trained with {} courses", count);
                Ok(count)
            }
            None => {
                warn!("no published courses found for training; keeping previous model");
                Ok(0)
            }
        }
    }

    /// Current model snapshot, training lazily on first use.
    ///
    /// Returns `None` only when training ran against an empty corpus.
    async fn ensure_trained(&self) -> Result<Option<Arc<CourseEmbeddings>>> {
        if let Some(model) = self.model.read().await.as_ref() {
            return Ok(Some(Arc::clone(model)));
        }

        let mut slot = self.model.write().await;
        // Another caller may have trained while we waited for the lock
        if slot.is_none() {
            self.retrain(&mut slot).await?;
        }
        Ok(slot.clone())
    }

    /// Personalized recommendations for a user.
    ///
    /// Users without enrollment history get the popularity ranking; all
    /// others get content neighbors of their enrolled courses, merged
    /// across enrollments, minus anything they are already enrolled in.
    #[instrument(skip(self))]
    pub async fn recommend(
        &self,
        user_id: &UserId,
        limit: usize,
    ) -> Result<Vec<RecommendationItem>> {
        let model = self.ensure_trained().await?;
        let enrollments = self.enrollments.fetch_user_enrollments(user_id).await?;

        if enrollments.is_empty() {
            debug!("user {} has no history; falling back to popularity", user_id);
            let corpus = self.courses.fetch_published_courses().await?;
            return Ok(self
                .popularity
                .top(&corpus, limit)
                .into_iter()
                .map(Into::into)
                .collect());
        }

        let Some(model) = model else {
            warn!("model untrained (empty corpus); returning no recommendations");
            return Ok(Vec::new());
        };

        let enrolled_set: HashSet<&str> =
            enrollments.iter().map(|e| e.course_id.as_str()).collect();

        // One similarity query per enrolled course, in fetch order
        let mut pool: Vec<Candidate> = Vec::new();
        for enrollment in &enrollments {
            match similar_courses(&model, &enrollment.course_id, self.per_course_fanout) {
                Ok(neighbors) => pool.extend(neighbors),
                Err(SimilarityError::UnknownCourse { course_id }) => {
                    warn!(
                        "enrolled course {} missing from trained corpus; skipping",
                        course_id
                    );
                }
            }
        }

        // Deduplicate keeping the first occurrence, drop enrolled courses
        let mut seen: HashSet<String> = HashSet::new();
        let mut unique: Vec<Candidate> = Vec::new();
        for candidate in pool {
            if enrolled_set.contains(candidate.course_id.as_str()) {
                continue;
            }
            if seen.insert(candidate.course_id.clone()) {
                unique.push(candidate);
            }
        }

        unique.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        unique.truncate(limit);

        debug!(
            "returning {} recommendations for user {}",
            unique.len(),
            user_id
        );
        Ok(unique.into_iter().map(Into::into).collect())
    }

    /// Courses most similar to the given course.
    ///
    /// Unknown ids yield an empty result rather than an error: this read
    /// path fails soft and logs instead.
    #[instrument(skip(self))]
    pub async fn similar(&self, course_id: &str, limit: usize) -> Result<Vec<RecommendationItem>> {
        let Some(model) = self.ensure_trained().await? else {
            return Ok(Vec::new());
        };

        match similar_courses(&model, course_id, limit) {
            Ok(neighbors) => Ok(neighbors.into_iter().map(Into::into).collect()),
            Err(SimilarityError::UnknownCourse { course_id }) => {
                warn!(
                    "course {} not found in trained corpus; returning empty result",
                    course_id
                );
                Ok(Vec::new())
            }
        }
    }
}
