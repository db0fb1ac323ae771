//! Integration tests for the hybrid recommender.
//!
//! These exercise the full path: lazy training over an in-memory
//! catalog, content-based expansion, popularity fallback, and the
//! merge/dedup/exclude/rank policy.

use std::sync::Arc;

use catalog::{Course, Enrollment, InMemoryCatalog};
use rankers::PopularityRanker;
use recommender::HybridRecommender;

fn course(id: &str, title: &str, enrollments: u32, rating: f32) -> Course {
    Course {
        id: id.to_string(),
        title: title.to_string(),
        description: None,
        level: None,
        category: None,
        average_rating: rating,
        enrollments_count: enrollments,
    }
}

fn enrollment(user_id: &str, course_id: &str) -> Enrollment {
    Enrollment {
        user_id: user_id.to_string(),
        course_id: course_id.to_string(),
        progress: 50.0,
        is_completed: false,
        category_id: None,
    }
}

/// Catalog of three text-distinct courses plus one enrolled user.
fn sample_catalog() -> InMemoryCatalog {
    let mut catalog = InMemoryCatalog::new();
    catalog.insert_course(course("a", "python ml course", 100, 4.0));
    catalog.insert_course(course("b", "python data course", 50, 5.0));
    catalog.insert_course(course("c", "cooking basics", 10, 3.0));
    catalog.insert_enrollment(enrollment("learner", "a"));
    catalog
}

fn recommender_over(catalog: InMemoryCatalog) -> HybridRecommender {
    let store = Arc::new(catalog);
    HybridRecommender::new(store.clone(), store)
}

#[tokio::test]
async fn test_similar_ranks_shared_vocabulary_above_unrelated() {
    let recommender = recommender_over(sample_catalog());

    let similar = recommender.similar("a", 2).await.unwrap();
    assert_eq!(similar.len(), 2);
    assert_eq!(similar[0].course_id, "b", "python course should rank first");
    assert_eq!(similar[1].course_id, "c");
    assert!(similar[0].similarity_score > similar[1].similarity_score);
}

#[tokio::test]
async fn test_similar_never_includes_the_query_course() {
    let recommender = recommender_over(sample_catalog());

    for k in 1..=5 {
        let similar = recommender.similar("a", k).await.unwrap();
        assert!(similar.iter().all(|item| item.course_id != "a"));
        assert!(similar.len() <= k);
    }
}

#[tokio::test]
async fn test_similar_unknown_course_fails_soft() {
    let recommender = recommender_over(sample_catalog());

    let similar = recommender.similar("nonexistent", 5).await.unwrap();
    assert!(similar.is_empty());
}

#[tokio::test]
async fn test_recommend_excludes_enrolled_courses() {
    let recommender = recommender_over(sample_catalog());

    let recs = recommender.recommend(&"learner".to_string(), 5).await.unwrap();
    assert!(!recs.is_empty());
    assert!(
        recs.iter().all(|item| item.course_id != "a"),
        "enrolled course leaked into recommendations"
    );
}

#[tokio::test]
async fn test_recommend_respects_limit() {
    let recommender = recommender_over(sample_catalog());

    let recs = recommender.recommend(&"learner".to_string(), 1).await.unwrap();
    assert_eq!(recs.len(), 1);
}

#[tokio::test]
async fn test_cold_start_matches_popularity_ranking() {
    let recommender = recommender_over(sample_catalog());

    // Composite scores: a=190, b=185, c=97
    let recs = recommender.recommend(&"newcomer".to_string(), 3).await.unwrap();

    let expected: Vec<catalog::RecommendationItem> = PopularityRanker::new()
        .top(
            &[
                course("a", "python ml course", 100, 4.0),
                course("b", "python data course", 50, 5.0),
                course("c", "cooking basics", 10, 3.0),
            ],
            3,
        )
        .into_iter()
        .map(Into::into)
        .collect();

    assert_eq!(recs, expected);
    assert_eq!(recs[0].course_id, "a");
    assert!(recs.iter().all(|item| item.similarity_score == 1.0));
    assert!(recs.iter().all(|item| item.reason.as_deref() == Some("popular")));
}

#[tokio::test]
async fn test_cold_start_top_one_picks_highest_composite() {
    let recommender = recommender_over(sample_catalog());

    // 100*0.7 + 4*100*0.3 = 190 beats 50*0.7 + 5*100*0.3 = 185
    let recs = recommender.recommend(&"newcomer".to_string(), 1).await.unwrap();
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].course_id, "a");
}

#[tokio::test]
async fn test_recommend_merges_across_enrollments_without_duplicates() {
    let mut catalog = InMemoryCatalog::new();
    catalog.insert_course(course("a", "python ml course", 10, 4.0));
    catalog.insert_course(course("b", "python data course", 10, 4.0));
    catalog.insert_course(course("c", "python web course", 10, 4.0));
    catalog.insert_course(course("d", "cooking basics", 10, 4.0));
    // Both enrollments will surface overlapping python neighbors
    catalog.insert_enrollment(enrollment("learner", "a"));
    catalog.insert_enrollment(enrollment("learner", "b"));

    let recommender = recommender_over(catalog);
    let recs = recommender.recommend(&"learner".to_string(), 10).await.unwrap();

    // No duplicates, no enrolled courses
    let mut ids: Vec<&str> = recs.iter().map(|item| item.course_id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), recs.len(), "duplicate course in recommendations");
    assert!(recs.iter().all(|item| item.course_id != "a" && item.course_id != "b"));

    // Scores sorted descending
    for pair in recs.windows(2) {
        assert!(pair[0].similarity_score >= pair[1].similarity_score);
    }
}

#[tokio::test]
async fn test_training_is_idempotent_for_similarity_results() {
    let recommender = recommender_over(sample_catalog());

    recommender.train().await.unwrap();
    let first = recommender.similar("a", 2).await.unwrap();

    recommender.train().await.unwrap();
    let second = recommender.similar("a", 2).await.unwrap();

    assert_eq!(first, second, "retraining an unchanged corpus changed results");
}

#[tokio::test]
async fn test_empty_catalog_degrades_to_empty_results() {
    let recommender = recommender_over(InMemoryCatalog::new());

    assert_eq!(recommender.train().await.unwrap(), 0);
    assert!(recommender.similar("a", 5).await.unwrap().is_empty());
    assert!(recommender
        .recommend(&"anyone".to_string(), 5)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_enrollment_in_unpublished_course_is_skipped() {
    let mut catalog = InMemoryCatalog::new();
    catalog.insert_course(course("a", "python ml course", 10, 4.0));
    catalog.insert_course(course("b", "python data course", 10, 4.0));
    // The enrolled course never made it into the published corpus
    catalog.insert_enrollment(enrollment("learner", "ghost"));
    catalog.insert_enrollment(enrollment("learner", "a"));

    let recommender = recommender_over(catalog);
    let recs = recommender.recommend(&"learner".to_string(), 5).await.unwrap();

    // The ghost enrollment contributes nothing; "a" still expands to "b"
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].course_id, "b");
}
