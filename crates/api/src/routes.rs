//! HTTP routes for the recommendation service.
//!
//! Thin handlers over the hybrid recommender: parse path/query input,
//! call the engine, shape the JSON response. All recommendation logic
//! lives below this layer.

use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use catalog::RecommendationItem;

use crate::error::ApiError;
use crate::state::AppState;

const DEFAULT_RECOMMENDATIONS_LIMIT: usize = 10;
const DEFAULT_SIMILAR_LIMIT: usize = 5;

/// Build the service router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/recommendations/{user_id}", get(get_recommendations))
        .route("/api/similar-courses/{course_id}", get(get_similar_courses))
        .route("/api/train", post(train_model))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct LimitParams {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub user_id: String,
    pub recommendations: Vec<RecommendationItem>,
}

#[derive(Debug, Serialize)]
pub struct SimilarCoursesResponse {
    pub course_id: String,
    pub similar_courses: Vec<RecommendationItem>,
}

#[derive(Debug, Serialize)]
pub struct TrainResponse {
    pub message: &'static str,
}

// ============================================================================
// Handlers
// ============================================================================

/// Liveness probe; checks nothing beyond the process itself.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        service: "course-recommendation-engine",
    })
}

/// Personalized recommendations for a user.
async fn get_recommendations(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(params): Query<LimitParams>,
) -> Result<Json<RecommendationsResponse>, ApiError> {
    let limit = params.limit.unwrap_or(DEFAULT_RECOMMENDATIONS_LIMIT);
    let recommendations = state.recommender.recommend(&user_id, limit).await?;

    Ok(Json(RecommendationsResponse {
        user_id,
        recommendations,
    }))
}

/// Courses similar to a given course.
async fn get_similar_courses(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
    Query(params): Query<LimitParams>,
) -> Result<Json<SimilarCoursesResponse>, ApiError> {
    let limit = params.limit.unwrap_or(DEFAULT_SIMILAR_LIMIT);
    let similar_courses = state.recommender.similar(&course_id, limit).await?;

    Ok(Json(SimilarCoursesResponse {
        course_id,
        similar_courses,
    }))
}

/// Retrain the model from the full current corpus.
async fn train_model(State(state): State<AppState>) -> Result<Json<TrainResponse>, ApiError> {
    state.recommender.train().await?;

    Ok(Json(TrainResponse {
        message: "Model trained successfully",
    }))
}
