//! Application state shared across handlers.

use std::sync::Arc;

use recommender::HybridRecommender;

/// Shared handler state: the recommendation engine.
#[derive(Clone)]
pub struct AppState {
    pub recommender: Arc<HybridRecommender>,
}
