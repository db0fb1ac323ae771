//! Error-to-response mapping for the HTTP boundary.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use recommender::RecommendError;

/// Wrapper turning engine failures into HTTP error responses.
///
/// Only store/training failures reach this type; data-quality conditions
/// are degraded to empty results inside the engine and answer 200.
#[derive(Debug)]
pub struct ApiError(RecommendError);

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl From<RecommendError> for ApiError {
    fn from(err: RecommendError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!("request failed: {}", self.0);
        let body = ErrorBody {
            error: self.0.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
