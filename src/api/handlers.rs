//! HTTP API handlers.
//!
//! Both handlers return fixed payloads. The prediction handler is a
//! placeholder: it takes no extractors, so any request body is dropped
//! unread. Real inference replaces it once the input/output schema exists.

use axum::{response::IntoResponse, Json};
use serde::Serialize;

/// Readiness message returned by the root endpoint.
pub const READY_MESSAGE: &str = "Model server is ready";

/// Placeholder value returned by the prediction endpoint.
pub const FAKE_PREDICTION: &str = "fake prediction";

/// Root endpoint response.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    /// Readiness message.
    pub message: &'static str,
}

/// Prediction endpoint response.
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    /// Placeholder prediction value.
    pub prediction: &'static str,
}

/// Root handler - always returns 200 with the readiness message.
pub async fn root() -> impl IntoResponse {
    Json(RootResponse {
        message: READY_MESSAGE,
    })
}

/// Prediction handler - always returns 200 with the placeholder prediction.
///
/// The request body is intentionally ignored, not validated.
pub async fn predict() -> impl IntoResponse {
    Json(PredictResponse {
        prediction: FAKE_PREDICTION,
    })
}
