//! HTTP API route definitions.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::handlers::{predict, root};

/// Create the API router.
///
/// The service is stateless, so the router carries no shared state.
pub fn create_router() -> Router {
    Router::new()
        // Health/root endpoint
        .route("/", get(root))
        // Placeholder prediction endpoint
        .route("/predict", post(predict))
        .layer(TraceLayer::new_for_http())
}
