//! HTTP API route definitions.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{health, list_files, metrics_text, openapi, AppState};

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Catalog
        .route("/files", get(list_files))
        // Health endpoints
        .route("/health", get(health))
        // Observability
        .route("/metrics", get(metrics_text))
        .route("/api-docs/openapi.json", get(openapi))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
