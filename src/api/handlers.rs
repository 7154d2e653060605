//! HTTP API handlers.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use tracing::debug;
use utoipa::{OpenApi, ToSchema};

use crate::catalog::{Catalog, FileRecord, FilesResponse};
use crate::instance::{InstanceIdentity, ServiceVariant};
use crate::metrics::{self, ENDPOINT_FILES, ENDPOINT_HEALTH};

/// Application state shared with handlers.
///
/// Everything here is built once at startup and only read afterwards.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Pre-built `/files` body.
    pub files: Arc<FilesResponse>,
    /// Payload shape being served.
    pub variant: ServiceVariant,
    /// Prometheus handle, when a recorder is installed.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create new app state for a catalog and optional instance identity.
    pub fn new(catalog: &Catalog, identity: Option<InstanceIdentity>) -> Self {
        let variant = if identity.is_some() {
            ServiceVariant::InstanceAware
        } else {
            ServiceVariant::Plain
        };

        Self {
            files: Arc::new(FilesResponse::new(catalog, identity.as_ref())),
            variant,
            metrics: None,
        }
    }

    /// Attach a Prometheus handle for the `/metrics` endpoint.
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&Catalog::fixed(), None)
    }
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: &'static str,
}

/// List the file catalog.
#[utoipa::path(
    get,
    path = "/files",
    responses((status = 200, description = "The fixed file catalog", body = FilesResponse))
)]
pub async fn list_files(State(state): State<AppState>) -> Json<Arc<FilesResponse>> {
    let _timer = metrics::timer_http(ENDPOINT_FILES);
    metrics::inc_files_requests(state.variant);
    debug!(variant = %state.variant, "Serving file catalog");

    Json(Arc::clone(&state.files))
}

/// Health check handler - always returns 200.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is alive", body = HealthResponse))
)]
pub async fn health() -> impl IntoResponse {
    let _timer = metrics::timer_http(ENDPOINT_HEALTH);
    Json(HealthResponse { status: "ok" })
}

/// Prometheus exposition - 404 when no recorder is installed.
pub async fn metrics_text(State(state): State<AppState>) -> impl IntoResponse {
    match state.metrics {
        Some(handle) => (StatusCode::OK, handle.render()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// OpenAPI document for the service.
#[derive(OpenApi)]
#[openapi(
    paths(list_files, health),
    components(schemas(FilesResponse, FileRecord, HealthResponse))
)]
pub struct ApiDoc;

/// Serve the OpenAPI document as JSON.
pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
