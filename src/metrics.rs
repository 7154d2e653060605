//! Prometheus metrics for request counting and latency tracking.

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::debug;

use crate::error::Result;
use crate::instance::ServiceVariant;

// === Metric Name Constants ===

/// HTTP request latency metric name.
pub const METRIC_HTTP_REQUEST_LATENCY: &str = "http_request_latency_ms";
/// `/files` requests counter metric name.
pub const METRIC_FILES_REQUESTS: &str = "files_requests_total";

// === Endpoint labels ===

pub const ENDPOINT_FILES: &str = "/files";
pub const ENDPOINT_HEALTH: &str = "/health";

/// Install the global Prometheus recorder and return a handle for rendering.
pub fn install_recorder() -> Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    Ok(handle)
}

/// Initialize all metric descriptions.
/// Call this once at startup, after the recorder is installed.
pub fn init_metrics() {
    describe_histogram!(
        METRIC_HTTP_REQUEST_LATENCY,
        "HTTP request latency in milliseconds"
    );
    describe_counter!(
        METRIC_FILES_REQUESTS,
        "Total number of /files requests served"
    );

    debug!("Metrics initialized");
}

/// Increment the `/files` request counter.
pub fn inc_files_requests(variant: ServiceVariant) {
    counter!(METRIC_FILES_REQUESTS, "variant" => variant.to_string()).increment(1);
}

/// RAII guard for timing requests.
/// Automatically records latency when dropped.
pub struct LatencyTimer {
    start: Instant,
    endpoint: &'static str,
}

impl LatencyTimer {
    /// Create a new latency timer for the given endpoint.
    pub fn new(endpoint: &'static str) -> Self {
        Self {
            start: Instant::now(),
            endpoint,
        }
    }

    /// Get elapsed time in milliseconds (without recording).
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for LatencyTimer {
    fn drop(&mut self) {
        histogram!(METRIC_HTTP_REQUEST_LATENCY, "endpoint" => self.endpoint)
            .record(self.elapsed_ms());
    }
}

/// Create a latency timer for an HTTP endpoint.
pub fn timer_http(endpoint: &'static str) -> LatencyTimer {
    LatencyTimer::new(endpoint)
}
