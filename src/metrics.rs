//! Request metrics recorded through the `metrics` facade.
//!
//! Nothing is exported by this crate itself; the calls are no-ops until a
//! recorder is installed by whatever embeds the router.

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use metrics::{counter, describe_counter, describe_histogram, histogram};
use tracing::debug;

/// HTTP request latency metric name.
pub const METRIC_HTTP_REQUEST_LATENCY: &str = "http_request_latency_ms";
/// HTTP requests counter metric name.
pub const METRIC_HTTP_REQUESTS: &str = "http_requests_total";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_histogram!(
        METRIC_HTTP_REQUEST_LATENCY,
        "HTTP request latency in milliseconds"
    );
    describe_counter!(METRIC_HTTP_REQUESTS, "Total number of HTTP requests served");

    debug!("Metrics initialized");
}

/// Record HTTP request latency.
pub fn record_http_latency(start: Instant, endpoint: &str) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(METRIC_HTTP_REQUEST_LATENCY, "endpoint" => endpoint.to_string()).record(latency_ms);
}

/// Increment the request counter for an endpoint and status code.
pub fn inc_http_requests(endpoint: &str, status: u16) {
    counter!(
        METRIC_HTTP_REQUESTS,
        "endpoint" => endpoint.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}

/// Label used for a request: the matched route, or the raw path otherwise.
pub fn endpoint_label(request: &Request) -> String {
    request
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| request.uri().path().to_string(), |p| p.as_str().to_string())
}

/// Route-level middleware recording count and latency per endpoint.
pub async fn track_http(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let endpoint = endpoint_label(&request);

    let response = next.run(request).await;

    record_http_latency(start, &endpoint);
    inc_http_requests(&endpoint, response.status().as_u16());
    response
}
