//! Metrics collection and exposition.
//!
//! # Metrics
//! - `fipe_proxy_requests_total` (counter): requests by shape and status
//! - `fipe_proxy_request_duration_seconds` (histogram): latency per shape
//! - `fipe_proxy_cache_events_total` (counter): cache hits and misses
//! - `fipe_proxy_rate_limited_total` (counter): rejected requests
//!
//! # Design Decisions
//! - Recording is cheap and always on; exposition (the Prometheus listener)
//!   is opt-in via config
//! - A missing recorder makes every call a no-op, so unit tests need no setup

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter and its scrape endpoint.
pub fn init_metrics(addr: SocketAddr) {
    let builder = PrometheusBuilder::new().with_http_listener(addr);
    match builder.install() {
        Ok(()) => {
            describe_counter!(
                "fipe_proxy_requests_total",
                "Total API requests by route shape and status code"
            );
            describe_histogram!(
                "fipe_proxy_request_duration_seconds",
                "Request latency by route shape"
            );
            describe_counter!(
                "fipe_proxy_cache_events_total",
                "Response cache lookups by result"
            );
            describe_counter!(
                "fipe_proxy_rate_limited_total",
                "Requests rejected by the inbound rate limit"
            );
            tracing::info!(address = %addr, "Metrics endpoint listening");
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to install metrics exporter");
        }
    }
}

/// Record one resolved (or rejected) API request.
pub fn record_request(shape: &'static str, status: u16, start: Instant) {
    counter!(
        "fipe_proxy_requests_total",
        "shape" => shape,
        "status" => status.to_string()
    )
    .increment(1);
    histogram!("fipe_proxy_request_duration_seconds", "shape" => shape)
        .record(start.elapsed().as_secs_f64());
}

/// Record a cache hit.
pub fn record_cache_hit() {
    counter!("fipe_proxy_cache_events_total", "result" => "hit").increment(1);
}

/// Record a cache miss (including lazy expiry).
pub fn record_cache_miss() {
    counter!("fipe_proxy_cache_events_total", "result" => "miss").increment(1);
}

/// Record a request rejected by the rate limiter.
pub fn record_rate_limited() {
    counter!("fipe_proxy_rate_limited_total").increment(1);
}
