//! Metrics collection and exposition.
//!
//! # Metrics
//! - `recommendation_requests_total` (counter): requests by outcome
//! - `recommendation_request_duration_seconds` (histogram): handler latency
//! - `partner_requests_total` (counter): partner calls by final status, or
//!   `timeout` / `error` when no response arrived
//! - `partner_retries_total` (counter): retried partner attempts

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Instant;

use crate::partner::AvailabilityError;

/// Install the Prometheus exporter listening on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one finished recommendation request.
pub fn record_recommendation(outcome: &'static str, start: Instant) {
    metrics::counter!("recommendation_requests_total", "outcome" => outcome).increment(1);
    metrics::histogram!("recommendation_request_duration_seconds")
        .record(start.elapsed().as_secs_f64());
}

/// Record the final response status of a partner call.
pub fn record_partner_response(status: u16) {
    metrics::counter!("partner_requests_total", "status" => status.to_string()).increment(1);
}

/// Record a partner call that ended without a response.
pub fn record_partner_failure(error: &AvailabilityError) {
    metrics::counter!("partner_requests_total", "status" => failure_label(error)).increment(1);
}

/// `status` label for a partner call that produced no response.
pub fn failure_label(error: &AvailabilityError) -> &'static str {
    if error.is_timeout() {
        "timeout"
    } else {
        "error"
    }
}

pub fn record_partner_retry() {
    metrics::counter!("partner_retries_total").increment(1);
}
