//! Metrics collection and exposition.
//!
//! # Metrics
//! - `string_lab_requests_total` (counter): requests by method, path, status
//! - `string_lab_request_duration_seconds` (histogram): latency distribution
//! - `string_lab_conversions_total` (counter): conversions by algorithm, outcome
//! - `string_lab_generated_chars_total` (counter): characters generated
//!
//! Without an installed recorder every call here is a no-op, so handlers
//! record unconditionally.

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Start the Prometheus scrape endpoint on `addr`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()?;

    tracing::info!(address = %addr, "Metrics endpoint started");
    Ok(())
}

/// Record a completed HTTP request.
pub fn record_request(method: &str, path: &str, status: u16, start: Instant) {
    counter!(
        "string_lab_requests_total",
        "method" => method.to_string(),
        "path" => path.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!(
        "string_lab_request_duration_seconds",
        "method" => method.to_string(),
        "path" => path.to_string()
    )
    .record(start.elapsed().as_secs_f64());
}

/// Record a conversion attempt. `outcome` is `ok` or `rejected`.
pub fn record_conversion(algorithm: &str, outcome: &'static str) {
    counter!(
        "string_lab_conversions_total",
        "algorithm" => algorithm.to_string(),
        "outcome" => outcome
    )
    .increment(1);
}

pub fn record_generated(chars: usize) {
    counter!("string_lab_generated_chars_total").increment(chars as u64);
}
