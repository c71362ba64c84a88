//! Metrics collection and exposition.
//!
//! # Metrics
//! - `dashboard_requests_total` (counter): API responses by route, status
//! - `dashboard_proxy_fetch_duration_seconds` (histogram): upstream fetch latency by outcome
//!
//! # Design Decisions
//! - Exporter is opt-in (`observability.metrics_enabled`)
//! - Route labels use the matched template, not the raw path

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Start the Prometheus scrape endpoint on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Count one API response.
pub fn record_request(route: &str, status: u16) {
    counter!(
        "dashboard_requests_total",
        "route" => route.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}

/// Record how long one proxied fetch took.
pub fn record_fetch(outcome: &'static str, start_time: Instant) {
    histogram!("dashboard_proxy_fetch_duration_seconds", "outcome" => outcome)
        .record(start_time.elapsed().as_secs_f64());
}
