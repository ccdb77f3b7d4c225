//! Prometheus metrics for upstream calls and rendered views.
//!
//! The macros are no-ops until a recorder is installed, so library code and
//! tests record unconditionally.

use std::time::Duration;

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::{info, warn};

use crate::error::Result;

pub const UPSTREAM_REQUESTS_TOTAL: &str = "pokedex_upstream_requests_total";
pub const UPSTREAM_REQUEST_DURATION_SECONDS: &str = "pokedex_upstream_request_duration_seconds";
pub const VIEWS_RENDERED_TOTAL: &str = "pokedex_views_rendered_total";

const UPKEEP_INTERVAL: Duration = Duration::from_secs(5);

/// Install the global Prometheus recorder and spawn its upkeep task. Returns
/// `None` if a recorder is already installed. Must run inside a tokio runtime.
pub fn init_metrics() -> Option<PrometheusHandle> {
    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            let upkeep = handle.clone();
            tokio::spawn(async move {
                let mut interval = tokio::time::interval(UPKEEP_INTERVAL);
                loop {
                    interval.tick().await;
                    upkeep.run_upkeep();
                }
            });
            info!("Prometheus recorder installed; scrape /metrics");
            Some(handle)
        }
        Err(e) => {
            warn!("Prometheus recorder install failed (possibly already installed): {}", e);
            None
        }
    }
}

pub struct UpstreamMetrics;

impl UpstreamMetrics {
    pub fn record<T>(result: &Result<T>, duration_secs: f64) {
        let outcome = match result {
            Ok(_) => "ok",
            Err(e) => e.kind(),
        };
        ::metrics::counter!(UPSTREAM_REQUESTS_TOTAL, "outcome" => outcome).increment(1);
        ::metrics::histogram!(UPSTREAM_REQUEST_DURATION_SECONDS).record(duration_secs);
    }
}

pub struct ViewMetrics;

impl ViewMetrics {
    pub fn record(view: &'static str, is_error: bool) {
        let outcome = if is_error { "error" } else { "ok" };
        ::metrics::counter!(VIEWS_RENDERED_TOTAL, "view" => view, "outcome" => outcome)
            .increment(1);
    }
}
