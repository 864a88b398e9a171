//! Prometheus metrics for the statistics producer

use metrics::describe_counter;
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;
use tracing::info;

pub const EVENTS_PUBLISHED: &str = "statistics_events_published_total";
pub const EVENTS_FAILED: &str = "statistics_events_failed_total";
pub const EVENTS_DROPPED: &str = "statistics_events_dropped_total";

static PROMETHEUS_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Install the global Prometheus recorder.
///
/// Call this once at startup. Subsequent calls return the same handle.
pub fn init_metrics() -> Result<&'static PrometheusHandle, BuildError> {
    PROMETHEUS_HANDLE.get_or_try_init(|| {
        let handle = PrometheusBuilder::new().install_recorder()?;
        describe_metrics();
        info!("Prometheus metrics initialized");
        Ok(handle)
    })
}

/// Get the Prometheus handle (must call init_metrics first)
pub fn prometheus_handle() -> Option<&'static PrometheusHandle> {
    PROMETHEUS_HANDLE.get()
}

/// Axum handler for the /metrics endpoint
pub async fn metrics_handler() -> String {
    match prometheus_handle() {
        Some(handle) => handle.render(),
        None => "# Metrics not initialized\n".to_string(),
    }
}

/// Register descriptions with whichever recorder is current.
pub fn describe_metrics() {
    describe_counter!(EVENTS_PUBLISHED, "Statistics events delivered to the sink");
    describe_counter!(EVENTS_FAILED, "Statistics events the sink rejected");
    describe_counter!(
        EVENTS_DROPPED,
        "Statistics events dropped before queueing, by reason"
    );
}
