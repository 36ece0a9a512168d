//! Platform-appropriate trial sinks.

use chrono::Utc;
use cortex0::host::HostPlatform;
use cortex0::runtime::{Runtime, TrialSink};
use std::sync::Arc;

/// Hosted sink: every trial's data goes to the host metrics endpoint and
/// the host finalises the session when the timeline completes.
pub(crate) struct MetricSink {
    host: Arc<dyn HostPlatform>,
}

impl MetricSink {
    pub(crate) fn new(host: Arc<dyn HostPlatform>) -> Self {
        Self { host }
    }
}

impl TrialSink for MetricSink {
    fn on_data_update(&self, data: serde_json::Value) {
        self.host.metric(data);
    }

    fn on_finish(&self) {
        tracing::info!("timeline complete, finalising hosted session");
        self.host.finish();
    }
}

/// Standalone sink: when the timeline completes, the recorded data is
/// exported through the run-time under a timestamped filename.
pub(crate) struct ExportSink {
    runtime: Arc<dyn Runtime>,
}

impl ExportSink {
    pub(crate) fn new(runtime: Arc<dyn Runtime>) -> Self {
        Self { runtime }
    }
}

impl TrialSink for ExportSink {
    fn on_data_update(&self, _data: serde_json::Value) {}

    fn on_finish(&self) {
        let filename = format!("experiment_complete_{}.csv", Utc::now().timestamp_millis());
        tracing::info!(filename = %filename, "timeline complete, exporting data");
        if let Err(error) = self.runtime.save_export(&filename) {
            tracing::error!(error = %error, "data export failed");
        }
    }
}
