//! The run-time protocol — the sequencing engine that presents a timeline
//! of trials to a participant.

use crate::error::RuntimeError;
use crate::screen::FailureScreen;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Parameters handed to [`Runtime::init`]. Serializable so a web run-time
/// binding can pass them across its boundary unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunParameters {
    /// Timeline nodes in presentation order. Nodes are open-ended JSON;
    /// their shape belongs to the run-time, not to this library.
    #[serde(default)]
    pub timeline: Vec<serde_json::Value>,

    /// Asset URLs to fetch before the first trial renders.
    #[serde(default)]
    pub preload_images: Vec<String>,

    /// Identifier of the display surface to mount into. Set on the hosted
    /// platform, absent standalone.
    #[serde(default)]
    pub display_target: Option<String>,

    /// Show the trial progress bar.
    #[serde(default)]
    pub show_progress_bar: bool,

    /// Show the preload progress bar.
    #[serde(default)]
    pub show_preload_progress_bar: bool,
}

/// Orchestrator-owned callbacks the run-time drives while a timeline runs.
/// The run-time doesn't know which platform it is serving; the sink does.
pub trait TrialSink: Send + Sync {
    /// Called after each trial's data is recorded.
    fn on_data_update(&self, data: serde_json::Value);

    /// Called once when the timeline completes.
    fn on_finish(&self);
}

/// The sequencing run-time. The orchestrator is purely a caller of this
/// surface; it never reimplements trial running.
#[async_trait]
pub trait Runtime: Send + Sync {
    /// Hand over control: present the timeline, driving `sink` as trials
    /// record data and when the timeline completes.
    async fn init(
        &self,
        parameters: RunParameters,
        sink: Arc<dyn TrialSink>,
    ) -> Result<(), RuntimeError>;

    /// End the session early, showing `message` to the participant.
    fn end_experiment(&self, message: &str);

    /// Persist the recorded data through the run-time's own export
    /// mechanism under `filename`.
    fn save_export(&self, filename: &str) -> Result<(), RuntimeError>;

    /// Remove any active content from the display surface, deregistering
    /// framework-managed views mounted there.
    fn clear_display(&self);

    /// Replace the display surface with the terminal failure screen.
    fn show_failure(&self, screen: &FailureScreen) -> Result<(), RuntimeError>;
}
