//! RecordingRuntime — run-time double that records every interaction.

use crate::error::RuntimeError;
use crate::runtime::{RunParameters, Runtime, TrialSink};
use crate::screen::FailureScreen;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Run-time double. `init` succeeds immediately and stashes the parameters
/// and sink so a test can drive trial callbacks by hand.
#[derive(Default)]
pub struct RecordingRuntime {
    inits: Mutex<Vec<RunParameters>>,
    sink: Mutex<Option<Arc<dyn TrialSink>>>,
    ended: Mutex<Vec<String>>,
    exports: Mutex<Vec<String>>,
    failures: Mutex<Vec<FailureScreen>>,
    clears: AtomicUsize,
}

impl RecordingRuntime {
    /// Create a fresh recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parameters of every `init` call, in order.
    pub fn inits(&self) -> Vec<RunParameters> {
        self.inits.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Parameters of the most recent `init` call.
    pub fn last_init(&self) -> Option<RunParameters> {
        self.inits
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .last()
            .cloned()
    }

    /// The sink handed to the most recent `init`, for driving trial
    /// callbacks from a test.
    pub fn sink(&self) -> Option<Arc<dyn TrialSink>> {
        self.sink.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Every `end_experiment` message, in order.
    pub fn ended(&self) -> Vec<String> {
        self.ended.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Every export filename, in order.
    pub fn exports(&self) -> Vec<String> {
        self.exports
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Every failure screen shown, in order.
    pub fn failures(&self) -> Vec<FailureScreen> {
        self.failures
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// How many times the display was cleared.
    pub fn clears(&self) -> usize {
        self.clears.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Runtime for RecordingRuntime {
    async fn init(
        &self,
        parameters: RunParameters,
        sink: Arc<dyn TrialSink>,
    ) -> Result<(), RuntimeError> {
        self.inits
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(parameters);
        *self.sink.lock().unwrap_or_else(|e| e.into_inner()) = Some(sink);
        Ok(())
    }

    fn end_experiment(&self, message: &str) {
        self.ended
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(message.to_owned());
    }

    fn save_export(&self, filename: &str) -> Result<(), RuntimeError> {
        self.exports
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(filename.to_owned());
        Ok(())
    }

    fn clear_display(&self) {
        self.clears.fetch_add(1, Ordering::SeqCst);
    }

    fn show_failure(&self, screen: &FailureScreen) -> Result<(), RuntimeError> {
        self.failures
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(screen.clone());
        Ok(())
    }
}
