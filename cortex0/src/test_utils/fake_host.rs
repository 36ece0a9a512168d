//! FakeHost — scripted host platform for testing.

use crate::error::HostError;
use crate::host::HostPlatform;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Scripted host platform. Accessor responses come from maps populated up
/// front; every accessor call is counted so tests can assert that linking
/// touches each entry exactly once. Names with no scripted response fail
/// with [`HostError::Unbound`], modelling a linking gap.
#[derive(Default)]
pub struct FakeHost {
    manipulations: HashMap<String, String>,
    stimuli: HashMap<String, String>,
    resources: HashMap<String, String>,
    manipulation_calls: AtomicUsize,
    stimuli_calls: AtomicUsize,
    resource_calls: AtomicUsize,
    ready_calls: AtomicUsize,
    metrics: Mutex<Vec<serde_json::Value>>,
    finished: AtomicBool,
}

impl FakeHost {
    /// Create a host with no scripted responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a manipulation response.
    pub fn with_manipulation(mut self, name: impl Into<String>, raw: impl Into<String>) -> Self {
        self.manipulations.insert(name.into(), raw.into());
        self
    }

    /// Script a stimulus URL response.
    pub fn with_stimulus(mut self, name: impl Into<String>, url: impl Into<String>) -> Self {
        self.stimuli.insert(name.into(), url.into());
        self
    }

    /// Script a resource URL response.
    pub fn with_resource(mut self, name: impl Into<String>, url: impl Into<String>) -> Self {
        self.resources.insert(name.into(), url.into());
        self
    }

    /// How many times `manipulation` was called.
    pub fn manipulation_calls(&self) -> usize {
        self.manipulation_calls.load(Ordering::SeqCst)
    }

    /// How many times `stimuli_url` was called.
    pub fn stimuli_calls(&self) -> usize {
        self.stimuli_calls.load(Ordering::SeqCst)
    }

    /// How many times `resource_url` was called.
    pub fn resource_calls(&self) -> usize {
        self.resource_calls.load(Ordering::SeqCst)
    }

    /// How many times `ready` was awaited.
    pub fn ready_calls(&self) -> usize {
        self.ready_calls.load(Ordering::SeqCst)
    }

    /// Every metric payload received, in order.
    pub fn metrics(&self) -> Vec<serde_json::Value> {
        self.metrics
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Whether `finish` was called.
    pub fn finished(&self) -> bool {
        self.finished.load(Ordering::SeqCst)
    }

    fn lookup(
        map: &HashMap<String, String>,
        kind: &'static str,
        name: &str,
    ) -> Result<String, HostError> {
        map.get(name).cloned().ok_or_else(|| HostError::Unbound {
            kind,
            name: name.to_owned(),
        })
    }
}

#[async_trait]
impl HostPlatform for FakeHost {
    async fn ready(&self) -> Result<(), HostError> {
        self.ready_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn manipulation(&self, name: &str) -> Result<String, HostError> {
        self.manipulation_calls.fetch_add(1, Ordering::SeqCst);
        Self::lookup(&self.manipulations, "manipulation", name)
    }

    fn stimuli_url(&self, name: &str) -> Result<String, HostError> {
        self.stimuli_calls.fetch_add(1, Ordering::SeqCst);
        Self::lookup(&self.stimuli, "stimulus", name)
    }

    fn resource_url(&self, name: &str) -> Result<String, HostError> {
        self.resource_calls.fetch_add(1, Ordering::SeqCst);
        Self::lookup(&self.resources, "resource", name)
    }

    fn metric(&self, data: serde_json::Value) {
        self.metrics
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(data);
    }

    fn finish(&self) {
        self.finished.store(true, Ordering::SeqCst);
    }
}
