#![deny(missing_docs)]
//! In-memory implementation of cortex0's StateStore trait.
//!
//! Uses a `HashMap` behind a `RwLock`. The construction-time snapshot is
//! held separately from the live map and deep-copied on construction and
//! on every reset, so writes through `current` can never corrupt the
//! pristine initial values.

use cortex0::state::StateStore;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory session state backed by a `HashMap` behind a `RwLock`.
pub struct MemoryState {
    initial: HashMap<String, Value>,
    current: RwLock<HashMap<String, Value>>,
}

impl MemoryState {
    /// Create from the configured initial key-value map.
    pub fn new(initial: HashMap<String, Value>) -> Self {
        Self {
            current: RwLock::new(initial.clone()),
            initial,
        }
    }
}

impl Default for MemoryState {
    fn default() -> Self {
        Self::new(HashMap::new())
    }
}

impl StateStore for MemoryState {
    fn get(&self, key: &str) -> Option<Value> {
        let data = self.current.read().unwrap_or_else(|e| e.into_inner());
        match data.get(key) {
            Some(value) => Some(value.clone()),
            None => {
                tracing::error!(key, "state component not found");
                None
            }
        }
    }

    fn set(&self, key: &str, value: Value) {
        // Storing the explicit "absent" sentinel is never a good idea.
        if value.is_null() {
            tracing::error!(key, "state component value must be defined");
            return;
        }
        let mut data = self.current.write().unwrap_or_else(|e| e.into_inner());
        if !data.contains_key(key) {
            // State components should be declared up front, not grown
            // mid-run. Accept the write anyway.
            tracing::warn!(key, "state component initialised after session start");
        }
        data.insert(key.to_owned(), value);
    }

    fn reset(&self) {
        let mut data = self.current.write().unwrap_or_else(|e| e.into_inner());
        *data = self.initial.clone();
    }

    fn keys(&self) -> Vec<String> {
        let data = self.current.read().unwrap_or_else(|e| e.into_inner());
        data.keys().cloned().collect()
    }
}
