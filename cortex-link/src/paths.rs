//! Path-backed collections: stimuli and resources.
//!
//! The two collections are structurally identical (only the host accessor
//! and the label differ), so both are generated from one macro.

use crate::linked::LinkedMap;
use cortex0::error::LinkError;
use cortex0::host::HostPlatform;
use std::collections::HashMap;

macro_rules! path_collection {
    ($name:ident, $label:literal, $accessor:ident, $doc:expr) => {
        #[doc = $doc]
        pub struct $name {
            inner: LinkedMap<String>,
        }

        impl $name {
            /// Build from the configured logical name → local path mapping.
            pub fn new(paths: HashMap<String, String>) -> Self {
                Self {
                    inner: LinkedMap::new($label, paths),
                }
            }

            /// Substitute every local path with the hosted URL. A name the
            /// host cannot bind keeps its local path with a warning.
            pub fn link(&mut self, host: &dyn HostPlatform) -> Result<(), LinkError> {
                self.inner.link_with(|name, path| match host.$accessor(name) {
                    Ok(url) => *path = url,
                    Err(error) => tracing::warn!(
                        entry = name,
                        error = %error,
                        concat!($label, " was not bound")
                    ),
                })
            }

            /// Local path: values are kept untouched. Each path is expected
            /// to end with its own logical key; a mismatch is linted, not
            /// fatal.
            pub fn link_local(&mut self) -> Result<(), LinkError> {
                self.inner.link_with(|name, path| {
                    if !path.ends_with(name) {
                        tracing::warn!(
                            entry = name,
                            path = %path,
                            concat!($label, " named inconsistently")
                        );
                    }
                })
            }

            /// The path or URL of one entry.
            pub fn get(&self, name: &str) -> Result<&String, LinkError> {
                self.inner.get(name)
            }

            /// The full mapping; only valid once linked.
            pub fn get_all(&self) -> Result<&HashMap<String, String>, LinkError> {
                self.inner.get_all()
            }

            /// Every path or URL in the collection; only valid once linked.
            pub fn urls(&self) -> Result<Vec<String>, LinkError> {
                self.inner.get_all().map(|m| m.values().cloned().collect())
            }

            /// Number of configured entries.
            pub fn len(&self) -> usize {
                self.inner.len()
            }

            /// Whether no entries are configured. Usable before linking;
            /// this is what decides whether a preload step is injected.
            pub fn is_empty(&self) -> bool {
                self.inner.is_empty()
            }

            /// Whether linking has completed.
            pub fn is_linked(&self) -> bool {
                self.inner.is_linked()
            }
        }
    };
}

path_collection!(
    Stimuli,
    "stimulus",
    stimuli_url,
    "Stimulus paths presented during trials, remote-substituted when hosted."
);

path_collection!(
    Resources,
    "resource",
    resource_url,
    "Downloadable resource paths, remote-substituted when hosted."
);
