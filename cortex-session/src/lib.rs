#![deny(missing_docs)]
//! Session orchestration: platform detection, linking, and timeline start.
//!
//! A [`Session`] owns everything one experiment run needs (configuration,
//! the three linked collections, key-value state, the seeded random
//! stream, and the failure surface) and walks a small phase machine:
//!
//! ```text
//! Constructed --load()--> Loading --> Loaded --start()--> Started
//!       \__________________________any error______________/
//!                            v
//!                          Failed
//! ```
//!
//! Capabilities are injected at construction; there is exactly one live
//! session per run and collaborators receive it by reference, never
//! through ambient lookup.

mod sinks;

use cortex_link::{Manipulations, Resources, Stimuli};
use cortex_rng::Lcg64;
use cortex_screen::ErrorHandler;
use cortex_state_memory::MemoryState;
use cortex0::config::{Configuration, LogLevel};
use cortex0::error::SessionError;
use cortex0::host::HostPlatform;
use cortex0::platform::Platform;
use cortex0::runtime::{RunParameters, Runtime};
use cortex0::state::StateStore;
use serde_json::json;
use std::fmt;
use std::sync::{Arc, Mutex};

use crate::sinks::{ExportSink, MetricSink};

/// Capability providers injected at construction. Platform detection
/// inspects which of these are present; no ambient globals are probed.
#[derive(Clone, Default)]
pub struct Capabilities {
    /// The hosting platform, when the session is embedded.
    pub host: Option<Arc<dyn HostPlatform>>,
    /// The sequencing run-time.
    pub runtime: Option<Arc<dyn Runtime>>,
}

impl Capabilities {
    /// Standalone: the run-time only.
    pub fn local(runtime: Arc<dyn Runtime>) -> Self {
        Self {
            host: None,
            runtime: Some(runtime),
        }
    }

    /// Embedded: the host plus the run-time it wraps.
    pub fn hosted(host: Arc<dyn HostPlatform>, runtime: Arc<dyn Runtime>) -> Self {
        Self {
            host: Some(host),
            runtime: Some(runtime),
        }
    }
}

/// Lifecycle phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Built, platform not yet detected.
    Constructed,
    /// Detection and linking in progress.
    Loading,
    /// Linked; ready to start.
    Loaded,
    /// Timeline handed to the run-time.
    Started,
    /// Terminal. The failure screen owns the display.
    Failed,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Constructed => write!(f, "constructed"),
            Phase::Loading => write!(f, "loading"),
            Phase::Loaded => write!(f, "loaded"),
            Phase::Started => write!(f, "started"),
            Phase::Failed => write!(f, "failed"),
        }
    }
}

/// One experiment session.
pub struct Session {
    config: Configuration,
    capabilities: Capabilities,
    platform: Platform,
    phase: Phase,
    state: MemoryState,
    manipulations: Manipulations,
    resources: Resources,
    stimuli: Stimuli,
    rng: Mutex<Lcg64>,
    handler: Option<ErrorHandler>,
}

impl Session {
    /// Construct a session from its configuration and capability set.
    /// Construction is infallible; detection and linking happen in
    /// [`Session::load`].
    pub fn new(config: Configuration, capabilities: Capabilities) -> Self {
        if let Some(level) = config.logging {
            init_logging(level);
        }
        let handler = capabilities
            .runtime
            .as_ref()
            .map(|runtime| ErrorHandler::new(config.clone(), Arc::clone(runtime)));
        Self {
            state: MemoryState::new(config.state.clone()),
            manipulations: Manipulations::new(config.manipulations.clone()),
            resources: Resources::new(config.resources.clone()),
            stimuli: Stimuli::new(config.stimuli.clone()),
            rng: Mutex::new(Lcg64::from_seed(&config.seed)),
            platform: Platform::Invalid,
            phase: Phase::Constructed,
            handler,
            capabilities,
            config,
        }
    }

    /// Detect the platform and link the collections: Constructed → Loaded.
    ///
    /// Fails fast with [`SessionError::NoPlatform`] when neither capability
    /// was injected: the session can never start and `start` stays
    /// unreachable.
    pub fn load(&mut self) -> Result<(), SessionError> {
        if self.phase != Phase::Constructed {
            return Err(SessionError::AlreadyLoaded {
                phase: self.phase.to_string(),
            });
        }
        self.phase = Phase::Loading;
        match self.try_load() {
            Ok(()) => {
                self.phase = Phase::Loaded;
                Ok(())
            }
            Err(error) => {
                self.fail(&error.to_string());
                Err(error)
            }
        }
    }

    fn try_load(&mut self) -> Result<(), SessionError> {
        let platform = Platform::detect(
            self.capabilities.host.is_some(),
            self.capabilities.runtime.is_some(),
        );
        if platform == Platform::Invalid {
            tracing::error!("no valid platform detected");
            return Err(SessionError::NoPlatform);
        }
        tracing::info!(platform = %platform, "platform detected");
        self.platform = platform;

        // The three passes are independent; none reads another's collection.
        if let Some(host) = self.capabilities.host.clone() {
            self.manipulations.link(host.as_ref())?;
            self.resources.link(host.as_ref())?;
            self.stimuli.link(host.as_ref())?;
        } else {
            self.manipulations.link_local()?;
            self.resources.link_local()?;
            self.stimuli.link_local()?;
        }
        tracing::info!(
            manipulations = self.manipulations.len(),
            resources = self.resources.len(),
            stimuli = self.stimuli.len(),
            "collections linked"
        );
        Ok(())
    }

    /// Hand the timeline to the run-time: Loaded → Started.
    ///
    /// Prepends a preload step when stimuli are configured, wires the
    /// platform-appropriate trial callbacks, and on the hosted platform
    /// waits for the host's readiness signal before initialisation.
    pub async fn start(
        &mut self,
        timeline: Vec<serde_json::Value>,
    ) -> Result<(), SessionError> {
        if self.phase != Phase::Loaded {
            return Err(SessionError::NotLoaded {
                phase: self.phase.to_string(),
            });
        }
        self.phase = Phase::Started;
        match self.try_start(timeline).await {
            Ok(()) => Ok(()),
            Err(error) => {
                self.fail(&error.to_string());
                Err(error)
            }
        }
    }

    async fn try_start(&self, timeline: Vec<serde_json::Value>) -> Result<(), SessionError> {
        let runtime = self
            .capabilities
            .runtime
            .clone()
            .ok_or(SessionError::RuntimeMissing)?;

        let mut parameters = RunParameters {
            timeline,
            show_progress_bar: true,
            show_preload_progress_bar: true,
            ..RunParameters::default()
        };
        if !self.stimuli.is_empty() {
            let images = self.stimuli.urls()?;
            parameters.timeline.insert(
                0,
                json!({
                    "type": "preload",
                    "auto_preload": true,
                    "images": images.clone(),
                }),
            );
            parameters.preload_images = images;
        }

        match self.platform {
            Platform::Gorilla => {
                let host = self
                    .capabilities
                    .host
                    .clone()
                    .ok_or(SessionError::NoPlatform)?;
                parameters.display_target = Some("gorilla".to_owned());
                let sink = Arc::new(MetricSink::new(Arc::clone(&host)));
                host.ready().await?;
                tracing::info!("host ready, delegating to run-time");
                runtime.init(parameters, sink).await?;
            }
            Platform::JsPsych => {
                let sink = Arc::new(ExportSink::new(Arc::clone(&runtime)));
                tracing::info!("delegating to run-time");
                runtime.init(parameters, sink).await?;
            }
            Platform::Invalid => return Err(SessionError::NoPlatform),
        }
        Ok(())
    }

    /// Route an error to the terminal failure surface: any phase → Failed.
    ///
    /// Public so failures raised later (inside a trial callback, after
    /// `start` has returned) converge on the same screen.
    pub fn fail(&mut self, detail: &str) {
        tracing::error!(detail, "session failed");
        self.phase = Phase::Failed;
        if let Some(handler) = &self.handler {
            handler.invoke(detail);
        }
    }

    /// The configuration this session was built from.
    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    /// The detected platform. `Invalid` until `load` succeeds.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// The current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Key-value state for this run.
    pub fn state(&self) -> &dyn StateStore {
        &self.state
    }

    /// The manipulation collection.
    pub fn manipulations(&self) -> &Manipulations {
        &self.manipulations
    }

    /// The resource collection.
    pub fn resources(&self) -> &Resources {
        &self.resources
    }

    /// The stimulus collection.
    pub fn stimuli(&self) -> &Stimuli {
        &self.stimuli
    }

    /// The next deviate from the seeded stream, in `[0, 1)`.
    pub fn random(&self) -> f64 {
        self.rng.lock().unwrap_or_else(|e| e.into_inner()).random()
    }

    /// The failure surface, when a run-time is available to render it.
    pub fn error_handler(&self) -> Option<&ErrorHandler> {
        self.handler.as_ref()
    }
}

/// Honor the configured verbosity. A subscriber installed by the embedding
/// application wins; failure to install is ignored.
fn init_logging(level: LogLevel) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::from(level))
        .try_init();
}
