//! # cortex0 — Protocol traits for platform-agnostic experiment sessions
//!
//! This crate defines the protocol boundaries that let an experiment
//! timeline execute unchanged whether it runs standalone against a local
//! sequencing run-time or embedded inside an online hosting platform.
//!
//! ## The Protocols
//!
//! | Protocol | Trait | What it does |
//! |----------|-------|-------------|
//! | Host platform | [`HostPlatform`] | Remote-backed values, metrics, session finalisation |
//! | Run-time | [`Runtime`] | Presents a timeline of trials to a participant |
//! | State | [`StateStore`] | Mutable key-value data shared across trials |
//! | Trial sink | [`TrialSink`] | Orchestrator-owned callbacks the run-time drives |
//!
//! ## Design Principle
//!
//! Capabilities are injected, never probed. A session is constructed with
//! the providers that exist in its environment, and platform detection
//! inspects that explicit capability set. This is what makes every
//! boundary testable without mocking ambient global state.
//!
//! ## Dependency Notes
//!
//! Open-ended payloads (timeline nodes, trial data, state values) are
//! `serde_json::Value`. JSON is the interchange format the surrounding
//! experiment tooling already speaks, and `Value` keeps the traits
//! object-safe where a generic `T: Serialize` would not.

#![deny(missing_docs)]

pub mod config;
pub mod error;
pub mod host;
pub mod platform;
pub mod runtime;
pub mod screen;
pub mod state;

#[cfg(feature = "test-utils")]
pub mod test_utils;

// Re-exports for convenience
pub use config::{Configuration, LogLevel, ManipulationValue, Seed};
pub use error::{HostError, LinkError, RuntimeError, SessionError};
pub use host::HostPlatform;
pub use platform::Platform;
pub use runtime::{RunParameters, Runtime, TrialSink};
pub use screen::{ContactDetails, FailureScreen};
pub use state::StateStore;
