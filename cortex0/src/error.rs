//! Error types for each protocol boundary.

use thiserror::Error;

/// Host platform accessor errors.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum HostError {
    /// The host has no binding for the requested name. At link time this is
    /// a recoverable gap: the local default is kept.
    #[error("unbound {kind}: {name}")]
    Unbound {
        /// Which accessor failed ("manipulation", "stimulus", "resource").
        kind: &'static str,
        /// The logical name that could not be bound.
        name: String,
    },

    /// The readiness handshake failed; the session cannot be handed over.
    #[error("host not ready: {0}")]
    NotReady(String),

    /// Catch-all. Include context.
    #[error("{0}")]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Run-time errors.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Handing the timeline to the run-time failed.
    #[error("initialisation failed: {0}")]
    InitFailed(String),

    /// The display surface is missing or cannot be drawn to.
    #[error("display unavailable: {0}")]
    DisplayUnavailable(String),

    /// The run-time's data export mechanism failed.
    #[error("export failed: {0}")]
    ExportFailed(String),

    /// Catch-all.
    #[error("{0}")]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Linked collection errors.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum LinkError {
    /// The collection was read before linking. Reads must not silently
    /// return defaults that linking may still replace.
    #[error("{label} collection accessed before linking")]
    NotLinked {
        /// Which collection was accessed.
        label: &'static str,
    },

    /// No entry under the requested name.
    #[error("{label} not found: {name}")]
    NotFound {
        /// Which collection was searched.
        label: &'static str,
        /// The name that was not found.
        name: String,
    },

    /// `link` was called a second time. Values are substituted at most once
    /// and never re-derived.
    #[error("{label} collection already linked")]
    AlreadyLinked {
        /// Which collection was re-linked.
        label: &'static str,
    },

    /// Catch-all.
    #[error("{0}")]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Session orchestration errors.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SessionError {
    /// Neither a host platform nor a run-time capability was injected.
    /// The session can never start.
    #[error("no valid platform detected")]
    NoPlatform,

    /// `start` was called before `load` completed.
    #[error("session not loaded (phase: {phase})")]
    NotLoaded {
        /// The phase the session was actually in.
        phase: String,
    },

    /// `load` was called from a phase other than `Constructed`.
    #[error("session already loaded (phase: {phase})")]
    AlreadyLoaded {
        /// The phase the session was actually in.
        phase: String,
    },

    /// The hosted platform was detected but no underlying run-time is
    /// available to present the timeline.
    #[error("run-time capability missing")]
    RuntimeMissing,

    /// A host error propagated through orchestration.
    #[error("host error: {0}")]
    Host(#[from] HostError),

    /// A run-time error propagated through orchestration.
    #[error("run-time error: {0}")]
    Runtime(#[from] RuntimeError),

    /// A linking error propagated through orchestration.
    #[error("link error: {0}")]
    Link(#[from] LinkError),

    /// Catch-all.
    #[error("{0}")]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}
