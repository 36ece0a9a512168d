#![deny(missing_docs)]
//! # cortex — umbrella crate
//!
//! Provides a single import surface for the cortex workspace. Re-exports
//! the protocol crate and key implementations behind feature flags, plus a
//! `prelude` for the happy path.

#[cfg(feature = "core")]
pub use cortex0;

#[cfg(feature = "link")]
pub use cortex_link;

#[cfg(feature = "rng")]
pub use cortex_rng;

#[cfg(feature = "screen")]
pub use cortex_screen;

#[cfg(feature = "session")]
pub use cortex_session;

#[cfg(feature = "state-memory")]
pub use cortex_state_memory;

/// Happy-path imports for composing cortex sessions.
pub mod prelude {
    #[cfg(feature = "core")]
    pub use cortex0::{
        Configuration, ContactDetails, FailureScreen, HostPlatform, LogLevel, ManipulationValue,
        Platform, RunParameters, Runtime, Seed, SessionError, StateStore, TrialSink,
    };

    #[cfg(feature = "link")]
    pub use cortex_link::{Manipulations, Resources, Stimuli};

    #[cfg(feature = "state-memory")]
    pub use cortex_state_memory::MemoryState;

    #[cfg(feature = "rng")]
    pub use cortex_rng::Lcg64;

    #[cfg(feature = "screen")]
    pub use cortex_screen::ErrorHandler;

    #[cfg(feature = "session")]
    pub use cortex_session::{Capabilities, Phase, Session};
}
