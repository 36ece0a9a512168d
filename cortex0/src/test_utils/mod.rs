//! In-memory implementations for testing.
//!
//! Available behind the `test-utils` feature flag. These are minimal
//! implementations that prove the trait APIs are usable and let tests
//! assert on exactly how a session drives its capabilities.

mod fake_host;
mod recording_runtime;

pub use fake_host::FakeHost;
pub use recording_runtime::RecordingRuntime;
