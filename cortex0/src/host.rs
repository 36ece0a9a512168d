//! The host platform protocol — remote-backed values, metrics, and session
//! finalisation.

use crate::error::HostError;
use async_trait::async_trait;

/// Accessor surface of the hosting platform that can optionally wrap a
/// session. All value accessors are synchronous and return strings: the
/// host stores everything as text, and typed interpretation is the
/// linking layer's job.
///
/// Implementations:
/// - a web binding over the host's page-global API in production
/// - `test_utils::FakeHost` in tests
///
/// `metric` and `finish` are fire-and-forget: the host owns delivery and
/// the session has no recovery path if it drops data.
#[async_trait]
pub trait HostPlatform: Send + Sync {
    /// Defer until the host signals it is ready for the run-time to take
    /// over. Called once, immediately before initialisation.
    async fn ready(&self) -> Result<(), HostError>;

    /// The externally-assigned value of a manipulation.
    fn manipulation(&self, name: &str) -> Result<String, HostError>;

    /// The hosted URL of a stimulus.
    fn stimuli_url(&self, name: &str) -> Result<String, HostError>;

    /// The hosted URL of a resource.
    fn resource_url(&self, name: &str) -> Result<String, HostError>;

    /// Forward one trial's recorded data to the host metrics sink.
    fn metric(&self, data: serde_json::Value);

    /// Finalise the hosted session once the timeline completes.
    fn finish(&self);
}
