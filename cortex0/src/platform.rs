//! Platform identification for an experiment session.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which execution platform a session is bound to.
///
/// `Invalid` exists so detection can stay a total function; the
/// orchestrator turns it into a hard error before `start` is reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    /// Embedded in the hosting platform. The host always carries the
    /// sequencing run-time underneath it.
    #[serde(rename = "gorilla")]
    Gorilla,
    /// Standalone against the sequencing run-time only.
    #[serde(rename = "jspsych")]
    JsPsych,
    /// No recognised capability. A session can never start here.
    #[serde(rename = "invalid")]
    Invalid,
}

impl Platform {
    /// Decide the platform from the injected capability set.
    ///
    /// The host capability wins when both are present: an embedded session
    /// always also has the run-time loaded underneath it.
    pub fn detect(host_present: bool, runtime_present: bool) -> Self {
        if host_present {
            Platform::Gorilla
        } else if runtime_present {
            Platform::JsPsych
        } else {
            Platform::Invalid
        }
    }

    /// Whether this platform substitutes values through the host at link time.
    pub fn is_hosted(&self) -> bool {
        matches!(self, Platform::Gorilla)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Gorilla => write!(f, "gorilla"),
            Platform::JsPsych => write!(f, "jspsych"),
            Platform::Invalid => write!(f, "invalid"),
        }
    }
}
