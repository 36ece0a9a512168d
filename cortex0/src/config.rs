//! Session configuration supplied by the experiment author.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Everything a session needs to run, handed to the orchestrator at
/// construction. The collection maps hold local default values; when the
/// session is hosted they are substituted ("linked") exactly once before
/// the timeline starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Configuration {
    /// Display name of the experiment.
    pub name: String,

    /// Identifier of the study, used in the failure-screen contact subject
    /// and host-side bookkeeping.
    pub study_name: String,

    /// Experimental variables. The default value doubles as the type
    /// witness deciding how a host-assigned string is coerced at link time.
    #[serde(default)]
    pub manipulations: HashMap<String, ManipulationValue>,

    /// Logical name → local path for downloadable resources.
    #[serde(default)]
    pub resources: HashMap<String, String>,

    /// Logical name → local path for stimuli.
    #[serde(default)]
    pub stimuli: HashMap<String, String>,

    /// Whether the failure screen offers participants a contact link.
    pub allow_participant_contact: bool,

    /// Contact email address shown on the failure screen.
    pub contact: String,

    /// Initial key-value state. Keys are expected to be declared here;
    /// writes to undeclared keys are accepted with a warning.
    #[serde(default)]
    pub state: HashMap<String, serde_json::Value>,

    /// Seed for the deterministic random stream.
    pub seed: Seed,

    /// Optional logging verbosity. `None` leaves the subscriber untouched.
    #[serde(default)]
    pub logging: Option<LogLevel>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            name: String::new(),
            study_name: String::new(),
            manipulations: HashMap::new(),
            resources: HashMap::new(),
            stimuli: HashMap::new(),
            allow_participant_contact: false,
            contact: String::new(),
            state: HashMap::new(),
            seed: Seed::default(),
            logging: None,
        }
    }
}

/// A manipulation value, carried as an explicit tagged variant instead of
/// being re-inferred from runtime types. The variant of the configured
/// default decides how a host-assigned string is coerced when linked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ManipulationValue {
    /// A flag. Host strings link to `raw == "true"`.
    Boolean(bool),
    /// A numeric value. Host strings are parsed as `f64`.
    Number(f64),
    /// Free text. Host strings are kept verbatim.
    Text(String),
}

impl ManipulationValue {
    /// The flag value, if this is a `Boolean`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ManipulationValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// The numeric value, if this is a `Number`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ManipulationValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The text value, if this is `Text`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ManipulationValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for ManipulationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManipulationValue::Boolean(b) => write!(f, "{b}"),
            ManipulationValue::Number(n) => write!(f, "{n}"),
            ManipulationValue::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<bool> for ManipulationValue {
    fn from(b: bool) -> Self {
        ManipulationValue::Boolean(b)
    }
}

impl From<f64> for ManipulationValue {
    fn from(n: f64) -> Self {
        ManipulationValue::Number(n)
    }
}

impl From<&str> for ManipulationValue {
    fn from(s: &str) -> Self {
        ManipulationValue::Text(s.to_owned())
    }
}

impl From<String> for ManipulationValue {
    fn from(s: String) -> Self {
        ManipulationValue::Text(s)
    }
}

/// Seed for the random stream. Experiment authors write either a number or
/// a memorable string; both map deterministically onto the generator state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Seed {
    /// Numeric seed.
    Number(f64),
    /// String seed.
    Text(String),
}

impl Default for Seed {
    fn default() -> Self {
        Seed::Number(0.0)
    }
}

impl From<f64> for Seed {
    fn from(n: f64) -> Self {
        Seed::Number(n)
    }
}

impl From<&str> for Seed {
    fn from(s: &str) -> Self {
        Seed::Text(s.to_owned())
    }
}

impl From<String> for Seed {
    fn from(s: String) -> Self {
        Seed::Text(s)
    }
}

/// Logging verbosity, mapped onto the tracing level hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    /// Errors only.
    Error,
    /// Warnings and errors.
    Warn,
    /// Informational and above.
    Info,
    /// Debug and above.
    Debug,
    /// Everything.
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}
