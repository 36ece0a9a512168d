//! The terminal failure screen shown when a session errors.

use serde::{Deserialize, Serialize};

/// Fixed layout of the failure screen. Pure data: the run-time decides how
/// to materialise it (DOM nodes, text, a recorded value in tests).
///
/// `description` is literal text. Renderers must escape it; error messages
/// are never interpreted as markup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureScreen {
    /// Top-level heading.
    pub heading: String,

    /// One-line explanation under the heading.
    pub subheading: String,

    /// The error detail, as literal text.
    pub description: String,

    /// Contact details, present only when participant contact is allowed.
    pub contact: Option<ContactDetails>,

    /// Label of the terminate button.
    pub terminate_label: String,

    /// Message the run-time shows when the participant ends the session.
    pub terminate_message: String,
}

/// Contact information rendered as a mail-to link on the failure screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactDetails {
    /// Address the participant can write to.
    pub email: String,
    /// Study name, carried in the mail subject.
    pub study_name: String,
}
