#![deny(missing_docs)]
//! Failure screen construction and the session error handler.
//!
//! All fatal conditions converge on one user-visible surface: a fixed
//! screen with the error detail, an optional contact link, and a button
//! that ends the session. There is no retry and no way back; showing the
//! screen is a terminal transition for the session.

use cortex0::config::Configuration;
use cortex0::runtime::Runtime;
use cortex0::screen::{ContactDetails, FailureScreen};
use std::sync::Arc;

/// Message the run-time shows when a participant ends a failed session.
pub const TERMINATE_MESSAGE: &str = "The experiment ended early due to an error occurring.";

/// Build the fixed failure screen for an error detail.
pub fn failure_screen(config: &Configuration, detail: &str) -> FailureScreen {
    FailureScreen {
        heading: "Oh no!".to_owned(),
        subheading: "It looks like an error has occurred.".to_owned(),
        description: detail.to_owned(),
        contact: config.allow_participant_contact.then(|| ContactDetails {
            email: config.contact.clone(),
            study_name: config.study_name.clone(),
        }),
        terminate_label: "End Experiment".to_owned(),
        terminate_message: TERMINATE_MESSAGE.to_owned(),
    }
}

/// Render a failure screen as a self-contained HTML fragment.
///
/// The error detail and contact fields pass through [`escape_html`]:
/// error messages are literal text, never markup.
pub fn render_html(screen: &FailureScreen) -> String {
    let mut html = String::new();
    html.push_str("<h1>");
    html.push_str(&escape_html(&screen.heading));
    html.push_str("</h1><h2>");
    html.push_str(&escape_html(&screen.subheading));
    html.push_str("</h2><div><p>Error description:</p><code>");
    html.push_str(&escape_html(&screen.description));
    html.push_str("</code></div>");
    if let Some(contact) = &screen.contact {
        html.push_str("<p>Please send an email to <a href=\"");
        html.push_str(&mailto_href(contact, &screen.description));
        html.push_str("\">");
        html.push_str(&escape_html(&contact.email));
        html.push_str("</a> to share the details of this error.</p>");
    }
    html.push_str("<button>");
    html.push_str(&escape_html(&screen.terminate_label));
    html.push_str("</button>");
    html
}

/// `mailto:` link carrying the study name in the subject and the error
/// detail in the body.
fn mailto_href(contact: &ContactDetails, detail: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        contact.email,
        encode_component(&format!("Error ({})", contact.study_name)),
        encode_component(&format!("Error text: {detail}\r\nAdditional information:")),
    )
}

/// Percent-encode a mailto query component: unreserved characters pass
/// through, everything else becomes `%XX`.
fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// Escape text for literal inclusion in markup.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Terminal error surface for a session.
///
/// Safe to invoke more than once: each invocation re-clears the display
/// and re-renders the fixed screen. There is nothing to cancel; failures
/// after the first simply redraw the same terminal state.
pub struct ErrorHandler {
    config: Configuration,
    runtime: Arc<dyn Runtime>,
}

impl ErrorHandler {
    /// Attach a handler to a run-time display surface.
    pub fn new(config: Configuration, runtime: Arc<dyn Runtime>) -> Self {
        Self { config, runtime }
    }

    /// Replace the visible content with the failure screen for `detail`.
    pub fn invoke(&self, detail: &str) {
        let screen = failure_screen(&self.config, detail);
        self.runtime.clear_display();
        if let Err(error) = self.runtime.show_failure(&screen) {
            tracing::error!(error = %error, "failure screen could not be rendered");
        }
    }

    /// End the session with the fixed early-termination message.
    pub fn terminate(&self) {
        self.runtime.end_experiment(TERMINATE_MESSAGE);
    }
}
