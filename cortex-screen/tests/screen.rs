use cortex_screen::{ErrorHandler, TERMINATE_MESSAGE, failure_screen, render_html};
use cortex0::config::Configuration;
use cortex0::test_utils::RecordingRuntime;
use std::sync::Arc;

fn config(allow_contact: bool) -> Configuration {
    Configuration {
        name: "Example Experiment".to_owned(),
        study_name: "example-study".to_owned(),
        allow_participant_contact: allow_contact,
        contact: "researcher@example.com".to_owned(),
        ..Configuration::default()
    }
}

// --- Screen construction ---

#[test]
fn contact_is_gated_on_the_configuration_flag() {
    let with = failure_screen(&config(true), "boom");
    let without = failure_screen(&config(false), "boom");

    assert_eq!(
        with.contact.as_ref().map(|c| c.email.as_str()),
        Some("researcher@example.com")
    );
    assert!(without.contact.is_none());
    assert_eq!(with.terminate_message, TERMINATE_MESSAGE);
}

#[test]
fn fixed_copy_is_stable() {
    let screen = failure_screen(&config(false), "boom");
    assert_eq!(screen.heading, "Oh no!");
    assert_eq!(screen.subheading, "It looks like an error has occurred.");
    assert_eq!(screen.terminate_label, "End Experiment");
    assert_eq!(screen.description, "boom");
}

// --- Rendering ---

#[test]
fn error_detail_is_rendered_as_literal_text() {
    let screen = failure_screen(&config(false), "<script>alert('x')</script>");
    let html = render_html(&screen);

    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
}

#[test]
fn contact_link_carries_study_and_detail() {
    let screen = failure_screen(&config(true), "boom");
    let html = render_html(&screen);

    assert!(html.contains("mailto:researcher@example.com"));
    // "Error (example-study)" percent-encoded.
    assert!(html.contains("subject=Error%20%28example-study%29"));
    assert!(html.contains("body=Error%20text%3A%20boom"));
    assert!(html.contains(">researcher@example.com</a>"));
}

#[test]
fn contactless_screen_has_no_mailto() {
    let html = render_html(&failure_screen(&config(false), "boom"));
    assert!(!html.contains("mailto:"));
}

// --- Handler behavior ---

#[test]
fn invoke_clears_then_renders() {
    let runtime = Arc::new(RecordingRuntime::new());
    let handler = ErrorHandler::new(config(true), runtime.clone());

    handler.invoke("boom");

    assert_eq!(runtime.clears(), 1);
    let failures = runtime.failures();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].description, "boom");
}

#[test]
fn invoke_is_safe_to_repeat() {
    let runtime = Arc::new(RecordingRuntime::new());
    let handler = ErrorHandler::new(config(false), runtime.clone());

    handler.invoke("first");
    handler.invoke("second");

    // Each invocation re-clears and re-renders; the screen layout is the
    // same fixed terminal state.
    assert_eq!(runtime.clears(), 2);
    assert_eq!(runtime.failures().len(), 2);
    assert_eq!(runtime.failures()[1].description, "second");
}

#[test]
fn terminate_ends_the_session_with_the_fixed_message() {
    let runtime = Arc::new(RecordingRuntime::new());
    let handler = ErrorHandler::new(config(false), runtime.clone());

    handler.terminate();

    assert_eq!(runtime.ended(), vec![TERMINATE_MESSAGE.to_owned()]);
}
