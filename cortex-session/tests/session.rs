use cortex_session::{Capabilities, Phase, Session};
use cortex0::config::{Configuration, ManipulationValue, Seed};
use cortex0::error::SessionError;
use cortex0::platform::Platform;
use cortex0::test_utils::{FakeHost, RecordingRuntime};
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;

fn config() -> Configuration {
    Configuration {
        name: "Example Experiment".to_owned(),
        study_name: "example-study".to_owned(),
        manipulations: HashMap::from([("flag".to_owned(), ManipulationValue::Boolean(false))]),
        stimuli: HashMap::from([("a.jpg".to_owned(), "img/a.jpg".to_owned())]),
        contact: "researcher@example.com".to_owned(),
        state: HashMap::from([("counter".to_owned(), json!(0))]),
        seed: Seed::Number(0.5),
        ..Configuration::default()
    }
}

fn trial() -> serde_json::Value {
    json!({ "type": "instructions", "pages": ["Welcome"] })
}

// --- Phase machine ---

#[test]
fn detection_failure_is_fatal_and_deterministic() {
    for _ in 0..3 {
        let mut session = Session::new(config(), Capabilities::default());
        assert!(matches!(session.load(), Err(SessionError::NoPlatform)));
        assert_eq!(session.phase(), Phase::Failed);
    }
}

#[tokio::test]
async fn start_before_load_fails() {
    let runtime = Arc::new(RecordingRuntime::new());
    let mut session = Session::new(config(), Capabilities::local(runtime.clone()));

    let result = session.start(vec![trial()]).await;
    assert!(matches!(result, Err(SessionError::NotLoaded { .. })));
    // The run-time was never touched.
    assert!(runtime.inits().is_empty());
}

#[test]
fn load_twice_fails() {
    let runtime = Arc::new(RecordingRuntime::new());
    let mut session = Session::new(config(), Capabilities::local(runtime));

    session.load().unwrap();
    assert!(matches!(
        session.load(),
        Err(SessionError::AlreadyLoaded { .. })
    ));
}

#[tokio::test]
async fn full_local_lifecycle() {
    let runtime = Arc::new(RecordingRuntime::new());
    let mut session = Session::new(config(), Capabilities::local(runtime.clone()));

    assert_eq!(session.phase(), Phase::Constructed);
    assert_eq!(session.configuration().study_name, "example-study");
    assert!(session.error_handler().is_some());
    session.load().unwrap();
    assert_eq!(session.phase(), Phase::Loaded);
    assert_eq!(session.platform(), Platform::JsPsych);
    session.start(vec![trial()]).await.unwrap();
    assert_eq!(session.phase(), Phase::Started);
}

// --- Detection through capabilities ---

#[test]
fn host_capability_takes_priority() {
    let host = Arc::new(FakeHost::new().with_stimulus("a.jpg", "hosted/a.jpg"));
    let runtime = Arc::new(RecordingRuntime::new());
    let mut session = Session::new(config(), Capabilities::hosted(host, runtime));

    session.load().unwrap();
    assert_eq!(session.platform(), Platform::Gorilla);
}

// --- Preload injection ---

#[tokio::test]
async fn preload_step_lists_linked_stimuli() {
    let runtime = Arc::new(RecordingRuntime::new());
    let mut session = Session::new(config(), Capabilities::local(runtime.clone()));

    session.load().unwrap();
    session.start(vec![trial()]).await.unwrap();

    let parameters = runtime.last_init().unwrap();
    assert_eq!(parameters.timeline.len(), 2);
    assert_eq!(parameters.timeline[0]["type"], json!("preload"));
    assert_eq!(parameters.timeline[0]["images"], json!(["img/a.jpg"]));
    assert_eq!(parameters.preload_images, vec!["img/a.jpg".to_owned()]);
    assert!(parameters.show_progress_bar);
    assert!(parameters.display_target.is_none());
}

#[tokio::test]
async fn no_preload_step_without_stimuli() {
    let mut bare = config();
    bare.stimuli.clear();
    let runtime = Arc::new(RecordingRuntime::new());
    let mut session = Session::new(bare, Capabilities::local(runtime.clone()));

    session.load().unwrap();
    session.start(vec![trial()]).await.unwrap();

    let parameters = runtime.last_init().unwrap();
    assert_eq!(parameters.timeline.len(), 1);
    assert_eq!(parameters.timeline[0]["type"], json!("instructions"));
    assert!(parameters.preload_images.is_empty());
}

// --- Hosted start ---

#[tokio::test]
async fn hosted_start_waits_for_ready_and_targets_the_host_display() {
    let host = Arc::new(
        FakeHost::new()
            .with_manipulation("flag", "true")
            .with_stimulus("a.jpg", "hosted/a.jpg"),
    );
    let runtime = Arc::new(RecordingRuntime::new());
    let mut session = Session::new(config(), Capabilities::hosted(host.clone(), runtime.clone()));

    session.load().unwrap();
    session.start(vec![trial()]).await.unwrap();

    assert_eq!(host.ready_calls(), 1);
    let parameters = runtime.last_init().unwrap();
    assert_eq!(parameters.display_target.as_deref(), Some("gorilla"));
    assert_eq!(parameters.timeline[0]["images"], json!(["hosted/a.jpg"]));
}

#[tokio::test]
async fn hosted_sink_forwards_metrics_and_finishes() {
    let host = Arc::new(
        FakeHost::new()
            .with_manipulation("flag", "true")
            .with_stimulus("a.jpg", "hosted/a.jpg"),
    );
    let runtime = Arc::new(RecordingRuntime::new());
    let mut session = Session::new(config(), Capabilities::hosted(host.clone(), runtime.clone()));

    session.load().unwrap();
    session.start(vec![trial()]).await.unwrap();

    // Drive the callbacks the way the run-time would during trials.
    let sink = runtime.sink().unwrap();
    sink.on_data_update(json!({ "rt": 512 }));
    sink.on_data_update(json!({ "rt": 431 }));
    sink.on_finish();

    assert_eq!(host.metrics().len(), 2);
    assert_eq!(host.metrics()[0], json!({ "rt": 512 }));
    assert!(host.finished());
}

#[tokio::test]
async fn local_sink_exports_timestamped_csv() {
    let runtime = Arc::new(RecordingRuntime::new());
    let mut session = Session::new(config(), Capabilities::local(runtime.clone()));

    session.load().unwrap();
    session.start(vec![trial()]).await.unwrap();

    let sink = runtime.sink().unwrap();
    sink.on_finish();

    let exports = runtime.exports();
    assert_eq!(exports.len(), 1);
    assert!(exports[0].starts_with("experiment_complete_"));
    assert!(exports[0].ends_with(".csv"));
}

// --- Failure surface ---

#[tokio::test]
async fn fail_renders_the_screen_and_is_terminal() {
    let runtime = Arc::new(RecordingRuntime::new());
    let mut session = Session::new(config(), Capabilities::local(runtime.clone()));
    session.load().unwrap();

    session.fail("stimulus failed to decode");

    assert_eq!(session.phase(), Phase::Failed);
    assert_eq!(runtime.clears(), 1);
    assert_eq!(
        runtime.failures()[0].description,
        "stimulus failed to decode"
    );

    // A failed session cannot be started.
    assert!(matches!(
        session.start(vec![trial()]).await,
        Err(SessionError::NotLoaded { .. })
    ));
}

// --- Session-owned services ---

#[test]
fn state_round_trips_through_the_session() {
    let runtime = Arc::new(RecordingRuntime::new());
    let session = Session::new(config(), Capabilities::local(runtime));

    assert_eq!(session.state().get("counter"), Some(json!(0)));
    session.state().set("counter", json!(5));
    assert_eq!(session.state().get("counter"), Some(json!(5)));
    session.state().reset();
    assert_eq!(session.state().get("counter"), Some(json!(0)));
}

#[test]
fn seeded_random_stream_is_deterministic_per_configuration() {
    let runtime = Arc::new(RecordingRuntime::new());
    let a = Session::new(config(), Capabilities::local(runtime.clone()));
    let b = Session::new(config(), Capabilities::local(runtime));

    let first: Vec<f64> = (0..10).map(|_| a.random()).collect();
    let second: Vec<f64> = (0..10).map(|_| b.random()).collect();
    assert_eq!(first, second);
    assert!(first.iter().all(|x| (0.0..1.0).contains(x)));
}
