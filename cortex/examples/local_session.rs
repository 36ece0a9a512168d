//! Standalone session against a toy run-time that prints each trial.
//!
//! Run with: cargo run --example local_session

use cortex::prelude::*;
use cortex0::error::RuntimeError;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;

/// A run-time that "presents" trials by printing them, then reports
/// completion through the sink the session wired up.
struct PrintingRuntime;

#[async_trait::async_trait]
impl Runtime for PrintingRuntime {
    async fn init(
        &self,
        parameters: RunParameters,
        sink: Arc<dyn TrialSink>,
    ) -> Result<(), RuntimeError> {
        for (index, node) in parameters.timeline.iter().enumerate() {
            println!("trial {index}: {node}");
            sink.on_data_update(json!({ "trial": index, "rt": 500 + index * 10 }));
        }
        sink.on_finish();
        Ok(())
    }

    fn end_experiment(&self, message: &str) {
        println!("session ended: {message}");
    }

    fn save_export(&self, filename: &str) -> Result<(), RuntimeError> {
        println!("data exported to {filename}");
        Ok(())
    }

    fn clear_display(&self) {
        println!("display cleared");
    }

    fn show_failure(&self, screen: &FailureScreen) -> Result<(), RuntimeError> {
        println!("{}: {}", screen.heading, screen.description);
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<(), SessionError> {
    let configuration = Configuration {
        name: "Reaction Time Demo".to_owned(),
        study_name: "reaction-time-demo".to_owned(),
        manipulations: HashMap::from([
            ("show_feedback".to_owned(), ManipulationValue::Boolean(true)),
            ("trial_count".to_owned(), ManipulationValue::Number(2.0)),
        ]),
        stimuli: HashMap::from([
            ("cue.png".to_owned(), "img/cue.png".to_owned()),
            ("target.png".to_owned(), "img/target.png".to_owned()),
        ]),
        seed: Seed::Text("demo".to_owned()),
        logging: Some(LogLevel::Info),
        ..Configuration::default()
    };

    let mut session = Session::new(configuration, Capabilities::local(Arc::new(PrintingRuntime)));
    session.load()?;

    println!("running on: {}", session.platform());
    println!("first deviate: {:.6}", session.random());

    let timeline = vec![
        json!({ "type": "instructions", "pages": ["Press space when the target appears."] }),
        json!({ "type": "image-keyboard-response", "stimulus": "img/target.png" }),
    ];
    session.start(timeline).await?;
    Ok(())
}
