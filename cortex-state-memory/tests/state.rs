use cortex_state_memory::MemoryState;
use cortex0::state::StateStore;
use serde_json::{Value, json};
use std::collections::HashMap;

fn store() -> MemoryState {
    MemoryState::new(HashMap::from([
        ("counter".to_owned(), json!(0)),
        ("condition".to_owned(), json!("control")),
        ("responses".to_owned(), json!({ "correct": [] })),
    ]))
}

// --- Round trips ---

#[test]
fn set_then_get_round_trips() {
    let state = store();
    state.set("counter", json!(3));
    assert_eq!(state.get("counter"), Some(json!(3)));

    state.set("condition", json!("treatment"));
    assert_eq!(state.get("condition"), Some(json!("treatment")));
}

#[test]
fn absent_key_reads_none() {
    let state = store();
    assert_eq!(state.get("missing"), None);
}

#[test]
fn late_initialised_key_is_accepted() {
    let state = store();
    state.set("extra", json!(true));
    assert_eq!(state.get("extra"), Some(json!(true)));
}

// --- The absent sentinel ---

#[test]
fn null_write_is_rejected() {
    let state = store();
    state.set("counter", Value::Null);
    assert_eq!(state.get("counter"), Some(json!(0)));

    // Also rejected for keys that don't exist yet.
    state.set("missing", Value::Null);
    assert_eq!(state.get("missing"), None);
}

// --- Reset ---

#[test]
fn reset_restores_construction_values() {
    let state = store();
    state.set("counter", json!(10));
    state.set("extra", json!("late"));
    state.reset();

    assert_eq!(state.get("counter"), Some(json!(0)));
    // Late-initialised keys disappear: they were not part of the snapshot.
    assert_eq!(state.get("extra"), None);
}

#[test]
fn reset_is_idempotent() {
    let state = store();
    state.set("counter", json!(10));
    state.reset();
    state.reset();
    assert_eq!(state.get("counter"), Some(json!(0)));
}

#[test]
fn snapshot_is_independent_of_nested_mutation() {
    // get() hands back a clone; mutating it must not leak into the store
    // or the snapshot.
    let state = store();
    let mut responses = state.get("responses").unwrap();
    responses["correct"] = json!([1, 2, 3]);
    assert_eq!(state.get("responses"), Some(json!({ "correct": [] })));

    // Writing the mutated value and resetting still recovers the original.
    state.set("responses", responses);
    state.reset();
    assert_eq!(state.get("responses"), Some(json!({ "correct": [] })));
}

#[test]
fn keys_follow_the_live_map() {
    let state = store();
    assert_eq!(state.keys().len(), 3);
    state.set("extra", json!(1));
    assert_eq!(state.keys().len(), 4);
    state.reset();
    assert_eq!(state.keys().len(), 3);
}
