//! Tests for the store: deterministic replay and synchronous emission.

use std::sync::Arc;

use demoreel::flow::{FeatureState, Intent, Reducer, Store};
use parking_lot::Mutex;

#[derive(Debug, Clone, PartialEq, Default)]
struct MeterState {
    level: f64,
}

impl FeatureState for MeterState {}

#[derive(Debug, Clone)]
enum MeterIntent {
    Set(f64),
    Nudge(f64),
}

impl Intent for MeterIntent {}

struct MeterReducer;

impl Reducer for MeterReducer {
    type State = MeterState;
    type Intent = MeterIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            MeterIntent::Set(value) => state.level = value.clamp(0.0, 1.0),
            MeterIntent::Nudge(delta) => state.level = (state.level + delta).clamp(0.0, 1.0),
        }
        state
    }
}

fn sequence() -> Vec<MeterIntent> {
    vec![
        MeterIntent::Set(0.5),
        MeterIntent::Nudge(0.25),
        MeterIntent::Nudge(-1.0),
        MeterIntent::Set(2.0),
        MeterIntent::Nudge(-0.5),
    ]
}

#[test]
fn replaying_a_sequence_reproduces_the_same_state() {
    let first = Store::<MeterReducer>::new();
    let second = Store::<MeterReducer>::new();

    for intent in sequence() {
        first.apply(intent);
    }
    for intent in sequence() {
        second.apply(intent);
    }

    assert_eq!(first.current(), second.current());
    assert_eq!(first.current().level, 0.5);
}

#[test]
fn subscribers_see_every_snapshot_synchronously() {
    let store = Store::<MeterReducer>::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    store.subscribe(move |state: &MeterState| sink.lock().push(state.level));

    store.apply(MeterIntent::Set(0.3));
    // The subscriber has already run by the time apply returns.
    assert_eq!(*seen.lock(), vec![0.3]);

    store.apply(MeterIntent::Nudge(0.2));
    assert_eq!(*seen.lock(), vec![0.3, 0.5]);
}

#[test]
fn current_has_no_side_effects() {
    let store = Store::<MeterReducer>::new();
    store.apply(MeterIntent::Set(0.7));

    let before = store.applied();
    let a = store.current();
    let b = store.current();
    assert_eq!(a, b);
    assert_eq!(store.applied(), before);
}

#[test]
fn applied_counts_every_intent() {
    let store = Store::<MeterReducer>::new();
    assert_eq!(store.applied(), 0);
    for intent in sequence() {
        store.apply(intent);
    }
    assert_eq!(store.applied(), 5);
}

#[test]
fn with_state_starts_from_the_given_snapshot() {
    let store = Store::<MeterReducer>::with_state(MeterState { level: 0.9 });
    assert_eq!(store.current().level, 0.9);
    store.apply(MeterIntent::Nudge(0.5));
    assert_eq!(store.current().level, 1.0);
}
