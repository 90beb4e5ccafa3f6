//! Tests for the drum kit reducer.

use demoreel::features::drum_kit::{DrumKitIntent, DrumKitReducer, DrumKitState};
use demoreel::flow::Reducer;

#[test]
fn strike_lights_the_pad_and_counts_the_hit() {
    let state = DrumKitReducer::reduce(DrumKitState::default(), DrumKitIntent::Strike { key: 'a' });
    let pad = state.pad('a').expect("pad a exists");
    assert!(pad.lit);
    assert_eq!(pad.hits, 1);
}

#[test]
fn strike_on_an_unmapped_key_is_a_noop() {
    let before = DrumKitState::default();
    let after = DrumKitReducer::reduce(before.clone(), DrumKitIntent::Strike { key: 'z' });
    assert_eq!(before, after);
}

#[test]
fn decay_clears_the_highlight_but_keeps_the_count() {
    let state = DrumKitReducer::reduce(DrumKitState::default(), DrumKitIntent::Strike { key: 'j' });
    let state = DrumKitReducer::reduce(state, DrumKitIntent::Decay { key: 'j' });
    let pad = state.pad('j').expect("pad j exists");
    assert!(!pad.lit);
    assert_eq!(pad.hits, 1);
}

#[test]
fn decay_on_an_idle_pad_is_a_noop() {
    let before = DrumKitState::default();
    let after = DrumKitReducer::reduce(before.clone(), DrumKitIntent::Decay { key: 'a' });
    assert_eq!(before, after);
}

#[test]
fn repeated_strikes_accumulate() {
    let mut state = DrumKitState::default();
    for _ in 0..3 {
        state = DrumKitReducer::reduce(state, DrumKitIntent::Strike { key: 'd' });
    }
    state = DrumKitReducer::reduce(state, DrumKitIntent::Strike { key: 'l' });

    assert_eq!(state.pad('d').map(|pad| pad.hits), Some(3));
    assert_eq!(state.pad('l').map(|pad| pad.hits), Some(1));
    assert_eq!(state.total_hits(), 4);
}

#[test]
fn the_kit_has_the_nine_home_row_pads() {
    let state = DrumKitState::default();
    assert_eq!(state.pads.len(), 9);
    for key in ['a', 's', 'd', 'f', 'g', 'h', 'j', 'k', 'l'] {
        assert!(state.pad(key).is_some(), "missing pad for '{}'", key);
    }
    assert_eq!(state.lit_keys(), Vec::<char>::new());
}
