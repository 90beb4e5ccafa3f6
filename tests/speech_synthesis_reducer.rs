//! Tests for the speech synthesis reducer.

use demoreel::features::speech_synthesis::{
    SpeechSynthesisIntent, SpeechSynthesisReducer, SpeechSynthesisState,
};
use demoreel::flow::Reducer;

fn with_voices() -> SpeechSynthesisState {
    SpeechSynthesisState {
        voices: vec!["Alto".to_string(), "Baritone".to_string()],
        ..SpeechSynthesisState::default()
    }
}

#[test]
fn set_text_replaces_the_utterance() {
    let state = SpeechSynthesisReducer::reduce(
        SpeechSynthesisState::default(),
        SpeechSynthesisIntent::SetText {
            text: "two words".to_string(),
        },
    );
    assert_eq!(state.text, "two words");
    assert_eq!(state.word_count(), 2);
}

#[test]
fn rate_clamps_to_its_slider_range() {
    let state = SpeechSynthesisReducer::reduce(
        SpeechSynthesisState::default(),
        SpeechSynthesisIntent::SetRate { value: 7.5 },
    );
    assert_eq!(state.rate, 3.0);
    let state =
        SpeechSynthesisReducer::reduce(state, SpeechSynthesisIntent::SetRate { value: -1.0 });
    assert_eq!(state.rate, 0.0);
}

#[test]
fn pitch_clamps_to_its_slider_range() {
    let state = SpeechSynthesisReducer::reduce(
        SpeechSynthesisState::default(),
        SpeechSynthesisIntent::SetPitch { value: 9.0 },
    );
    assert_eq!(state.pitch, 2.0);
    let state =
        SpeechSynthesisReducer::reduce(state, SpeechSynthesisIntent::SetPitch { value: -0.5 });
    assert_eq!(state.pitch, 0.0);
}

#[test]
fn select_voice_clamps_to_the_installed_list() {
    let state =
        SpeechSynthesisReducer::reduce(with_voices(), SpeechSynthesisIntent::SelectVoice { index: 99 });
    assert_eq!(state.voice, 1);
    assert_eq!(state.voice_name(), Some("Baritone"));
}

#[test]
fn select_voice_with_no_voices_is_a_noop() {
    let state = SpeechSynthesisReducer::reduce(
        SpeechSynthesisState::default(),
        SpeechSynthesisIntent::SelectVoice { index: 3 },
    );
    assert_eq!(state.voice, 0);
    assert_eq!(state.voice_name(), None);
}

#[test]
fn speaking_lifecycle_tracks_word_boundaries() {
    let state = SpeechSynthesisReducer::reduce(
        SpeechSynthesisState::default(),
        SpeechSynthesisIntent::SpeakingStarted,
    );
    assert!(state.speaking);
    assert_eq!(state.spoken_words, 0);

    let state =
        SpeechSynthesisReducer::reduce(state, SpeechSynthesisIntent::WordSpoken { index: 0 });
    let state =
        SpeechSynthesisReducer::reduce(state, SpeechSynthesisIntent::WordSpoken { index: 1 });
    assert_eq!(state.spoken_words, 2);

    let state = SpeechSynthesisReducer::reduce(state, SpeechSynthesisIntent::SpeakingEnded);
    assert!(!state.speaking);
    assert_eq!(state.spoken_words, 2);
}

#[test]
fn toggle_restart_resets_progress() {
    let state = SpeechSynthesisReducer::reduce(
        SpeechSynthesisState::default(),
        SpeechSynthesisIntent::WordSpoken { index: 4 },
    );
    assert_eq!(state.spoken_words, 5);

    let state =
        SpeechSynthesisReducer::reduce(state, SpeechSynthesisIntent::Toggle { restart: true });
    assert_eq!(state.spoken_words, 0);
}

#[test]
fn toggle_stop_clears_speaking() {
    let state = SpeechSynthesisReducer::reduce(
        SpeechSynthesisState::default(),
        SpeechSynthesisIntent::SpeakingStarted,
    );
    let state =
        SpeechSynthesisReducer::reduce(state, SpeechSynthesisIntent::Toggle { restart: false });
    assert!(!state.speaking);
}
