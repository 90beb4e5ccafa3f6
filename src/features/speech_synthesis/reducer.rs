use crate::flow::Reducer;

use super::intent::SpeechSynthesisIntent;
use super::state::{SpeechSynthesisState, PITCH_RANGE, RATE_RANGE};

pub struct SpeechSynthesisReducer;

impl Reducer for SpeechSynthesisReducer {
    type State = SpeechSynthesisState;
    type Intent = SpeechSynthesisIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SpeechSynthesisIntent::SetText { text } => {
                state.text = text;
            }
            SpeechSynthesisIntent::SetRate { value } => {
                state.rate = value.clamp(RATE_RANGE.0, RATE_RANGE.1);
            }
            SpeechSynthesisIntent::SetPitch { value } => {
                state.pitch = value.clamp(PITCH_RANGE.0, PITCH_RANGE.1);
            }
            SpeechSynthesisIntent::SelectVoice { index } => {
                if !state.voices.is_empty() {
                    state.voice = index.min(state.voices.len() - 1);
                }
            }
            SpeechSynthesisIntent::Toggle { restart } => {
                if restart {
                    state.spoken_words = 0;
                } else {
                    state.speaking = false;
                }
            }
            SpeechSynthesisIntent::SpeakingStarted => {
                state.speaking = true;
                state.spoken_words = 0;
            }
            SpeechSynthesisIntent::WordSpoken { index } => {
                state.spoken_words = index + 1;
            }
            SpeechSynthesisIntent::SpeakingEnded => {
                state.speaking = false;
            }
        }
        state
    }
}
