use crate::flow::Reducer;

use super::intent::SpeechDetectionIntent;
use super::state::SpeechDetectionState;

pub struct SpeechDetectionReducer;

impl Reducer for SpeechDetectionReducer {
    type State = SpeechDetectionState;
    type Intent = SpeechDetectionIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SpeechDetectionIntent::Started => {
                state.listening = true;
            }
            SpeechDetectionIntent::Transcript { text } => {
                state.interim = text;
            }
            SpeechDetectionIntent::SessionEnded => {
                if !state.interim.is_empty() {
                    let paragraph = std::mem::take(&mut state.interim);
                    state.committed.push(paragraph);
                }
                state.sessions += 1;
            }
        }
        state
    }
}
