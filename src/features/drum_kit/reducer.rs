use crate::flow::Reducer;

use super::intent::DrumKitIntent;
use super::state::DrumKitState;

pub struct DrumKitReducer;

impl Reducer for DrumKitReducer {
    type State = DrumKitState;
    type Intent = DrumKitIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DrumKitIntent::Strike { key } => {
                if let Some(pad) = state.pads.iter_mut().find(|pad| pad.key == key) {
                    pad.lit = true;
                    pad.hits += 1;
                }
                state
            }
            DrumKitIntent::Decay { key } => {
                if let Some(pad) = state.pads.iter_mut().find(|pad| pad.key == key) {
                    pad.lit = false;
                }
                state
            }
        }
    }
}
