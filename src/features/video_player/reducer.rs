use crate::flow::Reducer;

use super::intent::VideoPlayerIntent;
use super::state::{VideoPlayerState, RATE_RANGE, VOLUME_RANGE};

pub struct VideoPlayerReducer;

impl Reducer for VideoPlayerReducer {
    type State = VideoPlayerState;
    type Intent = VideoPlayerIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            VideoPlayerIntent::TogglePlay => {
                state.playing = !state.playing;
                if state.playing {
                    state.ended = false;
                }
            }
            VideoPlayerIntent::Skip { seconds } => {
                state.position = (state.position + seconds).clamp(0.0, state.duration);
            }
            VideoPlayerIntent::SetVolume { value } => {
                state.volume = value.clamp(VOLUME_RANGE.0, VOLUME_RANGE.1);
            }
            VideoPlayerIntent::SetRate { value } => {
                state.rate = value.clamp(RATE_RANGE.0, RATE_RANGE.1);
            }
            VideoPlayerIntent::Scrub { ratio } => {
                state.position = ratio.clamp(0.0, 1.0) * state.duration;
            }
            VideoPlayerIntent::SyncPosition { position } => {
                state.position = position.clamp(0.0, state.duration);
            }
            VideoPlayerIntent::PlayState { playing } => {
                state.playing = playing;
                if playing {
                    state.ended = false;
                }
            }
            VideoPlayerIntent::Ended => {
                state.ended = true;
                state.playing = false;
            }
        }
        state
    }
}
