use crate::flow::Reducer;

use super::intent::StickyNavIntent;
use super::state::StickyNavState;

pub struct StickyNavReducer;

impl Reducer for StickyNavReducer {
    type State = StickyNavState;
    type Intent = StickyNavIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            StickyNavIntent::Scrolled { offset } => {
                let offset = offset.max(0.0).round() as u16;
                state.offset = offset;
                state.fixed = offset > state.nav_top;
                state.padding_top = if state.fixed { state.nav_height } else { 0 };
            }
        }
        state
    }
}
