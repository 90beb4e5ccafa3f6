//! Reducer trait: the only legal state-transition path.

use super::intent::Intent;
use super::state::FeatureState;

/// Transforms state based on intents.
///
/// `reduce` must be a pure function: (State, Intent) -> State. Side effects
/// (driving the media transport, restarting a speech session) happen in the
/// dispatcher around the reduce call, never inside it.
///
/// Reducers never fail on well-formed intents; out-of-range numeric inputs
/// are clamped to their documented range before being stored.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: FeatureState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
