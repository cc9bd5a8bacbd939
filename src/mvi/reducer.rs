//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// Transforms state in response to intents.
///
/// The reducer is the only place state transitions happen, and it must be
/// a pure function: no I/O inside. Side effects (persistence, rendering)
/// belong to the caller, after the new state is returned.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
