//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where screen state transitions happen.
/// It must be a pure function: (State, Intent) -> State. That keeps every
/// transition table testable without a terminal or a network.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    ///
    /// Intents that make no sense in the current state are ignored and the
    /// state comes back unchanged.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
