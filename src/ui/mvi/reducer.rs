//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen. Callers
/// hand over the old state and store whatever comes back.
/// It must be a pure function: (State, Intent) -> State
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    ///
    /// No I/O, no logging, no clocks: the same inputs always give the same
    /// state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
