//! Reducer trait for MVI architecture.

use super::effect::Effect;
use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> (State, Effect).
/// Anything asynchronous is described by the returned effect and carried
/// out by the store.
pub trait Reducer: Send + Sync + 'static {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Description of asynchronous work, executed by an environment.
    type Work: std::fmt::Debug + Send + 'static;

    /// Process an intent and return the new state plus follow-up work.
    fn reduce(
        state: Self::State,
        intent: Self::Intent,
    ) -> (Self::State, Effect<Self::Intent, Self::Work>);
}
