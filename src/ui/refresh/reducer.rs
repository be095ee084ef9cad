//! Reducer for the refresh feature.

use crate::ui::mvi::{Effect, Reducer};

use super::intent::{RefreshIntent, RefreshWork};
use super::state::RefreshState;

/// Reducer for refresh state transitions.
///
/// Pure function: the fetch itself is described by [`RefreshWork`] and
/// executed by the store's environment.
pub struct RefreshReducer;

impl Reducer for RefreshReducer {
    type State = RefreshState;
    type Intent = RefreshIntent;
    type Work = RefreshWork;

    fn reduce(
        mut state: Self::State,
        intent: Self::Intent,
    ) -> (Self::State, Effect<Self::Intent, Self::Work>) {
        match intent {
            RefreshIntent::ButtonTapped => (
                state,
                Effect::Send(RefreshIntent::ModelsRequest {
                    is_pull_to_refresh: false,
                }),
            ),

            RefreshIntent::PullToRefresh => (
                state,
                Effect::Send(RefreshIntent::ModelsRequest {
                    is_pull_to_refresh: true,
                }),
            ),

            RefreshIntent::ModelsRequest { is_pull_to_refresh } => {
                if state.begin_load() {
                    (state, Effect::Run(RefreshWork::Fetch { is_pull_to_refresh }))
                } else {
                    // Coalesced into the load already in flight.
                    (state, Effect::None)
                }
            }

            RefreshIntent::ModelsResponse(result) => {
                state.finish_load(result.unwrap_or_default());
                (state, Effect::None)
            }
        }
    }
}
