//! Intents for the refresh feature.

use crate::fetch::FetchError;
use crate::model::Record;
use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the refresh reducer.
#[derive(Debug, PartialEq)]
pub enum RefreshIntent {
    /// "Load other models" button.
    ButtonTapped,

    /// Pull-to-refresh gesture.
    PullToRefresh,

    /// Start a load unless one is already in flight.
    ModelsRequest { is_pull_to_refresh: bool },

    /// Fetch finished. A failure is applied as an empty list.
    ModelsResponse(Result<Vec<Record>, FetchError>),
}

impl Intent for RefreshIntent {}

/// Asynchronous work the refresh reducer can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshWork {
    Fetch { is_pull_to_refresh: bool },
}
