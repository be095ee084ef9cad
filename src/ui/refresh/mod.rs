//! Refresh feature in reducer style.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Loading state (Idle → Loading → Loaded), shared with the
//!   vanilla view model
//! - `intent.rs` - Button, gesture, request and response intents
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `environment.rs` - Executes the fetch the reducer asks for

mod environment;
mod intent;
mod reducer;
mod state;

pub use environment::FetchEnvironment;
pub use intent::{RefreshIntent, RefreshWork};
pub use reducer::RefreshReducer;
pub use state::{LoadPhase, RefreshState};

use crate::ui::mvi::Store;

/// Store running the refresh feature against fetcher `F`.
pub type RefreshStore<F> = Store<RefreshReducer, FetchEnvironment<F>>;

/// Build a refresh store in its initial (idle) state.
pub fn refresh_store<F: crate::fetch::Fetcher>(fetcher: F) -> RefreshStore<F> {
    Store::new(RefreshState::default(), FetchEnvironment::new(fetcher))
}
