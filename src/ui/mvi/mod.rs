//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits for implementing unidirectional
//! data flow in the UI layer.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑          │
//!    │          └──→ Effect ──→ Environment
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of UI state
//! - **Intent**: User actions or system events
//! - **Reducer**: Pure function that transforms state based on intents
//! - **Effect**: Follow-up work the reducer asks the store to perform
//! - **Store**: Owns the state, runs effects, notifies subscribers

mod effect;
mod intent;
mod reducer;
mod state;
mod store;

pub use effect::{Effect, Environment};
pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
pub use store::{Store, StoreTask};
