//! State published by a store.

/// A reducer's state.
///
/// Reducers take it by value and return the next one. The store publishes
/// it through a watch channel and only notifies subscribers when the new
/// value differs from the old one, so it must be cheap to clone and
/// comparable. `Default` is the state a store starts from.
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}
