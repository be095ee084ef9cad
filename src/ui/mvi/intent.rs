//! Intents: everything that can change a store's state.

/// An input to a reducer.
///
/// Button taps and refresh gestures come from the user; fetch responses are
/// produced by the store's environment and fed back the same way. Intents
/// are logged on every reduction, hence `Debug`.
pub trait Intent: std::fmt::Debug + Send + 'static {}
