//! Pull-to-refresh demo: one loading state machine driven through two
//! state-management styles, and the adapter that keeps a refresh indicator
//! up until the load behind it has settled.

pub mod cli;
pub mod config;
pub mod fetch;
pub mod logging;
pub mod model;
pub mod shutdown;
pub mod ui;
