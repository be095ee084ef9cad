//! Configuration loading.

mod loader;
mod types;

pub use loader::{ConfigError, MAX_LATENCY_MS};
pub use types::{Config, FetchConfig, RefreshConfig, SessionConfig};
