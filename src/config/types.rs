use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ui::{AppSelection, RefreshStrategy};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub refresh: RefreshConfig,
}

/// Which screen a session runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub app: AppSelection,
}

/// Simulated fetch settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Delay before canned records are returned (default: 3000).
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
}

/// Pull-to-refresh adapter settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshConfig {
    #[serde(default)]
    pub strategy: RefreshStrategy,
}

fn default_latency_ms() -> u64 {
    3_000
}

impl FetchConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
        }
    }
}
