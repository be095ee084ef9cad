//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};
use crate::ui::{AppSelection, RefreshStrategy, SessionAction};

#[derive(Debug, Parser)]
#[command(name = "refreshable", version, about = "Pull-to-refresh loading demo")]
pub struct Cli {
    /// Screen to run (overrides config)
    #[arg(long, value_enum)]
    pub app: Option<AppSelection>,

    /// How the refresh gesture runs the load (overrides config)
    #[arg(long, value_enum)]
    pub strategy: Option<RefreshStrategy>,

    /// Simulated fetch latency in milliseconds (overrides config)
    #[arg(long)]
    pub latency_ms: Option<u64>,

    /// Path to the config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the final state as JSON
    #[arg(long)]
    pub json: bool,

    /// Actions to run, in order
    #[arg(value_enum, default_values = ["load", "refresh"])]
    pub actions: Vec<SessionAction>,
}

impl Cli {
    /// Load the config file and apply command-line overrides on top.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(app) = self.app {
            config.session.app = app;
        }
        if let Some(strategy) = self.strategy {
            config.refresh.strategy = strategy;
        }
        if let Some(latency_ms) = self.latency_ms {
            config.fetch.latency_ms = latency_ms;
        }
    }
}
