//! Data source behind both controllers.
//!
//! The only real implementation is [`SimulatedFetch`]: a fixed delay followed
//! by a canned list. The [`Fetcher`] trait is the seam tests use to plug in
//! failing or instrumented sources.

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use crate::model::{canned_records, Record};

/// Default latency of the simulated fetch.
pub const DEFAULT_LATENCY: Duration = Duration::from_secs(3);

/// Errors a fetcher may report. Controllers never surface these; a failed
/// fetch is applied as an empty result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("fetch failed: {reason}")]
    Failed { reason: String },
}

/// Asynchronous record source.
pub trait Fetcher: Send + Sync + 'static {
    fn fetch(
        &self,
        is_pull_to_refresh: bool,
    ) -> impl Future<Output = Result<Vec<Record>, FetchError>> + Send;
}

/// Fixed-latency fetch returning canned records.
#[derive(Debug, Clone)]
pub struct SimulatedFetch {
    latency: Duration,
    calls: Arc<AtomicUsize>,
}

impl SimulatedFetch {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Number of fetches started so far, shared across clones.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for SimulatedFetch {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY)
    }
}

impl Fetcher for SimulatedFetch {
    fn fetch(
        &self,
        is_pull_to_refresh: bool,
    ) -> impl Future<Output = Result<Vec<Record>, FetchError>> + Send {
        let latency = self.latency;
        self.calls.fetch_add(1, Ordering::SeqCst);
        async move {
            tracing::debug!(?latency, is_pull_to_refresh, "Sleep");
            tokio::time::sleep(latency).await;
            tracing::debug!(is_pull_to_refresh, "End sleep");
            Ok(canned_records(is_pull_to_refresh))
        }
    }
}
