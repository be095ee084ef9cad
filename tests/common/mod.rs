//! Shared test utilities.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use refreshable::fetch::{FetchError, Fetcher, SimulatedFetch, DEFAULT_LATENCY};
use refreshable::model::{canned_records, Record};
use refreshable::ui::refresh::RefreshState;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;

pub const LOAD: [&str; 3] = ["Test 1", "Test 2", "Test 3"];
pub const REFRESH: [&str; 3] = ["Pull to refresh 1", "Pull to refresh 2", "Pull to refresh 3"];

/// Simulated fetch with the production latency.
pub fn demo_fetch() -> SimulatedFetch {
    SimulatedFetch::new(DEFAULT_LATENCY)
}

/// Fetcher replaying queued results after the production latency.
///
/// Falls back to canned records once the queue is empty.
#[derive(Clone)]
pub struct ScriptedFetch {
    results: Arc<Mutex<VecDeque<Result<Vec<Record>, FetchError>>>>,
    calls: Arc<AtomicUsize>,
}

impl ScriptedFetch {
    pub fn new(results: Vec<Result<Vec<Record>, FetchError>>) -> Self {
        Self {
            results: Arc::new(Mutex::new(results.into())),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing() -> Self {
        Self::new(vec![Err(offline())])
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Fetcher for ScriptedFetch {
    fn fetch(
        &self,
        is_pull_to_refresh: bool,
    ) -> impl Future<Output = Result<Vec<Record>, FetchError>> + Send {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self.results.lock().pop_front();
        async move {
            tokio::time::sleep(DEFAULT_LATENCY).await;
            next.unwrap_or_else(|| Ok(canned_records(is_pull_to_refresh)))
        }
    }
}

pub fn offline() -> FetchError {
    FetchError::Failed {
        reason: "offline".to_string(),
    }
}

/// Every `is_loading` value a subscriber observes, with the virtual time
/// elapsed since `start`. Stops at the first non-loading state.
pub fn record_loading(
    mut updates: watch::Receiver<RefreshState>,
    start: Instant,
) -> JoinHandle<Vec<(Duration, bool)>> {
    tokio::spawn(async move {
        let mut seen = Vec::new();
        while updates.changed().await.is_ok() {
            let loading = updates.borrow_and_update().is_loading();
            seen.push((start.elapsed(), loading));
            if !loading {
                break;
            }
        }
        seen
    })
}
