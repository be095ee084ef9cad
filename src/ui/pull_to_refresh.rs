//! Pull-to-refresh adapter.
//!
//! The refresh gesture shows an indicator and hides it as soon as the
//! operation handed to [`PullToRefresh::on_refresh`] resolves. The operation
//! therefore has to resolve only when the load behind it has settled.
//! [`RefreshStrategy`] names the three ways of wiring the operation in;
//! only [`RefreshStrategy::Joined`] holds up in every case.

use std::future::Future;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::watch;
use tokio::task::{JoinError, JoinHandle};

/// How the gesture runs its operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RefreshStrategy {
    /// Spawn the operation as its own task and await the join handle.
    ///
    /// The indicator stays up until the operation resolves, and the
    /// operation still runs to completion if the gesture is dropped.
    #[default]
    Joined,
    /// Spawn the operation and return at once.
    ///
    /// The indicator disappears immediately while loading goes on.
    Detached,
    /// Await the operation directly inside the gesture.
    ///
    /// Dropping the gesture drops the operation with it, so a vanilla load
    /// is cut short and ends with an empty result.
    Inline,
}

/// Failure of a joined refresh task.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RefreshError {
    #[error("refresh task was cancelled")]
    Cancelled,
    #[error("refresh task panicked")]
    Panicked,
}

impl From<JoinError> for RefreshError {
    fn from(err: JoinError) -> Self {
        if err.is_cancelled() {
            RefreshError::Cancelled
        } else {
            RefreshError::Panicked
        }
    }
}

/// Bridges a refresh gesture to an asynchronous operation.
#[derive(Debug)]
pub struct PullToRefresh {
    strategy: RefreshStrategy,
    indicator: watch::Sender<bool>,
    detached: Mutex<Vec<JoinHandle<()>>>,
}

impl PullToRefresh {
    pub fn new(strategy: RefreshStrategy) -> Self {
        let (indicator, _) = watch::channel(false);
        Self {
            strategy,
            indicator,
            detached: Mutex::new(Vec::new()),
        }
    }

    pub fn strategy(&self) -> RefreshStrategy {
        self.strategy
    }

    /// Whether the refresh indicator is currently shown.
    pub fn is_refreshing(&self) -> bool {
        *self.indicator.borrow()
    }

    /// Receiver observing the refresh indicator.
    pub fn indicator(&self) -> watch::Receiver<bool> {
        self.indicator.subscribe()
    }

    /// Run one refresh gesture.
    ///
    /// The indicator is shown for as long as this future is alive and
    /// hidden when it resolves or is dropped.
    pub async fn on_refresh<Fut>(&self, operation: Fut) -> Result<(), RefreshError>
    where
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.indicator.send_replace(true);
        let indicator = &self.indicator;
        scopeguard::defer! {
            indicator.send_replace(false);
        }
        tracing::debug!(strategy = ?self.strategy, "Refresh gesture started");

        let outcome = match self.strategy {
            RefreshStrategy::Joined => tokio::spawn(operation).await.map_err(RefreshError::from),
            RefreshStrategy::Detached => {
                let mut detached = self.detached.lock();
                detached.retain(|handle| !handle.is_finished());
                detached.push(tokio::spawn(operation));
                Ok(())
            }
            RefreshStrategy::Inline => {
                operation.await;
                Ok(())
            }
        };

        match &outcome {
            Ok(()) => tracing::debug!(strategy = ?self.strategy, "Refresh gesture finished"),
            Err(err) => tracing::warn!(strategy = ?self.strategy, error = %err, "Refresh gesture failed"),
        }
        outcome
    }

    /// Wait for operations left running by detached gestures.
    pub async fn join_detached(&self) {
        let handles = std::mem::take(&mut *self.detached.lock());
        for handle in handles {
            if let Err(err) = handle.await {
                tracing::warn!(error = %err, "Detached refresh task failed");
            }
        }
    }
}

impl Default for PullToRefresh {
    fn default() -> Self {
        Self::new(RefreshStrategy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    fn slow_flag() -> (Arc<AtomicBool>, impl Future<Output = ()> + Send + 'static) {
        let done = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&done);
        let operation = async move {
            tokio::time::sleep(Duration::from_secs(3)).await;
            flag.store(true, Ordering::SeqCst);
        };
        (done, operation)
    }

    #[tokio::test(start_paused = true)]
    async fn joined_waits_for_operation() {
        let adapter = PullToRefresh::new(RefreshStrategy::Joined);
        let (done, operation) = slow_flag();
        adapter.on_refresh(operation).await.unwrap();
        assert!(done.load(Ordering::SeqCst));
        assert!(!adapter.is_refreshing());
    }

    #[tokio::test(start_paused = true)]
    async fn detached_returns_before_operation() {
        let adapter = PullToRefresh::new(RefreshStrategy::Detached);
        let (done, operation) = slow_flag();
        adapter.on_refresh(operation).await.unwrap();
        assert!(!done.load(Ordering::SeqCst));
        assert!(!adapter.is_refreshing());

        adapter.join_detached().await;
        assert!(done.load(Ordering::SeqCst));
    }

    #[tokio::test(start_paused = true)]
    async fn finished_detached_tasks_are_pruned() {
        let adapter = PullToRefresh::new(RefreshStrategy::Detached);
        let (_, first) = slow_flag();
        adapter.on_refresh(first).await.unwrap();
        assert_eq!(adapter.detached.lock().len(), 1);

        tokio::time::sleep(Duration::from_secs(4)).await;
        let (done, second) = slow_flag();
        adapter.on_refresh(second).await.unwrap();
        assert_eq!(adapter.detached.lock().len(), 1);

        adapter.join_detached().await;
        assert!(done.load(Ordering::SeqCst));
        assert!(adapter.detached.lock().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn indicator_is_shown_while_running() {
        let adapter = Arc::new(PullToRefresh::default());
        let (_, operation) = slow_flag();
        let gesture = {
            let adapter = Arc::clone(&adapter);
            tokio::spawn(async move { adapter.on_refresh(operation).await })
        };
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(adapter.is_refreshing());

        gesture.await.unwrap().unwrap();
        assert!(!adapter.is_refreshing());
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_gesture_hides_indicator() {
        let adapter = PullToRefresh::new(RefreshStrategy::Inline);
        let (_, operation) = slow_flag();
        let result =
            tokio::time::timeout(Duration::from_secs(1), adapter.on_refresh(operation)).await;
        assert!(result.is_err());
        assert!(!adapter.is_refreshing());
    }

    #[tokio::test]
    async fn panicking_operation_is_reported() {
        let adapter = PullToRefresh::default();
        let result = adapter.on_refresh(async { panic!("boom") }).await;
        assert_eq!(result, Err(RefreshError::Panicked));
        assert!(!adapter.is_refreshing());
    }
}
