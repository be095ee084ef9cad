//! Observable view model: the "vanilla" controller style.
//!
//! State is mutated directly by async methods and published through a
//! watch channel; views subscribe instead of relying on ambient reactivity.

use std::sync::Arc;

use scopeguard::ScopeGuard;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::fetch::Fetcher;
use crate::ui::refresh::RefreshState;

/// How a [`ViewModel::request_load`] call was served.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// This call ran a fetch and applied its result.
    Fetched,
    /// A load was already in flight; this call waited for it instead.
    Coalesced,
}

/// View model owning one screen's refresh state.
///
/// Clones share the same state and fetcher.
pub struct ViewModel<F> {
    inner: Arc<ViewModelInner<F>>,
}

struct ViewModelInner<F> {
    state: watch::Sender<RefreshState>,
    fetcher: F,
}

impl<F> Clone for ViewModel<F> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<F: Fetcher> ViewModel<F> {
    pub fn new(fetcher: F) -> Self {
        let (state, _) = watch::channel(RefreshState::default());
        Self {
            inner: Arc::new(ViewModelInner { state, fetcher }),
        }
    }

    pub fn state(&self) -> RefreshState {
        self.inner.state.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.inner.state.borrow().is_loading()
    }

    pub fn subscribe(&self) -> watch::Receiver<RefreshState> {
        self.inner.state.subscribe()
    }

    pub fn fetcher(&self) -> &F {
        &self.inner.fetcher
    }

    /// Load records and resolve once they are applied.
    ///
    /// The loading flag is raised before the first suspension point and
    /// cleared in the same update that applies the records. A call made
    /// while another load is in flight starts no fetch of its own and
    /// resolves when that load settles.
    pub async fn request_load(&self, is_pull_to_refresh: bool) -> LoadOutcome {
        if !self.begin_load(is_pull_to_refresh) {
            self.settled().await;
            return LoadOutcome::Coalesced;
        }
        self.complete_load(is_pull_to_refresh).await;
        LoadOutcome::Fetched
    }

    /// "Load other models" button: start a load without waiting for it.
    ///
    /// The loading flag is raised before this returns; the fetch runs on a
    /// spawned task.
    pub fn on_button_tapped(&self) -> JoinHandle<LoadOutcome> {
        let view_model = self.clone();
        if !self.begin_load(false) {
            return tokio::spawn(async move {
                view_model.settled().await;
                LoadOutcome::Coalesced
            });
        }
        tokio::spawn(async move {
            view_model.complete_load(false).await;
            LoadOutcome::Fetched
        })
    }

    /// Resolve once no load is in flight.
    pub async fn settled(&self) {
        let mut updates = self.subscribe();
        // The sender lives as long as `self`, so this only ends on the predicate.
        let _ = updates.wait_for(|state| !state.is_loading()).await;
    }

    fn begin_load(&self, is_pull_to_refresh: bool) -> bool {
        let accepted = self.inner.state.send_if_modified(RefreshState::begin_load);
        if accepted {
            tracing::info!(is_pull_to_refresh, is_loading = true, "Load started");
        } else {
            tracing::debug!(is_pull_to_refresh, "Load already in flight, joining it");
        }
        accepted
    }

    /// Fetch and apply the result of an accepted load.
    ///
    /// If this future is dropped before the fetch returns, the load is
    /// still ended, with an empty result.
    async fn complete_load(&self, is_pull_to_refresh: bool) {
        let pending = scopeguard::guard(&self.inner.state, |state| {
            tracing::warn!(is_pull_to_refresh, "Load dropped in flight, applying empty result");
            state.send_modify(|state| state.finish_load(Vec::new()));
        });

        let result = self.inner.fetcher.fetch(is_pull_to_refresh).await;
        let state = ScopeGuard::into_inner(pending);

        let records = match result {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(error = %err, "Fetch failed, applying empty result");
                Vec::new()
            }
        };
        let count = records.len();
        state.send_modify(|state| state.finish_load(records));
        tracing::info!(is_loading = false, records = count, "Load finished");
    }
}
