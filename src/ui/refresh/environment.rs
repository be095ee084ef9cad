//! Environment executing refresh work against a fetcher.

use std::future::Future;

use crate::fetch::Fetcher;
use crate::ui::mvi::Environment;

use super::intent::{RefreshIntent, RefreshWork};

/// Runs [`RefreshWork`] with the wrapped fetcher.
#[derive(Debug, Clone)]
pub struct FetchEnvironment<F> {
    fetcher: F,
}

impl<F: Fetcher> FetchEnvironment<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }
}

impl<F: Fetcher> Environment<RefreshWork, RefreshIntent> for FetchEnvironment<F> {
    fn run(&self, work: RefreshWork) -> impl Future<Output = RefreshIntent> + Send {
        let RefreshWork::Fetch { is_pull_to_refresh } = work;
        let fetch = self.fetcher.fetch(is_pull_to_refresh);
        async move {
            let result = fetch.await;
            if let Err(err) = &result {
                tracing::warn!(error = %err, "Fetch failed, applying empty result");
            }
            RefreshIntent::ModelsResponse(result)
        }
    }
}
