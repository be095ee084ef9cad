//! One interface over both controller styles.

use std::future::Future;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::fetch::Fetcher;
use crate::ui::mvi::Store;
use crate::ui::refresh::{RefreshIntent, RefreshState, RefreshStore};
use crate::ui::vanilla::ViewModel;

/// Which screen to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AppSelection {
    /// Observable view model.
    #[default]
    Vanilla,
    /// Reducer store.
    Reducer,
}

impl AppSelection {
    pub fn title(&self) -> &'static str {
        match self {
            AppSelection::Vanilla => "Vanilla App",
            AppSelection::Reducer => "Reducer App",
        }
    }
}

/// A list screen with a load button and a refresh gesture.
pub trait RefreshScreen: Clone + Send + Sync + 'static {
    fn title(&self) -> &'static str;

    fn state(&self) -> RefreshState;

    fn subscribe(&self) -> watch::Receiver<RefreshState>;

    /// "Load other models" button. Does not wait for the load.
    fn tap_load(&self);

    /// Operation run by the refresh gesture; resolves once the load it
    /// started (or joined) has settled.
    fn refresh(&self) -> impl Future<Output = ()> + Send + 'static;
}

impl<F: Fetcher> RefreshScreen for ViewModel<F> {
    fn title(&self) -> &'static str {
        AppSelection::Vanilla.title()
    }

    fn state(&self) -> RefreshState {
        ViewModel::state(self)
    }

    fn subscribe(&self) -> watch::Receiver<RefreshState> {
        ViewModel::subscribe(self)
    }

    fn tap_load(&self) {
        drop(self.on_button_tapped());
    }

    fn refresh(&self) -> impl Future<Output = ()> + Send + 'static {
        let view_model = self.clone();
        async move {
            view_model.request_load(true).await;
        }
    }
}

impl<F: Fetcher> RefreshScreen for RefreshStore<F> {
    fn title(&self) -> &'static str {
        AppSelection::Reducer.title()
    }

    fn state(&self) -> RefreshState {
        Store::state(self)
    }

    fn subscribe(&self) -> watch::Receiver<RefreshState> {
        Store::subscribe(self)
    }

    fn tap_load(&self) {
        drop(self.send(RefreshIntent::ButtonTapped));
    }

    fn refresh(&self) -> impl Future<Output = ()> + Send + 'static {
        let store = self.clone();
        async move {
            store
                .send_while(RefreshIntent::PullToRefresh, RefreshState::is_loading)
                .await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles() {
        assert_eq!(AppSelection::Vanilla.title(), "Vanilla App");
        assert_eq!(AppSelection::Reducer.title(), "Reducer App");
        assert_eq!(AppSelection::default(), AppSelection::Vanilla);
    }
}
