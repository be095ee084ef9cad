//! Scripted screen session: runs actions against one screen and renders
//! every state change as text.

use std::io::{self, Write};

use thiserror::Error;
use tokio::sync::watch;

use crate::shutdown::ShutdownHandle;
use crate::ui::pull_to_refresh::{PullToRefresh, RefreshError, RefreshStrategy};
use crate::ui::refresh::RefreshState;
use crate::ui::screen::RefreshScreen;

/// One user interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SessionAction {
    /// Tap "Load other models".
    Load,
    /// Pull to refresh.
    Refresh,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to render: {0}")]
    Render(#[from] io::Error),

    #[error(transparent)]
    Refresh(#[from] RefreshError),
}

/// A screen plus its refresh gesture, alive for one session.
pub struct Session<S> {
    screen: S,
    adapter: PullToRefresh,
}

impl<S: RefreshScreen> Session<S> {
    pub fn new(screen: S, strategy: RefreshStrategy) -> Self {
        Self {
            screen,
            adapter: PullToRefresh::new(strategy),
        }
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    pub fn adapter(&self) -> &PullToRefresh {
        &self.adapter
    }

    /// Run `actions` in order, then wait for any load still in flight.
    ///
    /// Stops early, keeping whatever state was reached, when `shutdown`
    /// is signaled.
    pub async fn run<W: Write>(
        &self,
        actions: &[SessionAction],
        out: &mut W,
        shutdown: &ShutdownHandle,
    ) -> Result<RefreshState, SessionError> {
        writeln!(out, "== {} ==", self.screen.title())?;
        let mut view = View::new(self.screen.subscribe(), self.adapter.indicator());

        let script = async {
            for action in actions {
                self.run_action(*action, &mut view, out).await?;
            }
            let updates = self.screen.subscribe();
            view.drive(out, async {
                self.adapter.join_detached().await;
                wait_until_settled(updates).await;
            })
            .await?;
            Ok::<(), SessionError>(())
        };

        tokio::select! {
            result = script => result?,
            _ = shutdown.wait() => {
                tracing::info!(title = self.screen.title(), "Session torn down");
            }
        }

        Ok(self.screen.state())
    }

    async fn run_action<W: Write>(
        &self,
        action: SessionAction,
        view: &mut View,
        out: &mut W,
    ) -> Result<(), SessionError> {
        tracing::info!(?action, title = self.screen.title(), "Running action");
        match action {
            SessionAction::Load => {
                writeln!(out, "> load")?;
                self.screen.tap_load();
                view.drive(out, wait_until_settled(self.screen.subscribe())).await?;
            }
            SessionAction::Refresh => {
                writeln!(out, "> refresh")?;
                view.drive(out, self.adapter.on_refresh(self.screen.refresh()))
                    .await??;
            }
        }
        Ok(())
    }
}

async fn wait_until_settled(mut updates: watch::Receiver<RefreshState>) {
    let _ = updates.wait_for(|state| !state.is_loading()).await;
}

/// Text rendering of a screen.
struct View {
    state: watch::Receiver<RefreshState>,
    indicator: watch::Receiver<bool>,
}

impl View {
    fn new(mut state: watch::Receiver<RefreshState>, mut indicator: watch::Receiver<bool>) -> Self {
        state.mark_changed();
        indicator.mark_unchanged();
        Self { state, indicator }
    }

    /// Render changes until `until` resolves, then flush what is pending.
    async fn drive<W, F>(&mut self, out: &mut W, until: F) -> io::Result<F::Output>
    where
        W: Write,
        F: std::future::Future,
    {
        tokio::pin!(until);
        loop {
            tokio::select! {
                biased;
                Ok(()) = self.state.changed() => self.render_state(out)?,
                Ok(()) = self.indicator.changed() => self.render_indicator(out)?,
                output = &mut until => {
                    self.flush(out)?;
                    return Ok(output);
                }
            }
        }
    }

    fn flush<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        if self.state.has_changed().unwrap_or(false) {
            self.render_state(out)?;
        }
        if self.indicator.has_changed().unwrap_or(false) {
            self.render_indicator(out)?;
        }
        Ok(())
    }

    fn render_state<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let state = self.state.borrow_and_update().clone();
        for line in render_lines(&state) {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }

    fn render_indicator<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let shown = *self.indicator.borrow_and_update();
        let label = if shown {
            "[refreshing]"
        } else {
            "[refresh done]"
        };
        writeln!(out, "{}", label)
    }
}

/// Lines the screen shows for `state`: status line, then one per record.
pub fn render_lines(state: &RefreshState) -> Vec<String> {
    let mut lines = vec![state.status_line().to_string()];
    if !state.is_loading() {
        lines.extend(state.titles().into_iter().map(|title| format!("  - {}", title)));
    }
    lines
}
