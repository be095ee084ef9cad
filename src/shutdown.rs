use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

/// Session teardown signal shared between the signal listener and the
/// session runtime.
#[derive(Clone, Default)]
pub struct ShutdownHandle {
    shutdown: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl ShutdownHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_shutting_down(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }

    pub fn signal(&self) {
        if !self.shutdown.swap(true, Ordering::SeqCst) {
            tracing::info!("Session teardown requested");
            self.notify.notify_waiters();
        }
    }

    pub async fn wait(&self) {
        // Subscribe to Notify BEFORE checking the flag: signal() could fire
        // between the check and the await, and notify_waiters() would have
        // no subscribers.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_shutting_down() {
            return;
        }
        notified.await;
    }

    /// Signal teardown on Ctrl-C or SIGTERM.
    pub fn listen_for_signals(&self) {
        let handle = self.clone();
        tokio::spawn(async move {
            #[cfg(unix)]
            {
                use tokio::signal::unix::{signal, SignalKind};
                match signal(SignalKind::terminate()) {
                    Ok(mut sigterm) => {
                        tokio::select! {
                            _ = tokio::signal::ctrl_c() => {},
                            _ = sigterm.recv() => {},
                        }
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "SIGTERM handler unavailable");
                        let _ = tokio::signal::ctrl_c().await;
                    }
                }
            }

            #[cfg(not(unix))]
            {
                let _ = tokio::signal::ctrl_c().await;
            }

            handle.signal();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn wait_returns_immediately_when_already_signaled() {
        let handle = ShutdownHandle::new();
        handle.signal();
        tokio::time::timeout(Duration::from_millis(100), handle.wait())
            .await
            .expect("wait should not block after signal");
    }

    #[tokio::test]
    async fn signal_wakes_waiter() {
        let handle = ShutdownHandle::new();
        let waiter = {
            let handle = handle.clone();
            tokio::spawn(async move { handle.wait().await })
        };
        tokio::task::yield_now().await;
        handle.signal();
        tokio::time::timeout(Duration::from_millis(100), waiter)
            .await
            .expect("waiter should wake")
            .unwrap();
        assert!(handle.is_shutting_down());
    }
}
