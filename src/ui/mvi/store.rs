//! Store: owns reducer state and executes effects.

use std::marker::PhantomData;
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::effect::{Effect, Environment};
use super::reducer::Reducer;

/// Runtime for a reducer.
///
/// State lives in a watch channel, so every view holding a receiver sees
/// each change. Reductions are serialized by the channel's write lock.
pub struct Store<R: Reducer, E> {
    inner: Arc<StoreInner<R, E>>,
}

struct StoreInner<R: Reducer, E> {
    state: watch::Sender<R::State>,
    environment: E,
    _reducer: PhantomData<fn() -> R>,
}

impl<R: Reducer, E> Clone for Store<R, E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R, E> Store<R, E>
where
    R: Reducer,
    E: Environment<R::Work, R::Intent>,
{
    pub fn new(initial: R::State, environment: E) -> Self {
        let (state, _) = watch::channel(initial);
        Self {
            inner: Arc::new(StoreInner {
                state,
                environment,
                _reducer: PhantomData,
            }),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> R::State {
        self.inner.state.borrow().clone()
    }

    /// Receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<R::State> {
        self.inner.state.subscribe()
    }

    pub fn environment(&self) -> &E {
        &self.inner.environment
    }

    /// Reduce `intent`, plus any intents it forwards, synchronously.
    ///
    /// Work requested along the way is spawned; the returned task tracks it.
    pub fn send(&self, intent: R::Intent) -> StoreTask {
        let mut handles = Vec::new();
        let mut next = Some(intent);

        while let Some(intent) = next.take() {
            tracing::debug!(?intent, "Reducing intent");
            let mut effect = Effect::None;
            self.inner.state.send_if_modified(|state| {
                let (reduced, follow_up) = R::reduce(state.clone(), intent);
                effect = follow_up;
                let changed = reduced != *state;
                *state = reduced;
                changed
            });

            match effect {
                Effect::None => {}
                Effect::Send(intent) => next = Some(intent),
                Effect::Run(work) => handles.push(self.spawn_work(work)),
            }
        }

        StoreTask { handles }
    }

    /// Send `intent` and resolve once `predicate` no longer holds.
    ///
    /// The predicate is checked against the state left by the synchronous
    /// part of the send, so an intent that starts a load followed by
    /// `|s| s.is_loading()` resolves only when that load has settled.
    pub async fn send_while<P>(&self, intent: R::Intent, predicate: P)
    where
        P: Fn(&R::State) -> bool + Send + Sync,
    {
        let mut updates = self.subscribe();
        let _task = self.send(intent);
        // The sender lives as long as `self`, so this only ends on the predicate.
        let _ = updates.wait_for(|state| !predicate(state)).await;
    }

    fn spawn_work(&self, work: R::Work) -> JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            tracing::debug!(?work, "Running effect");
            let intent = store.inner.environment.run(work).await;
            store.send(intent).finish().await;
        })
    }
}

/// Handle on the effects started by one [`Store::send`].
///
/// Dropping it leaves the effects running.
#[derive(Debug)]
pub struct StoreTask {
    handles: Vec<JoinHandle<()>>,
}

impl StoreTask {
    /// True when the send started no asynchronous work.
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Wait for every effect started by the send, including the effects
    /// those effects' intents started in turn.
    pub async fn finish(self) {
        for handle in self.handles {
            if let Err(err) = handle.await {
                tracing::warn!(error = %err, "Effect task failed");
            }
        }
    }
}
