use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info_span, warn, Instrument};

use sekoly_core::collection::{CollectionState, MutationKind};
use sekoly_core::ids::DocumentId;
use sekoly_core::ports::{CollectionStorePort, CollectionWatch, WatchEvent};

/// Keeps one named collection synchronized into a [`CollectionState`]
/// and exposes the three mutating operations against it.
///
/// With `realtime` enabled and a store that supports watching, a push
/// subscription feeds the state: every snapshot replaces the item
/// sequence wholesale and the first one clears the loading flag.
/// Otherwise a single fetch-all populates the state. Connectivity-class
/// failures degrade to a non-fatal offline notice; every other store
/// failure is recorded for display *and* re-raised to the caller.
///
/// Consumers observe the state through a `tokio::sync::watch` channel.
/// Each service instance exclusively owns its state; mutations do not
/// serialize against each other or against snapshot delivery, so the
/// only consistency guarantee is last-snapshot-wins.
pub struct CollectionSyncService<T> {
    store: Arc<dyn CollectionStorePort<T>>,
    collection: String,
    realtime: bool,
    state_tx: watch::Sender<CollectionState<T>>,
    pump: Option<JoinHandle<()>>,
}

impl<T> CollectionSyncService<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new(
        collection: impl Into<String>,
        store: Arc<dyn CollectionStorePort<T>>,
        realtime: bool,
    ) -> Self {
        let (state_tx, _rx) = watch::channel(CollectionState::loading());
        Self {
            store,
            collection: collection.into(),
            realtime,
            state_tx,
            pump: None,
        }
    }

    /// Observe every state change.
    pub fn state(&self) -> watch::Receiver<CollectionState<T>> {
        self.state_tx.subscribe()
    }

    /// Current state, cloned out of the channel.
    pub fn current(&self) -> CollectionState<T> {
        self.state_tx.borrow().clone()
    }

    /// Begin synchronizing. Any previous subscription is cancelled
    /// first; re-subscribing always creates a fresh subscription rather
    /// than reusing a stale one.
    pub async fn start(&mut self) {
        let span = info_span!(
            "sync.start",
            collection = %self.collection,
            realtime = self.realtime,
        );

        async {
            self.stop_pump();
            self.state_tx.send_modify(|state| state.reset_for_reload());

            if self.realtime {
                match self.store.watch().await {
                    Ok(Some(live)) => {
                        self.spawn_pump(live);
                        return;
                    }
                    Ok(None) => {
                        debug!("store does not support realtime, falling back to one-shot fetch")
                    }
                    Err(err) => {
                        warn!(error = %err, "failed to open subscription");
                        self.state_tx.send_modify(|state| state.on_stream_error(&err));
                        return;
                    }
                }
            }

            match self.store.fetch_all().await {
                Ok(snapshot) => self.state_tx.send_modify(|state| state.on_snapshot(snapshot)),
                Err(err) => {
                    warn!(error = %err, "one-shot fetch failed");
                    self.state_tx.send_modify(|state| state.on_fetch_error(&err));
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Explicit retry: tear down and resynchronize with the same
    /// realtime preference. Replaces the reload-the-page recovery.
    pub async fn retry(&mut self) {
        self.start().await
    }

    /// Send a new document to the store; the assigned identifier is
    /// returned. `creating` is raised for the duration; a failure is
    /// recorded into the state and re-raised. No optimistic update is
    /// applied, so there is nothing to roll back.
    pub async fn create(&self, data: T) -> Result<DocumentId> {
        self.state_tx
            .send_modify(|state| state.begin(MutationKind::Create));
        let result = self.store.create(data).await;
        self.state_tx
            .send_modify(|state| state.finish(MutationKind::Create, result.as_ref().err()));
        result.with_context(|| format!("failed to create document in '{}'", self.collection))
    }

    /// Merge partial fields into an existing document.
    pub async fn update(&self, id: &DocumentId, patch: serde_json::Value) -> Result<()> {
        self.state_tx
            .send_modify(|state| state.begin(MutationKind::Update));
        let result = self.store.update(id, patch).await;
        self.state_tx
            .send_modify(|state| state.finish(MutationKind::Update, result.as_ref().err()));
        result.with_context(|| {
            format!(
                "failed to update document '{}' in '{}'",
                id, self.collection
            )
        })
    }

    /// Delete by identifier.
    pub async fn remove(&self, id: &DocumentId) -> Result<()> {
        self.state_tx
            .send_modify(|state| state.begin(MutationKind::Delete));
        let result = self.store.delete(id).await;
        self.state_tx
            .send_modify(|state| state.finish(MutationKind::Delete, result.as_ref().err()));
        result.with_context(|| {
            format!(
                "failed to delete document '{}' from '{}'",
                id, self.collection
            )
        })
    }

    /// Stop synchronizing. The live subscription, if any, is cancelled
    /// exactly once.
    pub fn shutdown(&mut self) {
        self.stop_pump();
    }

    fn spawn_pump(&mut self, live: CollectionWatch<T>) {
        let state_tx = self.state_tx.clone();
        let span = info_span!("sync.pump", collection = %self.collection);

        self.pump = Some(tokio::spawn(
            async move {
                // Keep the guard inside the task: it must live as long
                // as the pump, cancelling the subscription only when the
                // task ends or is aborted.
                let CollectionWatch {
                    mut events,
                    guard: _guard,
                } = live;
                while let Some(event) = events.recv().await {
                    match event {
                        WatchEvent::Snapshot(snapshot) => {
                            state_tx.send_modify(|state| state.on_snapshot(snapshot))
                        }
                        WatchEvent::Error(err) => {
                            warn!(error = %err, "subscription reported an error");
                            state_tx.send_modify(|state| state.on_stream_error(&err));
                        }
                    }
                }
                debug!("subscription stream ended");
            }
            .instrument(span),
        ));
    }

    fn stop_pump(&mut self) {
        if let Some(pump) = self.pump.take() {
            // Aborting drops the watch handle; its guard cancels the
            // underlying subscription exactly once.
            pump.abort();
        }
    }
}

impl<T> Drop for CollectionSyncService<T> {
    fn drop(&mut self) {
        if let Some(pump) = self.pump.take() {
            pump.abort();
        }
    }
}
