use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};

use super::errors::StoreError;
use crate::collection::CollectionSnapshot;
use crate::ids::DocumentId;

/// Event pushed over a live collection subscription.
#[derive(Debug)]
pub enum WatchEvent<T> {
    /// Full item set; supersedes everything delivered before it.
    Snapshot(CollectionSnapshot<T>),

    /// Stream-level failure. The subscription may keep emitting
    /// afterwards (connectivity can come back).
    Error(StoreError),
}

/// Cancels the originating subscription, exactly once.
///
/// Cancellation fires either through an explicit [`cancel`](Self::cancel)
/// call or when the guard is dropped, whichever comes first.
#[derive(Debug)]
pub struct WatchGuard {
    cancel: Option<oneshot::Sender<()>>,
}

impl WatchGuard {
    pub fn new(cancel: oneshot::Sender<()>) -> Self {
        Self {
            cancel: Some(cancel),
        }
    }

    pub fn cancel(&mut self) {
        if let Some(tx) = self.cancel.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for WatchGuard {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Live subscription handle: the event stream plus its cancellation
/// guard. Dropping the handle tears the subscription down.
#[derive(Debug)]
pub struct CollectionWatch<T> {
    pub events: mpsc::UnboundedReceiver<WatchEvent<T>>,
    pub guard: WatchGuard,
}

/// Access to one named collection of flat documents.
///
/// Contract notes:
/// - `fetch_all` returns the items in the store's natural order.
/// - `create` sends the payload without an identifier; the store assigns
///   one and hands it back.
/// - `update` merges partial fields into the existing document; the
///   identifier must refer to an existing document.
/// - `watch` returning `Ok(None)` means the adapter cannot do realtime;
///   callers fall back to a single `fetch_all`.
///
/// No optimistic concurrency token anywhere: a snapshot arriving mid
/// mutation simply replaces state wholesale, so last writer wins at the
/// transport layer.
#[async_trait]
pub trait CollectionStorePort<T>: Send + Sync
where
    T: Send + 'static,
{
    /// One-shot fetch of the whole collection.
    async fn fetch_all(&self) -> Result<CollectionSnapshot<T>, StoreError>;

    /// Insert a new document and return its store-assigned identifier.
    async fn create(&self, data: T) -> Result<DocumentId, StoreError>;

    /// Merge partial fields into an existing document.
    async fn update(&self, id: &DocumentId, patch: serde_json::Value) -> Result<(), StoreError>;

    /// Delete by identifier.
    async fn delete(&self, id: &DocumentId) -> Result<(), StoreError>;

    /// Open a push subscription that re-delivers the full item set on
    /// every change, or `None` when realtime is unsupported.
    async fn watch(&self) -> Result<Option<CollectionWatch<T>>, StoreError>;
}
