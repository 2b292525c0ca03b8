use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::{mpsc, oneshot, RwLock};
use tracing::debug;

use sekoly_core::collection::{CollectionSnapshot, Document};
use sekoly_core::ids::DocumentId;
use sekoly_core::ports::{
    CollectionStorePort, CollectionWatch, StoreError, WatchEvent, WatchGuard,
};

/// Fault injected into the store, for tests and local development.
#[derive(Debug, Clone)]
pub enum StoreFault {
    /// Connectivity-class failure: the store reports itself unreachable.
    Unavailable,

    /// Any other failure, with the given message.
    Internal(String),
}

impl StoreFault {
    fn to_error(&self) -> StoreError {
        match self {
            Self::Unavailable => StoreError::with_code("unavailable", "store is offline"),
            Self::Internal(message) => StoreError::new(message.clone()),
        }
    }
}

struct Inner<T> {
    // Insertion order doubles as the store's natural return order.
    documents: Vec<Document<T>>,
    watchers: Vec<mpsc::UnboundedSender<WatchEvent<T>>>,
    fault: Option<StoreFault>,
}

/// In-memory document collection with push-based snapshot delivery.
///
/// Every mutation re-delivers the full item set to each live watcher,
/// the same shape the remote store's subscriptions have: no deltas,
/// last snapshot wins.
pub struct InMemoryCollectionStore<T> {
    name: String,
    inner: Arc<RwLock<Inner<T>>>,
}

impl<T> InMemoryCollectionStore<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inner: Arc::new(RwLock::new(Inner {
                documents: Vec::new(),
                watchers: Vec::new(),
                fault: None,
            })),
        }
    }

    /// Insert documents directly, bypassing fault injection. Returns
    /// the assigned identifiers in insertion order.
    pub async fn seed(&self, items: impl IntoIterator<Item = T>) -> Vec<DocumentId> {
        let mut inner = self.inner.write().await;
        let ids: Vec<DocumentId> = items
            .into_iter()
            .map(|data| {
                let id = DocumentId::new();
                inner.documents.push(Document::new(id.clone(), data));
                id
            })
            .collect();
        Self::notify(&mut inner);
        ids
    }

    /// Make subsequent operations fail with the given fault, or clear
    /// it with `None`.
    pub async fn set_fault(&self, fault: Option<StoreFault>) {
        self.inner.write().await.fault = fault;
    }

    /// Number of live subscriptions.
    pub async fn watcher_count(&self) -> usize {
        self.inner.read().await.watchers.len()
    }

    /// Push a stream-level error to every live watcher, as the remote
    /// store does when connectivity drops mid-subscription.
    pub async fn emit_error(&self, err: StoreError) {
        let inner = self.inner.read().await;
        for watcher in &inner.watchers {
            let _ = watcher.send(WatchEvent::Error(err.clone()));
        }
    }

    fn snapshot(inner: &Inner<T>) -> CollectionSnapshot<T> {
        CollectionSnapshot::new(inner.documents.clone())
    }

    fn notify(inner: &mut Inner<T>) {
        let snapshot = Self::snapshot(inner);
        inner
            .watchers
            .retain(|watcher| watcher.send(WatchEvent::Snapshot(snapshot.clone())).is_ok());
    }
}

#[async_trait]
impl<T> CollectionStorePort<T> for InMemoryCollectionStore<T>
where
    T: Clone + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    async fn fetch_all(&self) -> Result<CollectionSnapshot<T>, StoreError> {
        let inner = self.inner.read().await;
        if let Some(fault) = &inner.fault {
            return Err(fault.to_error());
        }
        Ok(Self::snapshot(&inner))
    }

    async fn create(&self, data: T) -> Result<DocumentId, StoreError> {
        let mut inner = self.inner.write().await;
        if let Some(fault) = &inner.fault {
            return Err(fault.to_error());
        }
        let id = DocumentId::new();
        inner.documents.push(Document::new(id.clone(), data));
        Self::notify(&mut inner);
        Ok(id)
    }

    async fn update(&self, id: &DocumentId, patch: serde_json::Value) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        if let Some(fault) = &inner.fault {
            return Err(fault.to_error());
        }
        let position = inner
            .documents
            .iter()
            .position(|doc| &doc.id == id)
            .ok_or_else(|| {
                StoreError::with_code(
                    "not-found",
                    format!("no document '{}' in '{}'", id, self.name),
                )
            })?;

        // Top-level field merge, the way the remote store's update works.
        let mut value = serde_json::to_value(&inner.documents[position].data)
            .map_err(|err| StoreError::new(format!("failed to serialize '{}': {}", id, err)))?;
        if let (Some(target), Some(fields)) = (value.as_object_mut(), patch.as_object()) {
            for (key, field) in fields {
                target.insert(key.clone(), field.clone());
            }
        }
        inner.documents[position].data = serde_json::from_value(value)
            .map_err(|err| StoreError::new(format!("invalid patch for '{}': {}", id, err)))?;

        Self::notify(&mut inner);
        Ok(())
    }

    async fn delete(&self, id: &DocumentId) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        if let Some(fault) = &inner.fault {
            return Err(fault.to_error());
        }
        let before = inner.documents.len();
        inner.documents.retain(|doc| &doc.id != id);
        if inner.documents.len() == before {
            return Err(StoreError::with_code(
                "not-found",
                format!("no document '{}' in '{}'", id, self.name),
            ));
        }
        Self::notify(&mut inner);
        Ok(())
    }

    async fn watch(&self) -> Result<Option<CollectionWatch<T>>, StoreError> {
        let mut inner = self.inner.write().await;
        if let Some(fault) = &inner.fault {
            return Err(fault.to_error());
        }

        let (events_tx, events_rx) = mpsc::unbounded_channel();
        // First emission is the current snapshot, so subscribers leave
        // their loading state right away.
        let _ = events_tx.send(WatchEvent::Snapshot(Self::snapshot(&inner)));
        inner.watchers.push(events_tx.clone());
        drop(inner);

        let (cancel_tx, cancel_rx) = oneshot::channel();
        let registry = Arc::clone(&self.inner);
        let name = self.name.clone();
        tokio::spawn(async move {
            // Resolves on explicit cancel and on guard drop alike; the
            // oneshot makes teardown single-shot by construction.
            let _ = cancel_rx.await;
            let mut inner = registry.write().await;
            inner
                .watchers
                .retain(|watcher| !watcher.same_channel(&events_tx));
            debug!(collection = %name, "subscription cancelled");
        });

        Ok(Some(CollectionWatch {
            events: events_rx,
            guard: WatchGuard::new(cancel_tx),
        }))
    }
}
