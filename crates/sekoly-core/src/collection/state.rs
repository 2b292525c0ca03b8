use serde::{Deserialize, Serialize};

use super::{CollectionSnapshot, Document, SyncIssue};
use crate::ports::StoreError;

/// Kind of in-flight mutation against the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MutationKind {
    Create,
    Update,
    Delete,
}

/// Independent in-flight flags, one per mutation kind.
///
/// They are independent on purpose: mutations do not serialize against
/// each other, so a create and a delete can be in flight at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingOps {
    pub creating: bool,
    pub updating: bool,
    pub deleting: bool,
}

impl PendingOps {
    fn flag_mut(&mut self, kind: MutationKind) -> &mut bool {
        match kind {
            MutationKind::Create => &mut self.creating,
            MutationKind::Update => &mut self.updating,
            MutationKind::Delete => &mut self.deleting,
        }
    }

    pub fn any(&self) -> bool {
        self.creating || self.updating || self.deleting
    }
}

/// Per-subscription synchronization state.
///
/// Pure type: only state and transition validation live here. Opening
/// subscriptions, awaiting store calls and retries are handled by the
/// application layer.
///
/// Lifecycle: starts as `loading`, is updated wholesale on every
/// snapshot, and is torn down together with the subscription that feeds
/// it. The item sequence is exclusively owned by the service instance
/// holding this state; no two instances share it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionState<T> {
    documents: Vec<Document<T>>,
    loading: bool,
    issue: Option<SyncIssue>,
    pending: PendingOps,
}

impl<T> Default for CollectionState<T> {
    fn default() -> Self {
        Self::loading()
    }
}

impl<T> CollectionState<T> {
    /// Initial state of a fresh subscription.
    pub fn loading() -> Self {
        Self {
            documents: Vec::new(),
            loading: true,
            issue: None,
            pending: PendingOps::default(),
        }
    }

    pub fn documents(&self) -> &[Document<T>] {
        &self.documents
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn issue(&self) -> Option<&SyncIssue> {
        self.issue.as_ref()
    }

    pub fn pending(&self) -> PendingOps {
        self.pending
    }

    /// A snapshot arrived: replace the item sequence wholesale.
    ///
    /// The first emission clears the loading flag; fresh data also
    /// clears any stale offline or error notice.
    pub fn on_snapshot(&mut self, snapshot: CollectionSnapshot<T>) {
        self.documents = snapshot.documents;
        self.loading = false;
        self.issue = None;
    }

    /// A live subscription reported a failure.
    ///
    /// Connectivity-class failures degrade to the offline notice while
    /// the last known-good item sequence is kept. Anything else surfaces
    /// the raw message. Both clear the loading flag.
    pub fn on_stream_error(&mut self, err: &StoreError) {
        self.loading = false;
        self.issue = Some(if err.is_connectivity() {
            SyncIssue::Offline
        } else {
            SyncIssue::Store(err.message().to_string())
        });
    }

    /// The one-shot fetch path failed.
    ///
    /// A connectivity-class failure yields an empty-but-non-fatal item
    /// sequence plus the offline notice instead of a propagated failure.
    pub fn on_fetch_error(&mut self, err: &StoreError) {
        self.loading = false;
        if err.is_connectivity() {
            self.documents = Vec::new();
            self.issue = Some(SyncIssue::Offline);
        } else {
            self.issue = Some(SyncIssue::Store(err.message().to_string()));
        }
    }

    /// Back to loading for an explicit retry or re-subscription. Keeps
    /// the current items on screen until fresh data arrives.
    pub fn reset_for_reload(&mut self) {
        self.loading = true;
        self.issue = None;
    }

    /// Mark a mutation as in flight.
    pub fn begin(&mut self, kind: MutationKind) {
        *self.pending.flag_mut(kind) = true;
    }

    /// Mark a mutation as settled.
    ///
    /// A failure is recorded for passive display; the application layer
    /// re-raises it to the immediate caller as well. Mutation failures
    /// are never absorbed into the offline notice.
    pub fn finish(&mut self, kind: MutationKind, error: Option<&StoreError>) {
        *self.pending.flag_mut(kind) = false;
        match error {
            Some(err) => self.issue = Some(SyncIssue::Store(err.message().to_string())),
            None => self.issue = None,
        }
    }
}
