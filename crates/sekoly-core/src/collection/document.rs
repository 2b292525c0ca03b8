use serde::{Deserialize, Serialize};

use crate::ids::DocumentId;

/// A record retrieved from a collection: the store-assigned identifier
/// plus the domain payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document<T> {
    pub id: DocumentId,
    pub data: T,
}

impl<T> Document<T> {
    pub fn new(id: DocumentId, data: T) -> Self {
        Self { id, data }
    }
}

/// Full item set emitted by the store, in the store's natural return
/// order (not guaranteed stable across emissions).
///
/// Each snapshot wholly supersedes the previous one; consumers never
/// merge deltas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionSnapshot<T> {
    pub documents: Vec<Document<T>>,
}

impl<T> CollectionSnapshot<T> {
    pub fn new(documents: Vec<Document<T>>) -> Self {
        Self { documents }
    }

    pub fn empty() -> Self {
        Self {
            documents: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
