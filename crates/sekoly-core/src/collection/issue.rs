use serde::{Deserialize, Serialize};
use thiserror::Error;

/// User-facing trouble on a synchronized collection.
///
/// `Offline` is the absorbed, amber-notice case: the store is
/// unreachable and the view keeps whatever data it already had.
/// `Store` is any other failure, surfaced with the raw message; the
/// application layer additionally re-raises those to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum SyncIssue {
    #[error("offline mode: the store is unreachable, showing last known data")]
    Offline,

    #[error("{0}")]
    Store(String),
}

impl SyncIssue {
    pub fn is_offline(&self) -> bool {
        matches!(self, Self::Offline)
    }
}
