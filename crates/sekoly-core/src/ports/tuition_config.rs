use anyhow::Result;
use async_trait::async_trait;

use crate::tuition::TuitionConfigRecord;

/// Lookup of persisted per-class tuition fee configuration.
///
/// The resolver consults this first; only an *active* record overrides
/// the static default table.
#[async_trait]
pub trait TuitionConfigPort: Send + Sync {
    /// Find the configuration for a class by name, if one is persisted.
    async fn find_for_class(&self, class_name: &str) -> Result<Option<TuitionConfigRecord>>;
}
