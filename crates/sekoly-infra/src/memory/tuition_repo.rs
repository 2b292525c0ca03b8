use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use sekoly_core::ports::TuitionConfigPort;
use sekoly_core::tuition::TuitionConfigRecord;

/// In-memory tuition configuration repository.
#[derive(Default)]
pub struct InMemoryTuitionConfigs {
    records: RwLock<Vec<TuitionConfigRecord>>,
}

impl InMemoryTuitionConfigs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the configuration for a class.
    pub async fn upsert(&self, record: TuitionConfigRecord) {
        let mut records = self.records.write().await;
        records.retain(|existing| existing.class_name != record.class_name);
        records.push(record);
    }
}

#[async_trait]
impl TuitionConfigPort for InMemoryTuitionConfigs {
    async fn find_for_class(&self, class_name: &str) -> Result<Option<TuitionConfigRecord>> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .find(|record| record.class_name == class_name)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(class_name: &str, monthly: i64) -> TuitionConfigRecord {
        TuitionConfigRecord {
            class_name: class_name.to_string(),
            monthly_amount: monthly,
            registration_fee: None,
            exam_fee: None,
            active: true,
            notes: String::new(),
        }
    }

    #[tokio::test]
    async fn upsert_replaces_existing_class_entry() {
        let repo = InMemoryTuitionConfigs::new();
        repo.upsert(record("CP", 120_000)).await;
        repo.upsert(record("CP", 125_000)).await;

        let found = repo.find_for_class("CP").await.expect("lookup");
        assert_eq!(found.expect("record").monthly_amount, 125_000);
    }

    #[tokio::test]
    async fn missing_class_yields_none() {
        let repo = InMemoryTuitionConfigs::new();
        assert!(repo.find_for_class("TLE").await.expect("lookup").is_none());
    }
}
