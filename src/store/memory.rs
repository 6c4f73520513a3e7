use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{ensure_id, merge_into};
use crate::core::traits::{Filter, Record, RecordStore};
use crate::core::Result;

/// Process-local record store.
///
/// Collections are created on first write. Records keep insertion order so
/// unordered selects are stable.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    collections: RwLock<HashMap<String, Vec<Record>>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with fixture records
    pub fn with_records(seed: impl IntoIterator<Item = (String, Record)>) -> Self {
        let mut collections: HashMap<String, Vec<Record>> = HashMap::new();
        for (collection, mut record) in seed {
            ensure_id(&mut record);
            collections.entry(collection).or_default().push(record);
        }

        Self {
            collections: RwLock::new(collections),
        }
    }

    /// Number of records currently held in a collection
    pub async fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, Vec::len)
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn select(&self, collection: &str, filter: &Filter) -> Result<Vec<Record>> {
        let collections = self.collections.read().await;
        let mut rows: Vec<Record> = collections
            .get(collection)
            .map(|rows| rows.iter().filter(|r| filter.matches(r)).cloned().collect())
            .unwrap_or_default();

        filter.apply_ordering(&mut rows);
        Ok(rows)
    }

    async fn insert(&self, collection: &str, mut record: Record) -> Result<Record> {
        ensure_id(&mut record);

        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .push(record.clone());

        Ok(record)
    }

    async fn update(&self, collection: &str, filter: &Filter, changes: Record) -> Result<u64> {
        let mut collections = self.collections.write().await;
        let Some(rows) = collections.get_mut(collection) else {
            return Ok(0);
        };

        let mut updated = 0;
        for row in rows.iter_mut().filter(|r| filter.matches(r)) {
            merge_into(row, &changes);
            updated += 1;
        }

        Ok(updated)
    }

    async fn upsert(&self, collection: &str, on_conflict: &str, mut record: Record) -> Result<Record> {
        let mut collections = self.collections.write().await;
        let rows = collections.entry(collection.to_string()).or_default();

        let key = record.get(on_conflict).cloned();
        let existing = key.and_then(|key| {
            rows.iter_mut()
                .find(|row| row.get(on_conflict) == Some(&key))
        });

        match existing {
            Some(row) => {
                merge_into(row, &record);
                Ok(row.clone())
            }
            None => {
                ensure_id(&mut record);
                rows.push(record.clone());
                Ok(record)
            }
        }
    }

    async fn delete(&self, collection: &str, filter: &Filter) -> Result<u64> {
        let mut collections = self.collections.write().await;
        let Some(rows) = collections.get_mut(collection) else {
            return Ok(0);
        };

        let before = rows.len();
        rows.retain(|r| !filter.matches(r));
        Ok((before - rows.len()) as u64)
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
