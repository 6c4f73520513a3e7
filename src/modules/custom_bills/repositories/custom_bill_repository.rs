use std::sync::Arc;

use crate::core::traits::{collections, Filter, Record, RecordStore};
use crate::core::Result;

#[derive(Clone)]
pub struct CustomBillRepository {
    store: Arc<dyn RecordStore>,
}

impl CustomBillRepository {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// All records, most recently updated first
    pub async fn list(&self) -> Result<Vec<Record>> {
        self.store
            .select(
                collections::CUSTOM_BILLS,
                &Filter::new().order_desc("last_updated"),
            )
            .await
    }

    pub async fn insert(&self, record: Record) -> Result<Record> {
        self.store.insert(collections::CUSTOM_BILLS, record).await
    }

    pub async fn update(&self, id: &str, changes: Record) -> Result<u64> {
        self.store
            .update(collections::CUSTOM_BILLS, &Filter::by_id(id), changes)
            .await
    }
}
