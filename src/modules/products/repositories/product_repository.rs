use std::sync::Arc;

use crate::core::traits::{collections, Filter, Record, RecordStore};
use crate::core::Result;

#[derive(Clone)]
pub struct ProductRepository {
    store: Arc<dyn RecordStore>,
}

impl ProductRepository {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// All products, newest first
    pub async fn list(&self) -> Result<Vec<Record>> {
        self.store
            .select(collections::PRODUCTS, &Filter::new().order_desc("created_at"))
            .await
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Record>> {
        self.store
            .select_one(collections::PRODUCTS, &Filter::by_id(id))
            .await
    }

    pub async fn insert(&self, record: Record) -> Result<Record> {
        self.store.insert(collections::PRODUCTS, record).await
    }

    pub async fn update(&self, id: &str, changes: Record) -> Result<u64> {
        self.store
            .update(collections::PRODUCTS, &Filter::by_id(id), changes)
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<u64> {
        self.store
            .delete(collections::PRODUCTS, &Filter::by_id(id))
            .await
    }
}
