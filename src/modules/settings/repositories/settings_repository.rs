use std::sync::Arc;

use serde_json::Value;

use crate::core::traits::{collections, Filter, Record, RecordStore};
use crate::core::Result;

const PAGE_KEY_FIELD: &str = "page_key";
const CONTENT_FIELD: &str = "content";

/// Repository for page-keyed rows in `site_settings`
#[derive(Clone)]
pub struct SettingsRepository {
    store: Arc<dyn RecordStore>,
}

impl SettingsRepository {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Content object stored under `page_key`. A row whose content is not an
    /// object reads as empty content.
    pub async fn find_content(&self, page_key: &str) -> Result<Option<Record>> {
        let row = self
            .store
            .select_one(
                collections::SITE_SETTINGS,
                &Filter::new().eq(PAGE_KEY_FIELD, page_key),
            )
            .await?;

        Ok(row.map(|row| match row.get(CONTENT_FIELD) {
            Some(Value::Object(content)) => content.clone(),
            _ => Record::new(),
        }))
    }

    /// Replace the content stored under `page_key`
    pub async fn save_content(&self, page_key: &str, content: Record) -> Result<()> {
        let mut row = Record::new();
        row.insert(PAGE_KEY_FIELD.to_string(), Value::String(page_key.to_string()));
        row.insert(CONTENT_FIELD.to_string(), Value::Object(content));

        self.store
            .upsert(collections::SITE_SETTINGS, PAGE_KEY_FIELD, row)
            .await?;
        Ok(())
    }
}
