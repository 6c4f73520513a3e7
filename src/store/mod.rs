//! Record store implementations.
//!
//! `memory` backs development and tests; `mysql` keeps every collection as
//! JSON documents in a single `records` table.

pub mod memory;
pub mod mysql;

pub use memory::InMemoryRecordStore;
pub use mysql::MySqlRecordStore;

use serde_json::Value;
use uuid::Uuid;

use crate::core::traits::Record;

/// Read the record id as text, assigning a fresh UUID when absent
pub(crate) fn ensure_id(record: &mut Record) -> String {
    match record.get("id") {
        Some(Value::String(id)) if !id.is_empty() => id.clone(),
        Some(Value::Number(id)) => id.to_string(),
        _ => {
            let id = Uuid::new_v4().to_string();
            record.insert("id".to_string(), Value::String(id.clone()));
            id
        }
    }
}

/// Shallow merge: fields in `changes` overwrite fields in `target`
pub(crate) fn merge_into(target: &mut Record, changes: &Record) {
    for (key, value) in changes {
        target.insert(key.clone(), value.clone());
    }
}
