use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::core::error::AppError;
use crate::core::fields::{into_record, text_field};
use crate::core::money::safe_number_opt;
use crate::core::traits::Record;
use crate::core::Result;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomBill {
    pub id: String,
    pub person_name: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub amount_pending: f64,
    pub short_note: Option<String>,
    pub last_updated: Option<String>,
}

impl CustomBill {
    pub fn from_record(record: &Record) -> Self {
        Self {
            id: text_field(record, "id").unwrap_or_default(),
            person_name: text_field(record, "person_name"),
            phone_number: text_field(record, "phone_number"),
            address: text_field(record, "address"),
            amount_pending: safe_number_opt(record.get("amount_pending"), 0.0),
            short_note: text_field(record, "short_note"),
            last_updated: text_field(record, "last_updated"),
        }
    }
}

/// Add or edit payload. A missing amount counts as zero.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomBillRequest {
    pub person_name: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub amount_pending: f64,
    #[serde(default)]
    pub short_note: Option<String>,
}

impl CustomBillRequest {
    pub fn validate(&self) -> Result<()> {
        if self.person_name.trim().is_empty() {
            return Err(AppError::validation("Person name cannot be empty"));
        }
        if !self.amount_pending.is_finite() {
            return Err(AppError::validation("Amount pending must be a finite number"));
        }
        Ok(())
    }

    /// Stored fields stamped with `last_updated`
    pub fn to_record(&self, last_updated: &str) -> Record {
        into_record(json!({
            "person_name": self.person_name.trim(),
            "phone_number": self.phone_number,
            "address": self.address,
            "amount_pending": self.amount_pending,
            "short_note": self.short_note,
            "last_updated": last_updated,
        }))
    }
}
