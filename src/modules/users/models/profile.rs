// User profile model
//
// One row per account in `profiles`. Older rows carry `full_name` instead of
// `name` and may have no role at all; those read as customers.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::core::error::AppError;
use crate::core::fields::{first_text, into_record, text_field};
use crate::core::traits::Record;
use crate::core::Result;

pub const ADMIN_ROLE: &str = "admin";
pub const CUSTOMER_ROLE: &str = "customer";

/// Roles an admin may assign
pub const ROLES: &[&str] = &[ADMIN_ROLE, CUSTOMER_ROLE];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserProfile {
    pub id: String,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub role: String,
    pub created_at: Option<String>,
}

impl UserProfile {
    pub fn from_record(record: &Record) -> Self {
        Self {
            id: text_field(record, "id").unwrap_or_default(),
            name: first_text(record, &["name", "full_name"]),
            phone: text_field(record, "phone"),
            address: text_field(record, "address"),
            role: text_field(record, "role").unwrap_or_else(|| CUSTOMER_ROLE.to_string()),
            created_at: text_field(record, "created_at"),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

/// Admin edit of a profile
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfileUpdate {
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    pub role: String,
}

impl UserProfileUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::validation("User name cannot be empty"));
        }
        if !ROLES.contains(&self.role.trim()) {
            return Err(AppError::validation(format!(
                "Role must be one of {}, got: {}",
                ROLES.join(", "),
                self.role
            )));
        }
        Ok(())
    }

    /// Changed fields only; id, email and creation time are never rewritten
    pub fn to_record(&self) -> Record {
        into_record(json!({
            "name": self.name.trim(),
            "phone": self.phone,
            "address": self.address,
            "role": self.role.trim(),
        }))
    }
}
