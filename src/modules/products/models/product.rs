// Product model
//
// Catalog entries. Image urls were written as both `imageUrl` and
// `image_url` over time; reads accept either, writes use `imageUrl`.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::core::error::AppError;
use crate::core::fields::{first_text, into_record, text_field};
use crate::core::money::safe_number_opt;
use crate::core::traits::Record;
use crate::core::Result;

pub const PRODUCT_ID_PREFIX: &str = "prod_";

/// `prod_` followed by 16 lowercase hex digits
pub fn new_product_id() -> String {
    let bytes: [u8; 8] = rand::random();
    format!("{}{}", PRODUCT_ID_PREFIX, hex::encode(bytes))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: Option<String>,
    pub price: f64,
    pub stock: i64,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub created_at: Option<String>,
}

impl Product {
    pub fn from_record(record: &Record) -> Self {
        Self {
            id: text_field(record, "id").unwrap_or_default(),
            name: text_field(record, "name").unwrap_or_default(),
            category: text_field(record, "category"),
            price: safe_number_opt(record.get("price"), 0.0),
            stock: safe_number_opt(record.get("stock"), 0.0).trunc() as i64,
            description: text_field(record, "description"),
            image_url: first_text(record, &["imageUrl", "image_url"]),
            created_at: text_field(record, "created_at"),
        }
    }
}

/// Create or full-update payload
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRequest {
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    pub price: f64,
    pub stock: i64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl ProductRequest {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::validation("Product name cannot be empty"));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(AppError::validation(format!(
                "Price must be non-negative, got: {}",
                self.price
            )));
        }
        if self.stock < 0 {
            return Err(AppError::validation(format!(
                "Stock must be non-negative, got: {}",
                self.stock
            )));
        }
        Ok(())
    }

    /// Stored fields, without id or creation time
    pub fn to_record(&self) -> Record {
        into_record(json!({
            "name": self.name.trim(),
            "category": self.category,
            "price": self.price,
            "stock": self.stock,
            "description": self.description,
            "imageUrl": self.image_url,
        }))
    }
}
