// Normalized order line item
//
// Line items reach us from the `order_items` collection or embedded in the
// order document, written by several schema versions. Each field has its own
// fallback chain so every downstream consumer sees one shape.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::fields::{first_present, first_text, text_field};
use crate::core::money::{safe_number_opt, try_number};
use crate::core::traits::Record;

/// Name used when no name field is present
pub const DEFAULT_ITEM_NAME: &str = "Item";

const NAME_KEYS: &[&str] = &["product_name", "name", "product"];
const PRICE_KEYS: &[&str] = &["price_at_purchase", "price"];
const DISCOUNT_KEYS: &[&str] = &["discount_amount", "discount"];

/// Canonical line item consumed by totals and both invoice renderers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,

    pub product_name: String,

    /// Unit price at time of purchase
    pub price_at_purchase: f64,

    /// Semantically whole, stored float-compatible
    pub quantity: f64,

    pub discount_amount: f64,

    /// Stored line total when present, otherwise price * quantity - discount
    pub line_total: f64,
}

impl OrderLineItem {
    /// Normalize one raw item record. Never fails.
    pub fn from_raw(raw: &Record) -> Self {
        let price = safe_number_opt(first_present(raw, PRICE_KEYS), 0.0);
        let quantity = safe_number_opt(raw.get("quantity"), 0.0);
        let discount = safe_number_opt(first_present(raw, DISCOUNT_KEYS), 0.0);

        let line_total = raw
            .get("line_total")
            .and_then(try_number)
            .unwrap_or_else(|| Self::compute_total(price, quantity, discount));

        Self {
            id: text_field(raw, "id"),
            product_id: text_field(raw, "product_id"),
            product_name: first_text(raw, NAME_KEYS)
                .unwrap_or_else(|| DEFAULT_ITEM_NAME.to_string()),
            price_at_purchase: price,
            quantity,
            discount_amount: discount,
            line_total,
        }
    }

    /// Normalize a list of raw values, skipping entries that are not objects
    pub fn normalize_all<'a>(raw_items: impl IntoIterator<Item = &'a Value>) -> Vec<Self> {
        raw_items
            .into_iter()
            .filter_map(Value::as_object)
            .map(Self::from_raw)
            .collect()
    }

    pub fn compute_total(price: f64, quantity: f64, discount: f64) -> f64 {
        price * quantity - discount
    }

    /// True when the raw record carries any usable name field
    pub fn has_name(raw: &Record) -> bool {
        first_text(raw, NAME_KEYS).is_some()
    }

    /// Quantity as printed on invoices
    pub fn whole_quantity(&self) -> i64 {
        self.quantity.trunc() as i64
    }

    /// Canonical record form, accepted unchanged by [`OrderLineItem::from_raw`]
    pub fn to_record(&self) -> Record {
        match serde_json::to_value(self) {
            Ok(Value::Object(record)) => record,
            _ => Record::new(),
        }
    }
}
