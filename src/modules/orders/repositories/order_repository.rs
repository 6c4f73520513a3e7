// Order repository
//
// Thin collection-level access for orders, their line items and the product
// names used to label items that were stored without one.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::{json, Value};

use crate::core::fields::{into_record, text_field};
use crate::core::traits::{collections, Filter, Record, RecordStore};
use crate::core::Result;
use crate::modules::orders::models::OrderStatus;

/// Repository for order records
#[derive(Clone)]
pub struct OrderRepository {
    store: Arc<dyn RecordStore>,
}

impl OrderRepository {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Find the raw order record by id
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Record>> {
        self.store
            .select_one(collections::ORDERS, &Filter::by_id(id))
            .await
    }

    /// Raw line items from the child collection
    pub async fn find_items(&self, order_id: &str) -> Result<Vec<Record>> {
        self.store
            .select(
                collections::ORDER_ITEMS,
                &Filter::new().eq("order_id", order_id),
            )
            .await
    }

    /// All orders, newest first
    pub async fn list(&self) -> Result<Vec<Record>> {
        self.store
            .select(collections::ORDERS, &Filter::new().order_desc("date"))
            .await
    }

    pub async fn update_status(&self, id: &str, status: &OrderStatus) -> Result<u64> {
        self.store
            .update(
                collections::ORDERS,
                &Filter::by_id(id),
                into_record(json!({ "status": status.to_string() })),
            )
            .await
    }

    pub async fn update_total(&self, id: &str, total: f64) -> Result<u64> {
        self.store
            .update(
                collections::ORDERS,
                &Filter::by_id(id),
                into_record(json!({ "total": total })),
            )
            .await
    }

    /// Update quantity, discount and line total of one line item. The
    /// purchase price is never rewritten here.
    pub async fn update_item(
        &self,
        item_id: &str,
        quantity: i64,
        discount: f64,
        line_total: f64,
    ) -> Result<u64> {
        self.store
            .update(
                collections::ORDER_ITEMS,
                &Filter::by_id(item_id),
                into_record(json!({
                    "quantity": quantity,
                    "discount_amount": discount,
                    "line_total": line_total,
                })),
            )
            .await
    }

    /// Replace the line item list embedded in the order document under `key`
    pub async fn update_embedded_items(&self, id: &str, key: &str, items: Vec<Value>) -> Result<u64> {
        let mut changes = Record::new();
        changes.insert(key.to_string(), Value::Array(items));
        self.store
            .update(collections::ORDERS, &Filter::by_id(id), changes)
            .await
    }

    /// Map product id to product name for the given ids
    pub async fn product_names(&self, product_ids: &[String]) -> Result<HashMap<String, String>> {
        if product_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let products = self
            .store
            .select(
                collections::PRODUCTS,
                &Filter::new().is_in("id", product_ids.iter().cloned()),
            )
            .await?;

        Ok(products
            .iter()
            .filter_map(|p| Some((text_field(p, "id")?, text_field(p, "name")?)))
            .collect())
    }
}
