use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::core::fields::text_field;
use crate::core::money::{checked_sum, round_half_up, to_exact_decimal, to_float};
use crate::core::traits::Record;
use crate::core::{AppError, Result};
use crate::modules::orders::models::{Order, OrderLineItem, OrderStatus};
use crate::modules::orders::repositories::OrderRepository;

/// Fields that may hold line items embedded in the order document, by priority
const EMBEDDED_ITEM_KEYS: &[&str] = &["line_items", "order_items", "items"];

/// Where an order's line items were read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ItemSource {
    Collection,
    Embedded(&'static str),
}

/// Raw order record with its normalized items
struct LoadedOrder {
    record: Record,
    items: Vec<OrderLineItem>,
    source: ItemSource,
}

/// Order with its normalized items, as shown on the admin detail page
#[derive(Debug, Clone, Serialize)]
pub struct OrderDetail {
    #[serde(flatten)]
    pub order: Order,
    pub line_items: Vec<OrderLineItem>,
}

/// Admin edit of an order: new status plus per-item quantity and discount
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateOrderDetails {
    pub status: String,
    #[serde(default)]
    pub items: Vec<LineItemUpdate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LineItemUpdate {
    pub id: String,
    pub quantity: i64,
    #[serde(default)]
    pub discount: f64,
}

/// Service for order loading, normalization and admin edits
#[derive(Clone)]
pub struct OrderService {
    repo: OrderRepository,
}

impl OrderService {
    pub fn new(repo: OrderRepository) -> Self {
        Self { repo }
    }

    /// Load an order and reconcile its line items into canonical form.
    ///
    /// Returns `(None, [])` when the order does not exist. Items come from the
    /// `order_items` collection; when that read fails or finds nothing, the
    /// first non-empty embedded list on the order document is used instead.
    pub async fn load_order_and_items(
        &self,
        order_id: &str,
    ) -> Result<(Option<Order>, Vec<OrderLineItem>)> {
        Ok(match self.load(order_id).await? {
            Some(loaded) => (Some(Order::from_record(&loaded.record)), loaded.items),
            None => (None, Vec::new()),
        })
    }

    async fn load(&self, order_id: &str) -> Result<Option<LoadedOrder>> {
        let Some(record) = self.repo.find_by_id(order_id).await? else {
            return Ok(None);
        };

        let mut raw_items = match self.repo.find_items(order_id).await {
            Ok(items) => items,
            Err(e) => {
                warn!("Line item fetch failed for order {}: {}", order_id, e);
                Vec::new()
            }
        };

        let mut source = ItemSource::Collection;
        if raw_items.is_empty() {
            if let Some((key, embedded)) = embedded_items(&record) {
                source = ItemSource::Embedded(key);
                raw_items = embedded;
            }
        }

        self.attach_product_names(&mut raw_items).await;

        Ok(Some(LoadedOrder {
            items: raw_items.iter().map(OrderLineItem::from_raw).collect(),
            record,
            source,
        }))
    }

    /// All orders, newest first
    pub async fn list_orders(&self) -> Result<Vec<Order>> {
        let records = self.repo.list().await?;
        Ok(records.iter().map(Order::from_record).collect())
    }

    /// Order with normalized items, or NotFound
    pub async fn get_detail(&self, order_id: &str) -> Result<OrderDetail> {
        match self.load_order_and_items(order_id).await? {
            (Some(order), line_items) => Ok(OrderDetail { order, line_items }),
            (None, _) => Err(AppError::not_found(format!("Order {}", order_id))),
        }
    }

    /// Apply an admin edit and recompute the stored order total.
    ///
    /// The new total is the exact-decimal sum of `price * quantity - discount`
    /// over every item of the order, using the stored purchase prices.
    pub async fn update_details(
        &self,
        order_id: &str,
        request: UpdateOrderDetails,
    ) -> Result<Decimal> {
        let status = request.status.trim();
        if status.is_empty() {
            return Err(AppError::validation("Order status cannot be empty"));
        }

        for update in &request.items {
            if update.quantity < 0 {
                return Err(AppError::validation(format!(
                    "Quantity must be non-negative, got: {}",
                    update.quantity
                )));
            }
            if !update.discount.is_finite() || update.discount < 0.0 {
                return Err(AppError::validation(format!(
                    "Discount must be non-negative, got: {}",
                    update.discount
                )));
            }
        }

        let Some(LoadedOrder {
            record,
            mut items,
            source,
        }) = self.load(order_id).await?
        else {
            return Err(AppError::not_found(format!("Order {}", order_id)));
        };

        for update in &request.items {
            let item = items
                .iter_mut()
                .find(|item| item.id.as_deref() == Some(update.id.as_str()))
                .ok_or_else(|| {
                    AppError::validation(format!("Unknown line item: {}", update.id))
                })?;

            item.quantity = update.quantity as f64;
            item.discount_amount = update.discount;
            item.line_total = OrderLineItem::compute_total(
                item.price_at_purchase,
                item.quantity,
                item.discount_amount,
            );
        }

        let new_total = checked_sum(items.iter().map(|item| to_exact_decimal(item.line_total)))
            .map(round_half_up)
            .ok_or_else(|| AppError::validation("Order total exceeds the supported range"))?;

        let edited: Vec<&OrderLineItem> = items
            .iter()
            .filter(|item| {
                request
                    .items
                    .iter()
                    .any(|update| item.id.as_deref() == Some(update.id.as_str()))
            })
            .collect();

        match source {
            ItemSource::Collection => {
                for item in &edited {
                    let Some(item_id) = item.id.as_deref() else {
                        continue;
                    };
                    let updated = self
                        .repo
                        .update_item(
                            item_id,
                            item.whole_quantity(),
                            item.discount_amount,
                            item.line_total,
                        )
                        .await?;
                    if updated == 0 {
                        return Err(AppError::store(format!(
                            "Line item {} of order {} was not updated",
                            item_id, order_id
                        )));
                    }
                }
            }
            ItemSource::Embedded(key) if !edited.is_empty() => {
                let list = with_edits(&record, key, &edited);
                self.repo.update_embedded_items(order_id, key, list).await?;
            }
            ItemSource::Embedded(_) => {}
        }

        self.repo
            .update_status(order_id, &OrderStatus::from(status))
            .await?;
        self.repo.update_total(order_id, to_float(new_total)).await?;

        info!(
            "Order {} updated: status={}, items={}, total={}",
            order_id,
            status,
            request.items.len(),
            new_total
        );

        Ok(new_total)
    }

    /// Fill `product_name` on items stored with only a product reference.
    /// Lookup failures leave the items untouched.
    async fn attach_product_names(&self, raw_items: &mut [Record]) {
        let missing: Vec<String> = raw_items
            .iter()
            .filter(|raw| !OrderLineItem::has_name(raw))
            .filter_map(|raw| text_field(raw, "product_id"))
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        if missing.is_empty() {
            return;
        }

        let names = match self.repo.product_names(&missing).await {
            Ok(names) => names,
            Err(e) => {
                warn!("Product name lookup failed: {}", e);
                return;
            }
        };

        for raw in raw_items.iter_mut().filter(|raw| !OrderLineItem::has_name(raw)) {
            let name = text_field(raw, "product_id").and_then(|id| names.get(&id).cloned());
            if let Some(name) = name {
                raw.insert("product_name".to_string(), Value::String(name));
            }
        }
    }
}

/// First non-empty list of item objects embedded in the order document,
/// with the key it was found under
fn embedded_items(order: &Record) -> Option<(&'static str, Vec<Record>)> {
    EMBEDDED_ITEM_KEYS.iter().find_map(|key| {
        let list = order.get(*key).and_then(Value::as_array)?;
        if list.is_empty() {
            return None;
        }
        Some((
            *key,
            list.iter().filter_map(Value::as_object).cloned().collect(),
        ))
    })
}

/// The embedded list under `key` with edited quantities, discounts and
/// line totals written over the matching entries. Other fields and entries
/// are kept as stored.
fn with_edits(order: &Record, key: &str, edited: &[&OrderLineItem]) -> Vec<Value> {
    let mut list = order
        .get(key)
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();

    for raw in list.iter_mut().filter_map(Value::as_object_mut) {
        let Some(id) = text_field(raw, "id") else {
            continue;
        };
        if let Some(item) = edited.iter().find(|item| item.id.as_deref() == Some(id.as_str())) {
            raw.insert("quantity".to_string(), json!(item.whole_quantity()));
            raw.insert("discount_amount".to_string(), json!(item.discount_amount));
            raw.insert("line_total".to_string(), json!(item.line_total));
        }
    }

    list
}
