use std::cmp::Ordering;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::core::Result;

/// A decoded record: one JSON object per row/document
pub type Record = Map<String, Value>;

/// Collection names used across modules
pub mod collections {
    pub const ORDERS: &str = "orders";
    pub const ORDER_ITEMS: &str = "order_items";
    pub const PRODUCTS: &str = "products";
    pub const PROFILES: &str = "profiles";
    pub const SITE_SETTINGS: &str = "site_settings";
    pub const CUSTOM_BILLS: &str = "custom_billing_data";
}

/// Base persistence trait for every collection.
///
/// Implementations must report driver failures as errors and "no rows" as an
/// empty result, never the other way around.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetch all records matching the filter
    async fn select(&self, collection: &str, filter: &Filter) -> Result<Vec<Record>>;

    /// Insert a record, assigning an `id` when the record has none
    async fn insert(&self, collection: &str, record: Record) -> Result<Record>;

    /// Merge `changes` into every matching record, returning the match count
    async fn update(&self, collection: &str, filter: &Filter, changes: Record) -> Result<u64>;

    /// Insert, or merge into the record whose `on_conflict` field matches
    async fn upsert(&self, collection: &str, on_conflict: &str, record: Record) -> Result<Record>;

    /// Delete every matching record, returning the delete count
    async fn delete(&self, collection: &str, filter: &Filter) -> Result<u64>;

    /// Connectivity check behind `/ready`
    async fn ping(&self) -> Result<()>;

    /// Fetch the first record matching the filter
    async fn select_one(&self, collection: &str, filter: &Filter) -> Result<Option<Record>> {
        let filter = filter.clone().limit(1);
        Ok(self.select(collection, &filter).await?.into_iter().next())
    }
}

/// A single predicate on a top-level record field
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    Eq(String, Value),
    In(String, Vec<Value>),
}

impl Condition {
    pub fn field(&self) -> &str {
        match self {
            Condition::Eq(field, _) | Condition::In(field, _) => field,
        }
    }

    pub fn matches(&self, record: &Record) -> bool {
        match self {
            Condition::Eq(field, expected) => record
                .get(field)
                .is_some_and(|actual| values_equal(actual, expected)),
            Condition::In(field, candidates) => record
                .get(field)
                .is_some_and(|actual| candidates.iter().any(|c| values_equal(actual, c))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    pub field: String,
    pub descending: bool,
}

/// Query description shared by every store implementation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    pub conditions: Vec<Condition>,
    pub order_by: Option<OrderBy>,
    pub limit: Option<usize>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for the common `id = ?` lookup
    pub fn by_id(id: impl Into<String>) -> Self {
        Self::new().eq("id", id.into())
    }

    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.conditions
            .push(Condition::Eq(field.into(), value.into()));
        self
    }

    pub fn is_in<V: Into<Value>>(
        mut self,
        field: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        self.conditions.push(Condition::In(
            field.into(),
            values.into_iter().map(Into::into).collect(),
        ));
        self
    }

    pub fn order_desc(mut self, field: impl Into<String>) -> Self {
        self.order_by = Some(OrderBy {
            field: field.into(),
            descending: true,
        });
        self
    }

    pub fn order_asc(mut self, field: impl Into<String>) -> Self {
        self.order_by = Some(OrderBy {
            field: field.into(),
            descending: false,
        });
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// True when every condition holds for the record
    pub fn matches(&self, record: &Record) -> bool {
        self.conditions.iter().all(|c| c.matches(record))
    }

    /// Sort and truncate an already-filtered result set
    pub fn apply_ordering(&self, records: &mut Vec<Record>) {
        if let Some(order) = &self.order_by {
            records.sort_by(|a, b| {
                let ordering = compare_values(a.get(&order.field), b.get(&order.field));
                if order.descending {
                    ordering.reverse()
                } else {
                    ordering
                }
            });
        }

        if let Some(limit) = self.limit {
            records.truncate(limit);
        }
    }
}

/// Ids are stored as strings by some writers and as numbers by others
fn values_equal(actual: &Value, expected: &Value) -> bool {
    match (actual, expected) {
        (Value::String(a), Value::Number(b)) | (Value::Number(b), Value::String(a)) => {
            a == &b.to_string()
        }
        _ => actual == expected,
    }
}

/// Missing and null sort first; numbers numerically, everything else by text
fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    let a = a.filter(|v| !v.is_null());
    let b = b.filter(|v| !v.is_null());

    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(x), Some(y)) => x.to_string().cmp(&y.to_string()),
    }
}
