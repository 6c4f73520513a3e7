// Order model
//
// Orders are written by the checkout flow and edited by admins. Status is an
// open set in stored data: the four known values get variants, anything else
// is preserved verbatim so an edit never rewrites an unknown status.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::core::fields::{first_text, short_id, text_field};
use crate::core::money::safe_number_opt;
use crate::core::traits::Record;

/// Characters of the order id shown on invoices and file names
pub const SHORT_ID_LEN: usize = 8;

/// Order status lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Pending,
    Processing,
    Completed,
    Cancelled,
    /// Any status string written by an older client
    Other(String),
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "Pending"),
            OrderStatus::Processing => write!(f, "Processing"),
            OrderStatus::Completed => write!(f, "Completed"),
            OrderStatus::Cancelled => write!(f, "Cancelled"),
            OrderStatus::Other(status) => write!(f, "{}", status),
        }
    }
}

impl From<String> for OrderStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Pending" => OrderStatus::Pending,
            "Processing" => OrderStatus::Processing,
            "Completed" => OrderStatus::Completed,
            "Cancelled" => OrderStatus::Cancelled,
            _ => OrderStatus::Other(s),
        }
    }
}

impl From<&str> for OrderStatus {
    fn from(s: &str) -> Self {
        OrderStatus::from(s.to_string())
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        status.to_string()
    }
}

/// An order as read from the record store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub user_id: Option<String>,
    pub customer_name: Option<String>,
    pub status: OrderStatus,
    /// Stored order total; invoices never use it for tax
    pub total: f64,
    /// Raw placement timestamp (`date`, falling back to `created_at`)
    pub placed_at: Option<String>,
}

impl Order {
    /// Build an order from a stored record, tolerating missing fields
    pub fn from_record(record: &Record) -> Self {
        Self {
            id: text_field(record, "id").unwrap_or_default(),
            user_id: text_field(record, "user_id"),
            customer_name: text_field(record, "customer_name"),
            status: text_field(record, "status")
                .map(OrderStatus::from)
                .unwrap_or_default(),
            total: safe_number_opt(record.get("total"), 0.0),
            placed_at: first_text(record, &["date", "created_at"]),
        }
    }

    /// First characters of the id, as printed on invoices
    pub fn short_id(&self) -> &str {
        short_id(&self.id, SHORT_ID_LEN)
    }

    pub fn customer_display(&self) -> &str {
        self.customer_name.as_deref().unwrap_or("N/A")
    }

    /// Placement date as `YYYY-MM-DD`, or the raw value when unparseable
    pub fn display_date(&self) -> String {
        match self.placed_at.as_deref() {
            Some(raw) => format_date(raw),
            None => "N/A".to_string(),
        }
    }
}

fn format_date(raw: &str) -> String {
    let normalized = raw.replace('Z', "+00:00");

    if let Ok(dt) = DateTime::parse_from_rfc3339(&normalized) {
        return dt.format("%Y-%m-%d").to_string();
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return dt.format("%Y-%m-%d").to_string();
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%Y-%m-%d").to_string();
    }

    raw.to_string()
}
