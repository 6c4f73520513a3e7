pub mod billing_settings;
pub mod site_content;

pub use billing_settings::{default_billing_settings, BillingSettings, BillingSettingsForm};
pub use site_content::{default_about_settings, default_shop_settings, AboutSettings, ShopSettings};

use serde_json::Value;

use crate::core::traits::Record;

/// Text of a content field. Missing, null and structured values fall back to
/// `default`; numbers are stringified. Strings are kept as stored.
pub(crate) fn content_text(content: &Record, key: &str, default: &str) -> String {
    match content.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => default.to_string(),
    }
}
