// Billing settings model
//
// Merchant details printed on every invoice plus the two tax rates. Rates are
// percent values: `9.0` means 9%.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::content_text;
use crate::core::error::AppError;
use crate::core::fields::into_record;
use crate::core::money::{safe_number_opt, try_number};
use crate::core::traits::Record;
use crate::core::Result;

/// Page key of the billing settings row
pub const BILLING_PAGE_KEY: &str = "billing_settings";

const DEFAULT_COMPANY_NAME: &str = "RK Construction";
const DEFAULT_COMPANY_ADDRESS: &str = "N/A";
const DEFAULT_BANK_NAME: &str = "State Bank of India";
const DEFAULT_ACCOUNT_NUMBER: &str = "1234567890";
const DEFAULT_FOOTER_TEXT: &str = "Thank you for your business!";

/// Resolved billing settings. Every field is always populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingSettings {
    #[serde(rename = "companyName")]
    pub company_name: String,

    #[serde(rename = "companyAddress")]
    pub company_address: String,

    pub bank_name: String,

    pub account_number: String,

    #[serde(rename = "footerText")]
    pub footer_text: String,

    /// CGST percent, finite and non-negative
    pub tax_rate_cgst: f64,

    /// SGST percent, finite and non-negative
    pub tax_rate_sgst: f64,
}

/// Fresh defaults used when no settings row exists
pub fn default_billing_settings() -> BillingSettings {
    BillingSettings {
        company_name: DEFAULT_COMPANY_NAME.to_string(),
        company_address: DEFAULT_COMPANY_ADDRESS.to_string(),
        bank_name: DEFAULT_BANK_NAME.to_string(),
        account_number: DEFAULT_ACCOUNT_NUMBER.to_string(),
        footer_text: DEFAULT_FOOTER_TEXT.to_string(),
        tax_rate_cgst: 0.0,
        tax_rate_sgst: 0.0,
    }
}

impl Default for BillingSettings {
    fn default() -> Self {
        default_billing_settings()
    }
}

impl BillingSettings {
    /// Resolve stored content, defaulting each missing field independently.
    /// Rates that are missing, unparseable or negative become `0.0`.
    pub fn from_content(content: &Record) -> Self {
        Self {
            company_name: content_text(content, "companyName", DEFAULT_COMPANY_NAME),
            company_address: content_text(content, "companyAddress", DEFAULT_COMPANY_ADDRESS),
            bank_name: content_text(content, "bank_name", DEFAULT_BANK_NAME),
            account_number: content_text(content, "account_number", DEFAULT_ACCOUNT_NUMBER),
            footer_text: content_text(content, "footerText", DEFAULT_FOOTER_TEXT),
            tax_rate_cgst: rate(content.get("tax_rate_cgst")),
            tax_rate_sgst: rate(content.get("tax_rate_sgst")),
        }
    }

    /// Content object as stored under the page key
    pub fn to_content(&self) -> Record {
        into_record(json!({
            "companyName": self.company_name,
            "companyAddress": self.company_address,
            "bank_name": self.bank_name,
            "account_number": self.account_number,
            "footerText": self.footer_text,
            "tax_rate_cgst": self.tax_rate_cgst,
            "tax_rate_sgst": self.tax_rate_sgst,
        }))
    }
}

fn rate(value: Option<&Value>) -> f64 {
    safe_number_opt(value, 0.0).max(0.0)
}

/// Admin edit of the billing settings. Rates may be sent as numbers or
/// numeric strings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BillingSettingsForm {
    #[serde(rename = "companyName")]
    pub company_name: Option<String>,
    #[serde(rename = "companyAddress")]
    pub company_address: Option<String>,
    pub bank_name: Option<String>,
    pub account_number: Option<String>,
    #[serde(rename = "footerText")]
    pub footer_text: Option<String>,
    pub tax_rate_cgst: Option<Value>,
    pub tax_rate_sgst: Option<Value>,
}

impl BillingSettingsForm {
    /// Validate the rates and resolve the form into stored settings
    pub fn resolve(self) -> Result<BillingSettings> {
        let cgst = validate_rate("tax_rate_cgst", self.tax_rate_cgst.as_ref())?;
        let sgst = validate_rate("tax_rate_sgst", self.tax_rate_sgst.as_ref())?;

        let defaults = default_billing_settings();
        Ok(BillingSettings {
            company_name: self.company_name.unwrap_or(defaults.company_name),
            company_address: self.company_address.unwrap_or(defaults.company_address),
            bank_name: self.bank_name.unwrap_or(defaults.bank_name),
            account_number: self.account_number.unwrap_or(defaults.account_number),
            footer_text: self.footer_text.unwrap_or(defaults.footer_text),
            tax_rate_cgst: cgst,
            tax_rate_sgst: sgst,
        })
    }
}

/// Highest tax rate an admin may save, in percent
pub const MAX_TAX_RATE: f64 = 100.0;

fn validate_rate(field: &str, value: Option<&Value>) -> Result<f64> {
    let Some(value) = value.filter(|v| !v.is_null()) else {
        return Ok(0.0);
    };

    match try_number(value) {
        Some(rate) if (0.0..=MAX_TAX_RATE).contains(&rate) => Ok(rate),
        _ => Err(AppError::validation(format!(
            "{} must be a percent between 0 and {}, got: {}",
            field, MAX_TAX_RATE, value
        ))),
    }
}
