use serde::Serialize;

use super::InvoiceTotals;
use crate::modules::orders::{Order, OrderLineItem};
use crate::modules::settings::BillingSettings;

/// Everything either render path needs, computed once per request
#[derive(Debug, Clone, Serialize)]
pub struct InvoiceDocument {
    pub order: Order,
    pub items: Vec<OrderLineItem>,
    pub settings: BillingSettings,
    pub totals: InvoiceTotals,
}

impl InvoiceDocument {
    /// Invoice number shown on the document: the truncated order id
    pub fn invoice_number(&self) -> &str {
        self.order.short_id()
    }

    pub fn attachment_filename(&self) -> String {
        format!("invoice-{}.pdf", self.invoice_number())
    }
}
