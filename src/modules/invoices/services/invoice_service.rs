use std::sync::Arc;

use tracing::info;

use crate::core::error::AppError;
use crate::core::Result;
use crate::modules::invoices::models::InvoiceDocument;
use crate::modules::invoices::services::renderer::{InvoiceRenderer, RenderPath};
use crate::modules::invoices::services::totals_calculator::percent_totals;
use crate::modules::orders::OrderService;
use crate::modules::settings::SettingsService;

/// A downloadable invoice
#[derive(Debug, Clone)]
pub struct InvoicePdf {
    pub filename: String,
    pub bytes: Vec<u8>,
    pub path: RenderPath,
}

/// Composes order loading, settings resolution, totals and rendering
pub struct InvoiceService {
    orders: Arc<OrderService>,
    settings: Arc<SettingsService>,
    renderer: InvoiceRenderer,
}

impl InvoiceService {
    pub fn new(
        orders: Arc<OrderService>,
        settings: Arc<SettingsService>,
        renderer: InvoiceRenderer,
    ) -> Self {
        Self {
            orders,
            settings,
            renderer,
        }
    }

    /// Load everything an invoice shows. A missing order is NotFound and
    /// stops before settings or totals are touched.
    pub async fn build_document(&self, order_id: &str) -> Result<InvoiceDocument> {
        let (order, items) = self.orders.load_order_and_items(order_id).await?;
        let order = order.ok_or_else(|| AppError::not_found(format!("Order {}", order_id)))?;

        let settings = self.settings.fetch_billing_settings().await?;
        let totals = percent_totals(&items, settings.tax_rate_cgst, settings.tax_rate_sgst)?;

        Ok(InvoiceDocument {
            order,
            items,
            settings,
            totals,
        })
    }

    /// HTML preview of the invoice
    pub async fn preview(&self, order_id: &str) -> Result<String> {
        let doc = self.build_document(order_id).await?;
        self.renderer.preview_html(&doc)
    }

    /// PDF invoice with its attachment filename
    pub async fn download(&self, order_id: &str) -> Result<InvoicePdf> {
        let doc = self.build_document(order_id).await?;
        let rendered = self.renderer.render_pdf(&doc).await?;

        info!(
            "Invoice {} generated via {:?}: {} items, grand total {}",
            doc.invoice_number(),
            rendered.path,
            doc.items.len(),
            doc.totals.grand_total_display()
        );

        Ok(InvoicePdf {
            filename: doc.attachment_filename(),
            bytes: rendered.bytes,
            path: rendered.path,
        })
    }
}
