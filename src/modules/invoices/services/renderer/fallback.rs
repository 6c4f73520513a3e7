// Manual drawing fallback
//
// Used only when the document engine is unavailable. Lays the invoice out as
// plain text lines on a US-Letter canvas, starting a new page whenever the
// cursor drops below the bottom margin.

use thiserror::Error;

use crate::core::money::{format_amount, format_float};
use crate::modules::invoices::models::InvoiceDocument;

/// US-Letter, in points
pub const PAGE_WIDTH_PT: f32 = 612.0;
pub const PAGE_HEIGHT_PT: f32 = 792.0;

pub const LEFT_MARGIN_PT: f32 = 40.0;
pub const TOP_MARGIN_PT: f32 = 50.0;
pub const BOTTOM_MARGIN_PT: f32 = 80.0;
pub const LINE_STEP_PT: f32 = 14.0;

/// Builtin fonts cannot draw the rupee sign
const CURRENCY: &str = "Rs.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Regular,
    Bold,
}

#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("pdf canvas: {0}")]
    Pdf(String),
}

/// Low-level drawing surface. Coordinates are points from the bottom-left
/// corner of the current page.
pub trait Canvas {
    fn set_font(&mut self, style: FontStyle, size: f32);
    fn draw_text(&mut self, x: f32, y: f32, text: &str);
    fn new_page(&mut self);
    fn finish(self) -> Result<Vec<u8>, CanvasError>
    where
        Self: Sized;
}

/// Cursor that writes one line at a time and paginates
struct LineWriter<'a, C: Canvas> {
    canvas: &'a mut C,
    y: f32,
}

impl<'a, C: Canvas> LineWriter<'a, C> {
    fn new(canvas: &'a mut C) -> Self {
        Self {
            canvas,
            y: PAGE_HEIGHT_PT - TOP_MARGIN_PT,
        }
    }

    fn font(&mut self, style: FontStyle, size: f32) {
        self.canvas.set_font(style, size);
    }

    fn line(&mut self, text: &str) {
        if self.y < BOTTOM_MARGIN_PT {
            self.canvas.new_page();
            self.y = PAGE_HEIGHT_PT - TOP_MARGIN_PT;
        }
        if !text.is_empty() {
            self.canvas.draw_text(LEFT_MARGIN_PT, self.y, text);
        }
        self.y -= LINE_STEP_PT;
    }

    fn blank(&mut self) {
        self.line("");
    }
}

/// Draw the full invoice onto `canvas`
pub fn draw_invoice<C: Canvas>(canvas: &mut C, doc: &InvoiceDocument) {
    let settings = &doc.settings;
    let totals = &doc.totals;
    let mut out = LineWriter::new(canvas);

    out.font(FontStyle::Bold, 12.0);
    out.line(&format!("Invoice: {}", doc.invoice_number()));
    out.font(FontStyle::Regular, 10.0);
    out.line(&settings.company_name);
    out.line(&settings.company_address);
    out.blank();
    out.line(&format!("Customer: {}", doc.order.customer_display()));
    out.line(&format!("Date: {}", doc.order.display_date()));
    out.blank();

    out.font(FontStyle::Bold, 10.0);
    out.line("Items:");
    out.font(FontStyle::Regular, 10.0);
    for item in &doc.items {
        out.line(&format!(
            " - {} x{} @ {c}{} (-{c}{}) = {c}{}",
            item.product_name,
            item.whole_quantity(),
            format_float(item.price_at_purchase),
            format_float(item.discount_amount),
            format_float(item.line_total),
            c = CURRENCY,
        ));
    }

    out.font(FontStyle::Bold, 10.0);
    out.blank();
    out.line(&format!("Taxable Value: {}{}", CURRENCY, totals.taxable_display()));
    out.line(&format!(
        "CGST ({}%): {}{}",
        format_amount(totals.cgst_rate),
        CURRENCY,
        format_amount(totals.cgst_amount)
    ));
    out.line(&format!(
        "SGST ({}%): {}{}",
        format_amount(totals.sgst_rate),
        CURRENCY,
        format_amount(totals.sgst_amount)
    ));
    out.line(&format!("Grand Total: {}{}", CURRENCY, totals.grand_total_display()));

    out.font(FontStyle::Regular, 10.0);
    out.blank();
    out.line("Bank Details:");
    out.line(&format!("Bank: {}", settings.bank_name));
    out.line(&format!("Account: {}", settings.account_number));
    out.line(&settings.footer_text);
}
