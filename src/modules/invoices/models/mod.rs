mod invoice_document;
mod invoice_totals;

pub use invoice_document::InvoiceDocument;
pub use invoice_totals::InvoiceTotals;
