pub mod invoice_service;
pub mod renderer;
pub mod totals_calculator;

pub use invoice_service::{InvoicePdf, InvoiceService};
pub use renderer::InvoiceRenderer;
pub use totals_calculator::percent_totals;
