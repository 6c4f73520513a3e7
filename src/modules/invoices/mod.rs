// Invoices module
//
// Order -> normalized items -> totals -> rendered invoice (HTML or PDF).

pub mod controllers;
pub mod models;
pub mod services;

pub use models::{InvoiceDocument, InvoiceTotals};
pub use services::{percent_totals, InvoiceRenderer, InvoiceService};
