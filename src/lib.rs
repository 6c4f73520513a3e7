//! RK Construction storefront back-office.
//!
//! Admin API over orders, products, site settings and custom bills, plus the
//! invoice pipeline that turns a stored order into a GST invoice.

pub mod app;
pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;
pub mod store;

// Re-export commonly used types
pub use app::AppState;
pub use modules::invoices;
pub use modules::orders;
pub use modules::settings;
