// Settings module
//
// Singleton content rows in `site_settings`, keyed by page key.

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{AboutSettings, BillingSettings, ShopSettings};
pub use repositories::SettingsRepository;
pub use services::SettingsService;
