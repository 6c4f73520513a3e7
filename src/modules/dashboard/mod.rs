// Dashboard module
//
// Headline figures for the admin landing page.

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::DashboardStats;
pub use repositories::DashboardRepository;
pub use services::DashboardService;
