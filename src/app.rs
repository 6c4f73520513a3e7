//! Service wiring and route table shared by the binary and the HTTP tests.

use std::sync::Arc;

use actix_web::web;

use crate::core::traits::RecordStore;
use crate::middleware::{json_error_handler, AdminAuth};
use crate::modules::custom_bills::{controllers::custom_bill_controller, CustomBillRepository, CustomBillService};
use crate::modules::dashboard::{controllers::dashboard_controller, DashboardRepository, DashboardService};
use crate::modules::health::controllers::health_controller;
use crate::modules::invoices::controllers::invoice_controller;
use crate::modules::invoices::services::renderer::DocumentEngine;
use crate::modules::invoices::{InvoiceRenderer, InvoiceService};
use crate::modules::orders::{controllers::order_controller, OrderRepository, OrderService};
use crate::modules::products::{controllers::product_controller, ProductRepository, ProductService};
use crate::modules::settings::{controllers::settings_controller, SettingsRepository, SettingsService};
use crate::modules::users::{controllers::user_controller, UserRepository, UserService};

/// Every service the routes need, built once and cloned into each worker
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    pub orders: Arc<OrderService>,
    pub settings: Arc<SettingsService>,
    pub invoices: Arc<InvoiceService>,
    pub products: Arc<ProductService>,
    pub custom_bills: Arc<CustomBillService>,
    pub dashboard: Arc<DashboardService>,
    pub users: Arc<UserService>,
}

impl AppState {
    pub fn new(store: Arc<dyn RecordStore>, engine: Arc<dyn DocumentEngine>) -> Self {
        let orders = Arc::new(OrderService::new(OrderRepository::new(store.clone())));
        let settings = Arc::new(SettingsService::new(SettingsRepository::new(store.clone())));
        let invoices = Arc::new(InvoiceService::new(
            orders.clone(),
            settings.clone(),
            InvoiceRenderer::new(engine),
        ));

        Self {
            orders,
            settings,
            invoices,
            products: Arc::new(ProductService::new(ProductRepository::new(store.clone()))),
            custom_bills: Arc::new(CustomBillService::new(CustomBillRepository::new(store.clone()))),
            dashboard: Arc::new(DashboardService::new(DashboardRepository::new(store.clone()))),
            users: Arc::new(UserService::new(UserRepository::new(store.clone()))),
            store,
        }
    }

    /// Register app data and routes. Everything under `/admin` requires the
    /// admin API key.
    pub fn configure(&self, cfg: &mut web::ServiceConfig, admin_key_hash: &str) {
        cfg.app_data(web::Data::new(self.store.clone()))
            .app_data(web::Data::new(self.orders.clone()))
            .app_data(web::Data::new(self.settings.clone()))
            .app_data(web::Data::new(self.invoices.clone()))
            .app_data(web::Data::new(self.products.clone()))
            .app_data(web::Data::new(self.custom_bills.clone()))
            .app_data(web::Data::new(self.dashboard.clone()))
            .app_data(web::Data::new(self.users.clone()))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler));

        cfg.configure(health_controller::configure)
            .configure(settings_controller::configure_public)
            .service(
                web::scope("/admin")
                    .wrap(AdminAuth::new(admin_key_hash))
                    .configure(dashboard_controller::configure)
                    .configure(order_controller::configure)
                    .configure(invoice_controller::configure)
                    .configure(product_controller::configure)
                    .configure(settings_controller::configure)
                    .configure(custom_bill_controller::configure)
                    .configure(user_controller::configure),
            );
    }
}
