// Service-level app builder: the full route table over a chosen store

use std::sync::Arc;

use rk_storefront::core::traits::RecordStore;
use rk_storefront::invoices::services::renderer::DocumentEngine;
use rk_storefront::middleware::{hash_api_key, API_KEY_HEADER};
use rk_storefront::AppState;

pub const ADMIN_KEY: &str = "rk-admin-test-key";

pub fn admin_key_hash() -> String {
    hash_api_key(ADMIN_KEY).unwrap()
}

pub fn admin_header() -> (&'static str, &'static str) {
    (API_KEY_HEADER, ADMIN_KEY)
}

pub fn app_state(store: Arc<dyn RecordStore>, engine: Arc<dyn DocumentEngine>) -> AppState {
    AppState::new(store, engine)
}

/// Build an initialized actix test service with every route mounted
macro_rules! test_app {
    ($state:expr) => {{
        let state = $state;
        let hash = $crate::helpers::admin_key_hash();
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(rk_storefront::middleware::RequestId)
                .configure(|cfg| state.configure(cfg, &hash)),
        )
        .await
    }};
}
