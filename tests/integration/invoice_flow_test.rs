// End-to-end invoice flow over the in-memory store: order loading, item
// normalization, settings resolution, totals and both PDF paths

#[macro_use]
#[path = "../helpers/mod.rs"]
mod helpers;

use std::sync::Arc;

use helpers::*;
use rk_storefront::core::traits::{collections, RecordStore};
use rk_storefront::invoices::services::renderer::{DisabledEngine, DocumentEngine, RenderPath};
use rk_storefront::orders::services::UpdateOrderDetails;
use rk_storefront::store::InMemoryRecordStore;
use rust_decimal_macros::dec;
use serde_json::json;

fn state_with(store: InMemoryRecordStore, engine: Arc<dyn DocumentEngine>) -> rk_storefront::AppState {
    app_state(Arc::new(store), engine)
}

#[tokio::test]
async fn test_relational_order_invoice_totals() {
    let state = state_with(seeded_store(), Arc::new(DisabledEngine));

    let doc = state.invoices.build_document(RELATIONAL_ORDER_ID).await.unwrap();

    assert_eq!(doc.invoice_number(), "a1b2c3d4");
    assert_eq!(doc.items.len(), 1);
    assert_eq!(doc.items[0].product_name, "Cement Bag 50kg");
    assert_eq!(doc.totals.taxable_value, dec!(240));
    assert_eq!(doc.totals.cgst_amount, dec!(21.60));
    assert_eq!(doc.totals.sgst_amount, dec!(21.60));
    assert_eq!(doc.totals.grand_total, dec!(283.20));
    assert_eq!(doc.settings.company_name, "RK Construction");
}

#[tokio::test]
async fn test_embedded_items_used_when_child_collection_empty() {
    let state = state_with(seeded_store(), Arc::new(DisabledEngine));

    let doc = state.invoices.build_document(EMBEDDED_ORDER_ID).await.unwrap();

    assert_eq!(doc.items.len(), 1);
    assert_eq!(doc.items[0].product_name, "Floor Tiles");
    assert_eq!(doc.totals.taxable_value, dec!(150));
    assert_eq!(doc.totals.grand_total, dec!(177.00));
    assert_eq!(doc.order.display_date(), "2025-02-01");
}

#[tokio::test]
async fn test_order_without_items_renders_zero_invoice() {
    let state = state_with(seeded_store(), Arc::new(DisabledEngine));

    let html = state.invoices.preview(EMPTY_ORDER_ID).await.unwrap();
    assert!(html.contains("No items"));
    assert!(html.contains("Grand Total"));
    assert!(html.contains("&#8377;0.00"));

    let pdf = state.invoices.download(EMPTY_ORDER_ID).await.unwrap();
    assert!(pdf.bytes.starts_with(b"%PDF"));
}

#[tokio::test]
async fn test_missing_billing_settings_use_defaults() {
    let store = InMemoryRecordStore::with_records(
        seed_records()
            .into_iter()
            .filter(|(collection, _)| collection != collections::SITE_SETTINGS),
    );
    let state = state_with(store, Arc::new(DisabledEngine));

    let doc = state.invoices.build_document(RELATIONAL_ORDER_ID).await.unwrap();
    assert_eq!(doc.totals.cgst_amount, dec!(0));
    assert_eq!(doc.totals.grand_total, dec!(240));
}

#[tokio::test]
async fn test_garbage_rates_resolve_to_zero() {
    let mut seed = seed_records();
    seed.retain(|(collection, _)| collection != collections::SITE_SETTINGS);
    seed.push((
        collections::SITE_SETTINGS.to_string(),
        billing_row(json!("nine"), json!(-5)),
    ));
    let state = state_with(InMemoryRecordStore::with_records(seed), Arc::new(DisabledEngine));

    let doc = state.invoices.build_document(RELATIONAL_ORDER_ID).await.unwrap();
    assert_eq!(doc.settings.tax_rate_cgst, 0.0);
    assert_eq!(doc.settings.tax_rate_sgst, 0.0);
    assert_eq!(doc.totals.grand_total, dec!(240));
}

#[tokio::test]
async fn test_download_prefers_engine_output() {
    let state = state_with(seeded_store(), Arc::new(StaticEngine(b"%PDF-engine".to_vec())));

    let pdf = state.invoices.download(RELATIONAL_ORDER_ID).await.unwrap();
    assert_eq!(pdf.path, RenderPath::Engine);
    assert_eq!(pdf.bytes, b"%PDF-engine".to_vec());
    assert_eq!(pdf.filename, "invoice-a1b2c3d4.pdf");
}

#[tokio::test]
async fn test_download_falls_back_when_engine_unavailable() {
    let state = state_with(seeded_store(), Arc::new(DisabledEngine));

    let pdf = state.invoices.download(RELATIONAL_ORDER_ID).await.unwrap();
    assert_eq!(pdf.path, RenderPath::Fallback);
    assert!(pdf.bytes.starts_with(b"%PDF"));
}

#[tokio::test]
async fn test_crashing_engine_is_an_error_not_a_fallback() {
    let state = state_with(seeded_store(), Arc::new(CrashingEngine));

    let err = state.invoices.download(RELATIONAL_ORDER_ID).await.unwrap_err();
    assert!(err.to_string().starts_with("Render error"));
}

#[tokio::test]
async fn test_missing_order_is_not_found() {
    let state = state_with(seeded_store(), Arc::new(DisabledEngine));

    let err = state.invoices.download("no-such-order").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_store_failure_propagates() {
    let state = app_state(Arc::new(FailingStore), Arc::new(DisabledEngine));

    let err = state.invoices.preview(RELATIONAL_ORDER_ID).await.unwrap_err();
    assert!(!err.is_not_found());
    assert_eq!(err.to_string(), "Store error: connection reset");
}

#[tokio::test]
async fn test_edited_order_flows_into_invoice() {
    let store = Arc::new(seeded_store());
    let state = app_state(store.clone(), Arc::new(DisabledEngine));

    let request: UpdateOrderDetails = serde_json::from_value(json!({
        "status": "Completed",
        "items": [{"id": "item-1", "quantity": 3, "discount": 10}],
    }))
    .unwrap();
    let total = state
        .orders
        .update_details(RELATIONAL_ORDER_ID, request)
        .await
        .unwrap();
    assert_eq!(total, dec!(350));

    let stored = store
        .select_one(
            collections::ORDERS,
            &rk_storefront::core::traits::Filter::by_id(RELATIONAL_ORDER_ID),
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored["status"], "Completed");
    assert_eq!(stored["total"], json!(350.0));

    let doc = state.invoices.build_document(RELATIONAL_ORDER_ID).await.unwrap();
    assert_eq!(doc.items[0].whole_quantity(), 3);
    assert_eq!(doc.totals.cgst_amount, dec!(31.50));
    assert_eq!(doc.totals.grand_total, dec!(413.00));
}

#[tokio::test]
async fn test_edited_embedded_items_flow_into_invoice() {
    let mut seed = seed_records();
    seed.push((
        collections::ORDERS.to_string(),
        record(json!({
            "id": "ord_embedded_edit",
            "status": "Pending",
            "total": 100,
            "line_items": [{"id": "a", "product_name": "Wall Putty", "price": 100, "quantity": 1}],
        })),
    ));
    let state = state_with(InMemoryRecordStore::with_records(seed), Arc::new(DisabledEngine));

    let request: UpdateOrderDetails = serde_json::from_value(json!({
        "status": "Completed",
        "items": [{"id": "a", "quantity": 5}],
    }))
    .unwrap();
    let total = state
        .orders
        .update_details("ord_embedded_edit", request)
        .await
        .unwrap();
    assert_eq!(total, dec!(500));

    let doc = state.invoices.build_document("ord_embedded_edit").await.unwrap();
    assert_eq!(doc.order.total, 500.0);
    assert_eq!(doc.items[0].whole_quantity(), 5);
    assert_eq!(doc.totals.taxable_value, dec!(500));
    assert_eq!(doc.totals.grand_total, dec!(590.00));
}
