// Contract for the invoice endpoints: content types, attachment headers,
// and the plain-text failure bodies

#[macro_use]
#[path = "../helpers/mod.rs"]
mod helpers;

use std::sync::{Arc, Mutex};

use actix_web::http::{header, StatusCode};
use actix_web::test;
use async_trait::async_trait;
use helpers::*;
use rk_storefront::core::traits::collections;
use rk_storefront::invoices::services::renderer::{DisabledEngine, DocumentEngine, EngineError};
use rk_storefront::middleware::request_id::REQUEST_ID_HEADER;
use rk_storefront::store::InMemoryRecordStore;
use serde_json::json;

/// Engine that records the markup it was handed
#[derive(Default)]
struct CapturingEngine {
    markup: Mutex<Option<String>>,
}

#[async_trait]
impl DocumentEngine for CapturingEngine {
    async fn render_pdf(&self, markup: &str) -> Result<Vec<u8>, EngineError> {
        if let Ok(mut slot) = self.markup.lock() {
            *slot = Some(markup.to_string());
        }
        Ok(b"%PDF-1.7 captured".to_vec())
    }
}

fn bill_uri(id: &str) -> String {
    format!("/admin/order/{}/bill", id)
}

fn pdf_uri(id: &str) -> String {
    format!("/admin/order/{}/pdf", id)
}

fn body_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

#[actix_web::test]
async fn test_bill_preview_is_html_with_download_link() {
    let app = test_app!(app_state(Arc::new(seeded_store()), Arc::new(DisabledEngine)));

    let req = test::TestRequest::get()
        .uri(&bill_uri(RELATIONAL_ORDER_ID))
        .insert_header(admin_header())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp.headers().get(header::CONTENT_TYPE).unwrap().to_str().unwrap();
    assert!(content_type.starts_with("text/html"));

    let html = body_text(&test::read_body(resp).await);
    assert!(html.contains("Invoice #:</strong> a1b2c3d4"));
    assert!(html.contains("Asha Builders"));
    assert!(html.contains("&#8377;283.20"));
    assert!(html.contains(&format!("href=\"{}\"", pdf_uri(RELATIONAL_ORDER_ID))));
    assert!(!html.contains("invoice-print-style"));
}

#[actix_web::test]
async fn test_pdf_download_is_an_attachment() {
    let engine = Arc::new(CapturingEngine::default());
    let app = test_app!(app_state(Arc::new(seeded_store()), engine.clone()));

    let req = test::TestRequest::get()
        .uri(&pdf_uri(RELATIONAL_ORDER_ID))
        .insert_header(admin_header())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get(header::CONTENT_TYPE).unwrap(), "application/pdf");
    assert_eq!(
        resp.headers().get(header::CONTENT_DISPOSITION).unwrap(),
        "attachment; filename=invoice-a1b2c3d4.pdf"
    );
    assert_eq!(test::read_body(resp).await.as_ref(), b"%PDF-1.7 captured");

    let markup = engine.markup.lock().unwrap().clone().unwrap();
    assert!(markup.contains("<style id=\"invoice-print-style\">"));
    assert!(markup.contains("&#8377;283.20"));
    assert!(!markup.contains("Download PDF"));
}

#[actix_web::test]
async fn test_fallback_pdf_when_engine_unavailable() {
    let app = test_app!(app_state(Arc::new(seeded_store()), Arc::new(DisabledEngine)));

    let req = test::TestRequest::get()
        .uri(&pdf_uri(EMBEDDED_ORDER_ID))
        .insert_header(admin_header())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_DISPOSITION).unwrap(),
        "attachment; filename=invoice-e5f6a7b8.pdf"
    );
    assert!(test::read_body(resp).await.starts_with(b"%PDF"));
}

#[actix_web::test]
async fn test_missing_order_is_plain_text_404() {
    let app = test_app!(app_state(Arc::new(seeded_store()), Arc::new(DisabledEngine)));

    for uri in [bill_uri("no-such-order"), pdf_uri("no-such-order")] {
        let req = test::TestRequest::get()
            .uri(&uri)
            .insert_header(admin_header())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(&test::read_body(resp).await), "Order not found");
    }
}

#[actix_web::test]
async fn test_store_failure_is_plain_text_500() {
    let app = test_app!(app_state(Arc::new(FailingStore), Arc::new(DisabledEngine)));

    let req = test::TestRequest::get()
        .uri(&pdf_uri(RELATIONAL_ORDER_ID))
        .insert_header(admin_header())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_text(&test::read_body(resp).await),
        "Error generating invoice: Store error: connection reset"
    );

    let req = test::TestRequest::get()
        .uri(&bill_uri(RELATIONAL_ORDER_ID))
        .insert_header(admin_header())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_text(&test::read_body(resp).await),
        "Error displaying bill: Store error: connection reset"
    );
}

#[actix_web::test]
async fn test_out_of_range_stored_rate_is_plain_text_500() {
    let mut seed = seed_records();
    seed.retain(|(collection, _)| collection != collections::SITE_SETTINGS);
    seed.push((
        collections::SITE_SETTINGS.to_string(),
        billing_row(json!(1e27), json!(9)),
    ));
    let store = InMemoryRecordStore::with_records(seed);
    let app = test_app!(app_state(Arc::new(store), Arc::new(DisabledEngine)));

    let req = test::TestRequest::get()
        .uri(&pdf_uri(RELATIONAL_ORDER_ID))
        .insert_header(admin_header())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_text(&test::read_body(resp).await),
        "Error generating invoice: Internal error: Invoice amounts exceed the supported range"
    );
}

#[actix_web::test]
async fn test_engine_crash_is_500_without_fallback() {
    let app = test_app!(app_state(Arc::new(seeded_store()), Arc::new(CrashingEngine)));

    let req = test::TestRequest::get()
        .uri(&pdf_uri(RELATIONAL_ORDER_ID))
        .insert_header(admin_header())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_text(&test::read_body(resp).await).starts_with("Error generating invoice: Render error"));
}

#[actix_web::test]
async fn test_invoice_routes_require_admin_key() {
    let app = test_app!(app_state(Arc::new(seeded_store()), Arc::new(DisabledEngine)));

    let req = test::TestRequest::get()
        .uri(&pdf_uri(RELATIONAL_ORDER_ID))
        .to_request();
    let err = test::try_call_service(&app, req).await.err().unwrap();
    assert_eq!(err.as_response_error().status_code(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_request_id_is_echoed() {
    let app = test_app!(app_state(Arc::new(seeded_store()), Arc::new(DisabledEngine)));

    let req = test::TestRequest::get()
        .uri(&bill_uri(RELATIONAL_ORDER_ID))
        .insert_header(admin_header())
        .insert_header((REQUEST_ID_HEADER, "req-42"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.headers().get(REQUEST_ID_HEADER).unwrap(), "req-42");
}
