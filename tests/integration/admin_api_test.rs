// Admin HTTP surface: key checks, orders, products, settings, custom bills,
// user profiles and the dashboard, all through the full route table

#[macro_use]
#[path = "../helpers/mod.rs"]
mod helpers;

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test;
use helpers::*;
use rk_storefront::invoices::services::renderer::DisabledEngine;
use rk_storefront::middleware::API_KEY_HEADER;
use serde_json::{json, Value};

fn seeded_state() -> rk_storefront::AppState {
    app_state(Arc::new(seeded_store()), Arc::new(DisabledEngine))
}

#[actix_web::test]
async fn test_admin_routes_reject_missing_or_wrong_key() {
    let app = test_app!(seeded_state());

    let req = test::TestRequest::get().uri("/admin/orders").to_request();
    let err = test::try_call_service(&app, req).await.err().unwrap();
    assert_eq!(err.as_response_error().status_code(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::get()
        .uri("/admin/dashboard")
        .insert_header((API_KEY_HEADER, "guess"))
        .to_request();
    let err = test::try_call_service(&app, req).await.err().unwrap();
    assert_eq!(err.as_response_error().status_code(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_public_routes_need_no_key() {
    let app = test_app!(seeded_state());

    let req = test::TestRequest::get().uri("/about").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["intro_text"], "Content loading error.");
    assert_eq!(body["map_url"], "Default Address");

    let req = test::TestRequest::get().uri("/ready").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_order_list_detail_and_edit() {
    let app = test_app!(seeded_state());

    let req = test::TestRequest::get()
        .uri("/admin/orders")
        .insert_header(admin_header())
        .to_request();
    let orders: Value = test::call_and_read_body_json(&app, req).await;
    let orders = orders.as_array().unwrap();
    assert_eq!(orders.len(), 3);
    assert_eq!(orders[0]["id"], RELATIONAL_ORDER_ID);

    let req = test::TestRequest::get()
        .uri(&format!("/admin/orders/{}", RELATIONAL_ORDER_ID))
        .insert_header(admin_header())
        .to_request();
    let detail: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(detail["line_items"][0]["product_name"], "Cement Bag 50kg");
    assert_eq!(detail["line_items"][0]["line_total"], json!(240.0));

    let req = test::TestRequest::post()
        .uri(&format!("/admin/orders/{}/update_details", RELATIONAL_ORDER_ID))
        .insert_header(admin_header())
        .set_json(json!({
            "status": "Completed",
            "items": [{"id": "item-1", "quantity": 1, "discount": 0.5}],
        }))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["total"], "119.50");
}

#[actix_web::test]
async fn test_order_edit_validation() {
    let app = test_app!(seeded_state());

    let req = test::TestRequest::post()
        .uri(&format!("/admin/orders/{}/update_details", RELATIONAL_ORDER_ID))
        .insert_header(admin_header())
        .set_json(json!({"status": "Completed", "items": [{"id": "item-9", "quantity": 1}]}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri(&format!("/admin/orders/{}/update_details", RELATIONAL_ORDER_ID))
        .insert_header(admin_header())
        .set_json(json!({"status": "Completed", "items": [{"id": "item-1", "quantity": -2}]}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get()
        .uri("/admin/orders/no-such-order")
        .insert_header(admin_header())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], 404);
}

#[actix_web::test]
async fn test_product_crud() {
    let app = test_app!(seeded_state());

    let req = test::TestRequest::post()
        .uri("/admin/products")
        .insert_header(admin_header())
        .set_json(json!({
            "name": "PVC Pipe 1in",
            "category": "Plumbing",
            "price": 85.5,
            "stock": 30,
            "image_url": "https://cdn.example.com/pvc.png",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    let id = created["id"].as_str().unwrap().to_string();
    assert!(id.starts_with("prod_"));
    assert_eq!(created["image_url"], "https://cdn.example.com/pvc.png");

    let req = test::TestRequest::put()
        .uri(&format!("/admin/products/{}", id))
        .insert_header(admin_header())
        .set_json(json!({"name": "PVC Pipe 1in", "price": 90, "stock": 25}))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["price"], json!(90.0));
    assert_eq!(updated["stock"], 25);

    let req = test::TestRequest::delete()
        .uri(&format!("/admin/products/{}", id))
        .insert_header(admin_header())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get()
        .uri(&format!("/admin/products/{}", id))
        .insert_header(admin_header())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_product_validation_and_malformed_json() {
    let app = test_app!(seeded_state());

    let req = test::TestRequest::post()
        .uri("/admin/products")
        .insert_header(admin_header())
        .set_json(json!({"name": "Nails", "price": -1, "stock": 5}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/admin/products")
        .insert_header(admin_header())
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"name\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], 400);
}

#[actix_web::test]
async fn test_billing_settings_round_trip() {
    let app = test_app!(seeded_state());

    let req = test::TestRequest::get()
        .uri("/admin/bill_settings")
        .insert_header(admin_header())
        .to_request();
    let current: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(current["companyName"], "RK Construction");
    assert_eq!(current["tax_rate_sgst"], json!(9.0));

    let req = test::TestRequest::put()
        .uri("/admin/bill_settings")
        .insert_header(admin_header())
        .set_json(json!({"companyName": "RK Hardware", "tax_rate_cgst": "6", "tax_rate_sgst": 6}))
        .to_request();
    let saved: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(saved["companyName"], "RK Hardware");
    assert_eq!(saved["tax_rate_cgst"], json!(6.0));

    let req = test::TestRequest::put()
        .uri("/admin/bill_settings")
        .insert_header(admin_header())
        .set_json(json!({"tax_rate_cgst": -1}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::put()
        .uri("/admin/bill_settings")
        .insert_header(admin_header())
        .set_json(json!({"tax_rate_cgst": 9, "tax_rate_sgst": 101}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_site_content_editing() {
    let app = test_app!(seeded_state());

    let req = test::TestRequest::put()
        .uri("/admin/site_settings")
        .insert_header(admin_header())
        .set_json(json!({"shop_welcome_text": "Hello builders", "global_font": "Georgia"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/admin/site_settings")
        .insert_header(admin_header())
        .to_request();
    let shop: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(shop["global_font"], "Georgia");

    let about = json!({
        "intro_text": "Since 1995",
        "body_text": "Hardware for every job",
        "image_url_1": "a.png",
        "image_url_2": "b.png",
        "image_url_3": "c.png",
        "map_url": "https://maps.example.com/rk",
    });
    let req = test::TestRequest::put()
        .uri("/admin/about_us")
        .insert_header(admin_header())
        .set_json(&about)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/about").to_request();
    let public: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(public, about);
}

#[actix_web::test]
async fn test_custom_bills() {
    let app = test_app!(seeded_state());

    let req = test::TestRequest::post()
        .uri("/admin/custom-bills")
        .insert_header(admin_header())
        .set_json(json!({"person_name": "Ravi", "phone_number": "98400 00000", "amount_pending": 1500}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let bill: Value = test::read_body_json(resp).await;
    let id = bill["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::put()
        .uri(&format!("/admin/custom-bills/{}", id))
        .insert_header(admin_header())
        .set_json(json!({"person_name": "Ravi", "amount_pending": 500, "short_note": "part paid"}))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["amount_pending"], json!(500.0));
    assert_eq!(updated["short_note"], "part paid");

    let req = test::TestRequest::get()
        .uri("/admin/custom-bills")
        .insert_header(admin_header())
        .to_request();
    let bills: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(bills.as_array().unwrap().len(), 1);

    let req = test::TestRequest::put()
        .uri("/admin/custom-bills/not-a-uuid")
        .insert_header(admin_header())
        .set_json(json!({"person_name": "Ravi"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_dashboard_counts() {
    let app = test_app!(seeded_state());

    let req = test::TestRequest::get()
        .uri("/admin/dashboard")
        .insert_header(admin_header())
        .to_request();
    let stats: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(stats["total_orders"], 3);
    assert_eq!(stats["pending_orders"], 2);
    assert_eq!(stats["total_customers"], 1);
    assert_eq!(stats["recent_orders"].as_array().unwrap().len(), 3);
}

#[actix_web::test]
async fn test_user_profiles_list_edit_delete() {
    let app = test_app!(seeded_state());

    let req = test::TestRequest::get()
        .uri("/admin/users")
        .insert_header(admin_header())
        .to_request();
    let users: Value = test::call_and_read_body_json(&app, req).await;
    let users = users.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["id"], "user-1");
    assert_eq!(users[1]["name"], "Store Owner");
    assert_eq!(users[1]["role"], "admin");

    let req = test::TestRequest::put()
        .uri("/admin/users/user-1")
        .insert_header(admin_header())
        .set_json(json!({"name": "Meera Devi", "address": "Madurai", "role": "admin"}))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["name"], "Meera Devi");
    assert_eq!(updated["role"], "admin");
    assert_eq!(updated["created_at"], "2025-01-10T08:00:00Z");

    let req = test::TestRequest::put()
        .uri("/admin/users/user-1")
        .insert_header(admin_header())
        .set_json(json!({"name": "Meera", "role": "owner"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::delete()
        .uri("/admin/users/user-admin")
        .insert_header(admin_header())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get()
        .uri("/admin/users/user-admin")
        .insert_header(admin_header())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::delete()
        .uri("/admin/users/user-admin")
        .insert_header(admin_header())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_user_routes_require_admin_key() {
    let app = test_app!(seeded_state());

    let req = test::TestRequest::get().uri("/admin/users").to_request();
    let err = test::try_call_service(&app, req).await.err().unwrap();
    assert_eq!(err.as_response_error().status_code(), StatusCode::UNAUTHORIZED);
}
