// Line item normalization across the schemas orders have been stored in

use proptest::prelude::*;
use rk_storefront::core::traits::Record;
use rk_storefront::orders::OrderLineItem;
use serde_json::{json, Value};

fn raw(value: Value) -> Record {
    value.as_object().cloned().unwrap()
}

#[test]
fn test_legacy_embedded_shape() {
    let item = OrderLineItem::from_raw(&raw(json!({
        "name": "Floor Tiles",
        "price": "50",
        "quantity": "3",
        "discount": "10.5",
    })));

    assert_eq!(item.product_name, "Floor Tiles");
    assert_eq!(item.price_at_purchase, 50.0);
    assert_eq!(item.quantity, 3.0);
    assert_eq!(item.discount_amount, 10.5);
    assert_eq!(item.line_total, 139.5);
}

#[test]
fn test_stored_line_total_wins_when_numeric() {
    let item = OrderLineItem::from_raw(&raw(json!({
        "product_name": "Sand",
        "price_at_purchase": 10,
        "quantity": 2,
        "line_total": "18.00",
    })));
    assert_eq!(item.line_total, 18.0);

    let item = OrderLineItem::from_raw(&raw(json!({
        "product_name": "Sand",
        "price_at_purchase": 10,
        "quantity": 2,
        "line_total": "n/a",
    })));
    assert_eq!(item.line_total, 20.0);
}

#[test]
fn test_name_fallback_chain() {
    let named = |value: Value| OrderLineItem::from_raw(&raw(value)).product_name;

    assert_eq!(named(json!({"product_name": "A", "name": "B"})), "A");
    assert_eq!(named(json!({"product_name": "", "name": "B"})), "B");
    assert_eq!(named(json!({"product": "C"})), "C");
    assert_eq!(named(json!({"price": 1})), "Item");
}

#[test]
fn test_garbage_fields_degrade_to_zero() {
    let item = OrderLineItem::from_raw(&raw(json!({
        "price_at_purchase": {"amount": 5},
        "quantity": null,
        "discount_amount": [],
    })));

    assert_eq!(item.price_at_purchase, 0.0);
    assert_eq!(item.quantity, 0.0);
    assert_eq!(item.discount_amount, 0.0);
    assert_eq!(item.line_total, 0.0);
}

#[test]
fn test_normalize_all_skips_non_objects() {
    let values = vec![json!({"name": "Brick", "price": 8, "quantity": 100}), json!("bad"), json!(null)];
    let items = OrderLineItem::normalize_all(&values);

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].line_total, 800.0);
}

#[test]
fn test_whole_quantity_truncates() {
    let item = OrderLineItem::from_raw(&raw(json!({"price": 1, "quantity": "2.9"})));
    assert_eq!(item.whole_quantity(), 2);
}

proptest! {
    #[test]
    fn canonical_record_normalizes_to_itself(
        price_cents in 0i64..10_000_000,
        quantity in 0u32..500,
        discount_cents in 0i64..100_000,
        name in "[A-Za-z][A-Za-z ]{0,20}",
    ) {
        let price = price_cents as f64 / 100.0;
        let discount = discount_cents as f64 / 100.0;
        let item = OrderLineItem {
            id: Some("item-1".to_string()),
            product_id: Some("prod_1".to_string()),
            product_name: name,
            price_at_purchase: price,
            quantity: quantity as f64,
            discount_amount: discount,
            line_total: OrderLineItem::compute_total(price, quantity as f64, discount),
        };

        prop_assert_eq!(OrderLineItem::from_raw(&item.to_record()), item);
    }

    #[test]
    fn string_and_number_fields_normalize_alike(price_cents in 0i64..1_000_000, quantity in 0u32..100) {
        let price = price_cents as f64 / 100.0;
        let as_numbers = OrderLineItem::from_raw(&raw(json!({"price": price, "quantity": quantity})));
        let as_strings = OrderLineItem::from_raw(&raw(json!({
            "price": price.to_string(),
            "quantity": quantity.to_string(),
        })));

        prop_assert_eq!(as_numbers, as_strings);
    }

    #[test]
    fn normalization_never_produces_non_finite(value in "\\PC{0,12}") {
        let item = OrderLineItem::from_raw(&raw(json!({
            "price": value.clone(),
            "quantity": value.clone(),
            "discount": value,
        })));

        prop_assert!(item.price_at_purchase.is_finite());
        prop_assert!(item.quantity.is_finite());
        prop_assert!(item.discount_amount.is_finite());
    }
}
