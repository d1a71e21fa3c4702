use super::*;
use crate::test_helpers::product;
use crate::validation::validate;

#[test]
fn product_deserializes_camel_case_wire_format() {
    let json = serde_json::json!({
        "id": "1",
        "name": "Teclado Mecânico RGB",
        "description": "Switch Blue, padrão ABNT2 com iluminação customizável.",
        "price": 350.0,
        "categoryId": "c1",
        "stockQuantity": 15,
        "createdAt": "2025-01-10T12:00:00Z"
    });
    let p: Product = serde_json::from_value(json).unwrap();
    assert_eq!(p.id, "1");
    assert_eq!(p.category_id, "c1");
    assert_eq!(p.stock_quantity, 15);
    assert_eq!(p.created_at.as_deref(), Some("2025-01-10T12:00:00Z"));
}

#[test]
fn product_tolerates_missing_description_and_timestamp() {
    let json = serde_json::json!({
        "id": "2", "name": "Mouse", "price": 10.5, "categoryId": "c2", "stockQuantity": 0
    });
    let p: Product = serde_json::from_value(json).unwrap();
    assert!(p.description.is_empty());
    assert!(p.created_at.is_none());
}

#[test]
fn product_rejects_negative_stock() {
    let json = serde_json::json!({
        "id": "3", "name": "Cabo", "price": 1.0, "categoryId": "c", "stockQuantity": -1
    });
    assert!(serde_json::from_value::<Product>(json).is_err());
}

#[test]
fn low_stock_is_strictly_below_threshold() {
    assert!(product("a", "Alpha", "c", 1.0, 9).is_low_stock());
    assert!(!product("b", "Beta", "c", 1.0, 10).is_low_stock());
}

#[test]
fn inventory_value_multiplies_price_by_stock() {
    let p = product("a", "Alpha", "c", 12.5, 4);
    assert!((p.inventory_value() - 50.0).abs() < f64::EPSILON);
}

#[test]
fn draft_from_product_copies_editable_fields() {
    let p = product("a", "Alpha", "perifericos", 99.9, 3);
    let draft = ProductDraft::from_product(&p);
    assert_eq!(draft.name, "Alpha");
    assert_eq!(draft.category_id, "perifericos");
    assert_eq!(draft.stock_quantity, 3);
}

#[test]
fn create_body_omits_id() {
    let input = validate(&ProductDraft::from_product(&product("a", "Alpha", "c1", 5.0, 2))).unwrap();
    let value = serde_json::to_value(&input).unwrap();
    assert!(value.get("id").is_none());
    assert_eq!(value["categoryId"], "c1");
    assert_eq!(value["stockQuantity"], 2);
}

#[test]
fn update_body_carries_identifier() {
    let input = validate(&ProductDraft::from_product(&product("a", "Alpha", "c1", 5.0, 2))).unwrap();
    let value = serde_json::to_value(input.update_body("abc-123")).unwrap();
    assert_eq!(value["id"], "abc-123");
    assert_eq!(value["name"], "Alpha");
    assert_eq!(value["price"], 5.0);
}
