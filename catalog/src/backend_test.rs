use super::*;

#[test]
fn product_path_appends_identifier() {
    assert_eq!(product_path("abc"), "/api/Products/abc");
}

#[test]
fn product_path_keeps_id_in_one_segment() {
    assert_eq!(product_path("../../admin/secret"), "/api/Products/..%2F..%2Fadmin%2Fsecret");
    assert_eq!(product_path("a?b#c"), "/api/Products/a%3Fb%23c");
    assert_eq!(product_path("caf\u{e9} 1"), "/api/Products/caf%C3%A9%201");
}

#[test]
fn addressable_ids_exclude_slashes_and_dot_segments() {
    assert!(is_addressable_id("3fa85f64-5717-4562-b3fc-2c963f66afa6"));
    assert!(is_addressable_id("a?b"));
    assert!(!is_addressable_id(""));
    assert!(!is_addressable_id("."));
    assert!(!is_addressable_id(".."));
    assert!(!is_addressable_id("../admin"));
}

#[test]
fn checked_product_path_refuses_unaddressable_ids() {
    assert_eq!(checked_product_path("7").unwrap(), "/api/Products/7");
    let err = checked_product_path("..").unwrap_err();
    assert_eq!(err, BackendError::InvalidId("..".to_owned()));
    assert_eq!(err.user_message(), "invalid product id");
}

#[test]
fn join_url_handles_trailing_slash_and_same_origin() {
    assert_eq!(join_url("http://localhost:5000/", PRODUCTS_PATH), "http://localhost:5000/api/Products");
    assert_eq!(join_url("", PRODUCTS_PATH), "/api/Products");
}

#[test]
fn network_error_shows_generic_notice() {
    let err = BackendError::Network("connection refused".to_owned());
    assert_eq!(err.user_message(), "could not reach server");
}

#[test]
fn rejected_body_is_shown_verbatim() {
    let err = rejected(400, r#"{"errors":{"Name":["too short"]}}"#.to_owned());
    assert_eq!(err.user_message(), r#"{"errors":{"Name":["too short"]}}"#);
    assert_eq!(err.to_string(), r#"{"errors":{"Name":["too short"]}}"#);
}

#[test]
fn rejected_blank_body_falls_back_to_status() {
    let err = rejected(503, "  ".to_owned());
    assert_eq!(err, BackendError::Rejected { status: 503, body: "request failed with status 503".to_owned() });
}

#[test]
fn decode_list_parses_products() {
    let body = r#"[{"id":"1","name":"Mouse","description":"","price":10.0,"categoryId":"c","stockQuantity":3}]"#;
    let products = decode_list(body).unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "Mouse");
}

#[test]
fn decode_list_rejects_non_array() {
    assert!(matches!(decode_list(r#"{"items":[]}"#), Err(BackendError::Decode(_))));
}

#[test]
fn decode_created_accepts_empty_body() {
    assert!(decode_created("").is_none());
    assert!(decode_created("{\"ok\":true}").is_none());
}

#[test]
fn decode_created_parses_product() {
    let body = r#"{"id":"9","name":"Webcam","description":"Full HD","price":199.0,"categoryId":"video","stockQuantity":7}"#;
    assert_eq!(decode_created(body).map(|p| p.id), Some("9".to_owned()));
}
