use super::*;

fn product(stock: u32) -> Product {
    Product {
        id: "2".to_owned(),
        name: "Mouse Gamer".to_owned(),
        description: "16000 DPI".to_owned(),
        price: 120.0,
        category_id: "perifericos".to_owned(),
        stock_quantity: stock,
        created_at: None,
    }
}

#[test]
fn stock_below_ten_is_critical() {
    assert_eq!(stock_class(&product(9)), "stock stock--critical");
    assert_eq!(stock_class(&product(0)), "stock stock--critical");
}

#[test]
fn stock_of_ten_or_more_is_plain() {
    assert_eq!(stock_class(&product(10)), "stock");
    assert_eq!(stock_class(&product(150)), "stock");
}

#[test]
fn report_turns_errors_into_notices() {
    let mut state = CatalogState::default();
    report(&mut state, Ok(()));
    assert_eq!(state.notice, None);

    report(&mut state, Err(CatalogError::UnknownProduct("9".to_owned())));
    assert_eq!(state.notice, Some(Notice::Error("unknown product: 9".to_owned())));
}
