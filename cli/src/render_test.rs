use super::*;
use catalog::stats;

fn product(id: &str, name: &str, category_id: &str, price: f64, stock: u32) -> Product {
    Product {
        id: id.to_owned(),
        name: name.to_owned(),
        description: String::new(),
        price,
        category_id: category_id.to_owned(),
        stock_quantity: stock,
        created_at: None,
    }
}

#[test]
fn empty_table_says_so() {
    assert_eq!(product_table(&[]), "no products\n");
}

#[test]
fn table_has_header_and_one_row_per_product() {
    let a = product("1", "Teclado Mecânico RGB", "perifericos", 350.0, 15);
    let b = product("2", "Mouse", "perifericos", 120.0, 5);
    let table = product_table(&[&a, &b]);
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("ID"));
    assert!(lines[1].contains("R$ 350,00"));
    assert!(lines[1].contains("15 un"));
    assert!(!lines[1].ends_with('!'));
    assert!(lines[2].ends_with(" !"));
}

#[test]
fn table_columns_align_on_longest_value() {
    let a = product("1", "A", "x", 1.0, 20);
    let b = product("22", "Longer name", "y", 1.0, 20);
    let table = product_table(&[&a, &b]);
    let lines: Vec<&str> = table.lines().collect();
    let category_col = lines[0].find("CATEGORY").unwrap();
    assert_eq!(lines[2].find('y'), Some(category_col));
}

#[test]
fn stats_report_lists_low_stock_and_categories() {
    let products = vec![product("a", "Alpha", "c1", 100.0, 5), product("b", "Beta", "c2", 10.0, 20)];
    let report = stats_report(&stats::compute(&products));
    assert!(report.contains("products:        2"));
    assert!(report.contains("inventory value: R$ 700,00"));
    assert!(report.contains("low stock:       1"));
    assert!(report.contains("  - Alpha (5 un)"));
    assert!(report.contains("categories:      2"));
}

#[test]
fn stats_json_keeps_histogram_order() {
    let products = vec![product("a", "A", "zeta", 1.0, 1), product("b", "B", "alpha", 1.0, 1)];
    let json = stats_json(&stats::compute(&products));
    assert_eq!(json["total"], 2);
    assert_eq!(json["categoryHistogram"][0]["categoryId"], "zeta");
    assert_eq!(json["categoryHistogram"][1]["categoryId"], "alpha");
}
