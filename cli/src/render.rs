//! Plain-text rendering for CLI output.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::fmt::Write as _;

use catalog::format::{format_price, format_stock};
use catalog::{CatalogStats, Product, ValidationErrors};

/// Fixed-width product table. Low-stock rows are marked with `!`.
#[must_use]
pub fn product_table(products: &[&Product]) -> String {
    if products.is_empty() {
        return "no products\n".to_owned();
    }

    let id_width = column_width("ID", products.iter().map(|p| p.id.as_str()));
    let name_width = column_width("NAME", products.iter().map(|p| p.name.as_str()));
    let category_width = column_width("CATEGORY", products.iter().map(|p| p.category_id.as_str()));

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<id_width$}  {:<name_width$}  {:<category_width$}  {:>14}  {:>8}",
        "ID", "NAME", "CATEGORY", "PRICE", "STOCK"
    );
    for product in products {
        let marker = if product.is_low_stock() { " !" } else { "" };
        let _ = writeln!(
            out,
            "{:<id_width$}  {:<name_width$}  {:<category_width$}  {:>14}  {:>8}{marker}",
            product.id,
            product.name,
            product.category_id,
            format_price(product.price),
            format_stock(product.stock_quantity),
        );
    }
    out
}

/// Summary figures, low-stock list, and category histogram.
#[must_use]
pub fn stats_report(stats: &CatalogStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "products:        {}", stats.total);
    let _ = writeln!(out, "inventory value: {}", format_price(stats.total_value));
    let _ = writeln!(out, "low stock:       {}", stats.low_stock_count);
    for product in &stats.low_stock {
        let _ = writeln!(out, "  - {} ({})", product.name, format_stock(product.stock_quantity));
    }
    let _ = writeln!(out, "categories:      {}", stats.category_histogram.len());
    for entry in &stats.category_histogram {
        let _ = writeln!(out, "  {:<20} {}", entry.category_id, entry.count);
    }
    out
}

/// One line per rejected field.
#[must_use]
pub fn field_errors(errors: &ValidationErrors) -> String {
    let mut out = String::new();
    for err in errors.iter() {
        let _ = writeln!(out, "  {}: {}", err.field.as_str(), err.message);
    }
    out
}

/// Stats as a JSON document. The histogram keeps first-seen order.
#[must_use]
pub fn stats_json(stats: &CatalogStats) -> serde_json::Value {
    let histogram: Vec<serde_json::Value> = stats
        .category_histogram
        .iter()
        .map(|c| serde_json::json!({ "categoryId": c.category_id, "count": c.count }))
        .collect();
    serde_json::json!({
        "total": stats.total,
        "totalValue": stats.total_value,
        "lowStockCount": stats.low_stock_count,
        "lowStock": stats.low_stock,
        "categoryHistogram": histogram,
    })
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(|v| v.chars().count())
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(header.len())
}
