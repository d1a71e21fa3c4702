//! Summary figures for the dashboard cards and category chart.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use crate::product::Product;

/// Number of products sharing one category label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryCount {
    pub category_id: String,
    pub count: usize,
}

/// Aggregates over the full product list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogStats {
    pub total: usize,
    /// Sum of `price * stock_quantity` over every product.
    pub total_value: f64,
    pub low_stock: Vec<Product>,
    pub low_stock_count: usize,
    /// Categories in first-seen order.
    pub category_histogram: Vec<CategoryCount>,
}

/// Compute all summary figures in one pass.
#[must_use]
pub fn compute(products: &[Product]) -> CatalogStats {
    let mut stats = CatalogStats { total: products.len(), ..CatalogStats::default() };

    for product in products {
        stats.total_value += product.inventory_value();
        if product.is_low_stock() {
            stats.low_stock.push(product.clone());
        }
        match stats
            .category_histogram
            .iter_mut()
            .find(|c| c.category_id == product.category_id)
        {
            Some(entry) => entry.count += 1,
            None => stats.category_histogram.push(CategoryCount {
                category_id: product.category_id.clone(),
                count: 1,
            }),
        }
    }

    stats.low_stock_count = stats.low_stock.len();
    stats
}
