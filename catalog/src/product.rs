//! Product wire model and form data.

#[cfg(test)]
#[path = "product_test.rs"]
mod product_test;

use serde::{Deserialize, Serialize};

/// Products with fewer units than this are flagged as low stock.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// A catalog product as returned by `GET /api/Products`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Backend-assigned identifier.
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    /// Category label. Categories are plain strings, not a separate entity.
    pub category_id: String,
    pub stock_quantity: u32,
    /// Creation timestamp, when the backend provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Product {
    #[must_use]
    pub fn is_low_stock(&self) -> bool {
        self.stock_quantity < LOW_STOCK_THRESHOLD
    }

    /// Value of the units on hand (`price * stock_quantity`).
    #[must_use]
    pub fn inventory_value(&self) -> f64 {
        self.price * f64::from(self.stock_quantity)
    }
}

/// Raw create/edit form contents, before validation.
///
/// `stock_quantity` is signed so out-of-range input survives until
/// validation can reject it with a field message.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category_id: String,
    pub stock_quantity: i64,
}

impl ProductDraft {
    /// Prefill a form from an existing product.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            category_id: product.category_id.clone(),
            stock_quantity: i64::from(product.stock_quantity),
        }
    }
}

/// Validated product fields, ready to be sent to the backend.
///
/// Only [`crate::validation::validate`] constructs this type.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) price: f64,
    pub(crate) category_id: String,
    pub(crate) stock_quantity: u32,
}

impl ProductInput {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn price(&self) -> f64 {
        self.price
    }

    #[must_use]
    pub fn category_id(&self) -> &str {
        &self.category_id
    }

    #[must_use]
    pub fn stock_quantity(&self) -> u32 {
        self.stock_quantity
    }

    /// `PUT` body: the input fields plus the target identifier.
    #[must_use]
    pub fn update_body<'a>(&'a self, id: &'a str) -> UpdateBody<'a> {
        UpdateBody { id, input: self }
    }
}

/// Serialized body for `PUT /api/Products/{id}`.
#[derive(Debug, Serialize)]
pub struct UpdateBody<'a> {
    pub id: &'a str,
    #[serde(flatten)]
    pub input: &'a ProductInput,
}
