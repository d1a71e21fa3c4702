//! List view mode and filtering.
//!
//! The list shows either everything, a text search, or only low-stock
//! products. These are distinct variants so no search text can ever switch
//! the list into low-stock mode.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::product::Product;

/// Which subset of the catalog the product list shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    All,
    /// Case-insensitive substring match on name or category.
    Search(String),
    /// Products below [`crate::LOW_STOCK_THRESHOLD`].
    LowStockOnly,
}

impl ViewMode {
    /// View for a raw search box value. Blank text shows everything.
    #[must_use]
    pub fn search(term: impl Into<String>) -> Self {
        let term = term.into();
        if term.trim().is_empty() {
            Self::All
        } else {
            Self::Search(term)
        }
    }

    /// Text to show in the search box for this view.
    #[must_use]
    pub fn search_text(&self) -> &str {
        match self {
            Self::Search(term) => term,
            Self::All | Self::LowStockOnly => "",
        }
    }

    #[must_use]
    pub fn is_low_stock_only(&self) -> bool {
        matches!(self, Self::LowStockOnly)
    }

    /// Whether `product` belongs in this view.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::LowStockOnly => product.is_low_stock(),
            Self::Search(term) => {
                let needle = term.trim().to_lowercase();
                product.name.to_lowercase().contains(&needle)
                    || product.category_id.to_lowercase().contains(&needle)
            }
        }
    }
}

/// Products visible under `view`, in list order.
#[must_use]
pub fn filter<'a>(products: &'a [Product], view: &ViewMode) -> Vec<&'a Product> {
    products.iter().filter(|p| view.matches(p)).collect()
}
