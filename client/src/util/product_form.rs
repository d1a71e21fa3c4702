//! Text-field model behind the product modal.
//!
//! Inputs arrive as strings. Numbers that do not parse are reported on
//! their field here, together with whatever [`catalog::validation`] finds on
//! the other fields.

#[cfg(test)]
#[path = "product_form_test.rs"]
mod product_form_test;

use catalog::validation;
use catalog::{EditSession, Field, ProductDraft, ValidationErrors};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub category_id: String,
    pub stock_quantity: String,
}

impl ProductForm {
    /// Blank for a new product, prefilled when editing.
    pub fn for_session(session: &EditSession) -> Self {
        match session {
            EditSession::Editing(product) => Self {
                name: product.name.clone(),
                description: product.description.clone(),
                price: product.price.to_string(),
                category_id: product.category_id.clone(),
                stock_quantity: product.stock_quantity.to_string(),
            },
            EditSession::Closed | EditSession::Creating => Self::default(),
        }
    }

    /// Parse the numeric fields and check the whole draft.
    ///
    /// # Errors
    ///
    /// Every field problem at once: parse failures on price and stock plus
    /// catalog validation of the remaining fields.
    pub fn to_draft(&self) -> Result<ProductDraft, ValidationErrors> {
        let price = parse_price(&self.price);
        let stock_quantity = self.stock_quantity.trim().parse::<i64>().ok();
        let draft = ProductDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            price: price.unwrap_or(0.0),
            category_id: self.category_id.clone(),
            stock_quantity: stock_quantity.unwrap_or(0),
        };
        if price.is_some() && stock_quantity.is_some() {
            return Ok(draft);
        }

        let mut errors = ValidationErrors::default();
        if let Err(invalid) = validation::validate(&draft) {
            for err in invalid.iter() {
                let unparsed = match err.field {
                    Field::Price => price.is_none(),
                    Field::StockQuantity => stock_quantity.is_none(),
                    _ => false,
                };
                if !unparsed {
                    errors.push(err.field, err.message.clone());
                }
            }
        }
        if price.is_none() {
            errors.push(Field::Price, "price must be a number");
        }
        if stock_quantity.is_none() {
            errors.push(Field::StockQuantity, "stock must be a whole number");
        }
        Err(errors)
    }
}

/// Accepts `19.9`, `19,90`, `1.234,56` and `1,234.56`.
///
/// With both separators present the last one is the decimal mark. A lone
/// separator is decimal unless it repeats (`1.234.567`). Grouped digits must
/// come in threes.
fn parse_price(text: &str) -> Option<f64> {
    let text = text.trim();
    let normalized = match text.rfind(['.', ',']) {
        None => text.to_owned(),
        Some(at) => {
            let mark = if text[at..].starts_with('.') { '.' } else { ',' };
            let grouping = if mark == '.' { ',' } else { '.' };
            let (whole, fraction) = (&text[..at], &text[at + 1..]);
            if whole.contains(mark) {
                if whole.contains(grouping) {
                    return None;
                }
                strip_grouping(text, mark)?
            } else {
                format!("{}.{fraction}", strip_grouping(whole, grouping)?)
            }
        }
    };
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Drop `separator` from `digits` when every group after the first has three digits.
fn strip_grouping(digits: &str, separator: char) -> Option<String> {
    let mut groups = digits.split(separator);
    let first = groups.next().unwrap_or_default();
    let mut out = first.to_owned();
    for group in groups {
        if group.len() != 3 || first.is_empty() {
            return None;
        }
        out.push_str(group);
    }
    Some(out)
}
