//! Product form validation.
//!
//! Runs before any network call. Every violated rule produces one
//! [`FieldError`]; any error blocks submission.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::fmt;

use crate::product::{ProductDraft, ProductInput};

pub const MIN_NAME_LEN: usize = 3;
pub const MIN_DESCRIPTION_LEN: usize = 5;

/// A product form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Description,
    Price,
    Category,
    StockQuantity,
}

impl Field {
    /// Wire/form key for the field.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Description => "description",
            Self::Price => "price",
            Self::Category => "categoryId",
            Self::StockQuantity => "stockQuantity",
        }
    }
}

/// A single rule violation on one field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

/// All violations found on a draft, in field order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// First message recorded for `field`, if any.
    #[must_use]
    pub fn message_for(&self, field: Field) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Record a violation. Form layers use this for input that cannot even
    /// be parsed into a draft.
    pub fn push(&mut self, field: Field, message: impl Into<String>) {
        self.0.push(FieldError { field, message: message.into() });
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for err in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", err.field.as_str(), err.message)?;
            first = false;
        }
        Ok(())
    }
}

/// Check a draft against the product schema.
///
/// Text fields are trimmed before length checks and in the returned input.
///
/// # Errors
///
/// Returns every violated rule when the draft is not acceptable.
pub fn validate(draft: &ProductDraft) -> Result<ProductInput, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let name = draft.name.trim();
    if name.chars().count() < MIN_NAME_LEN {
        errors.push(Field::Name, format!("name must be at least {MIN_NAME_LEN} characters"));
    }

    let description = draft.description.trim();
    if description.chars().count() < MIN_DESCRIPTION_LEN {
        errors.push(
            Field::Description,
            format!("description must be at least {MIN_DESCRIPTION_LEN} characters"),
        );
    }

    if !draft.price.is_finite() || draft.price <= 0.0 {
        errors.push(Field::Price, "price must be greater than zero");
    }

    let category_id = draft.category_id.trim();
    if category_id.is_empty() {
        errors.push(Field::Category, "category is required");
    }

    let stock_quantity = match u32::try_from(draft.stock_quantity) {
        Ok(stock) => stock,
        Err(_) if draft.stock_quantity < 0 => {
            errors.push(Field::StockQuantity, "stock cannot be negative");
            0
        }
        Err(_) => {
            errors.push(Field::StockQuantity, "stock is too large");
            0
        }
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ProductInput {
        name: name.to_owned(),
        description: description.to_owned(),
        price: draft.price,
        category_id: category_id.to_owned(),
        stock_quantity,
    })
}
