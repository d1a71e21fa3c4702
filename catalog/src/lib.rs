//! Product catalog model and session controller for the HypeStore admin.
//!
//! This crate owns everything the dashboard knows about products: the wire
//! model, form validation, the list view mode, derived statistics, and the
//! controller that serializes user intents into request/reload cycles. It does
//! no I/O itself; the browser client, the CLI, and tests plug in a
//! [`backend::ProductBackend`] implementation.
//!
//! LAYERING
//! ========
//! [`state::CatalogState`] is plain data with synchronous transitions, so the
//! Leptos UI can keep it in a signal and apply transitions around its own
//! async calls. [`controller::CatalogController`] wraps the same state with a
//! backend for callers that can hold `&mut` across an await (CLI, tests).

pub mod auth;
pub mod backend;
pub mod controller;
pub mod format;
pub mod product;
pub mod state;
pub mod stats;
pub mod validation;
pub mod view;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use backend::{BackendError, ProductBackend};
pub use controller::{CatalogController, RemoveOutcome};
pub use product::{LOW_STOCK_THRESHOLD, Product, ProductDraft, ProductInput};
pub use state::{CatalogState, EditSession, ListStatus, Notice, SaveRequest};
pub use stats::{CatalogStats, CategoryCount};
pub use validation::{Field, FieldError, ValidationErrors};
pub use view::ViewMode;

/// Errors surfaced by catalog operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    /// The form failed validation; nothing was sent to the backend.
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),
    /// The backend could not be reached or rejected the request.
    #[error(transparent)]
    Backend(#[from] BackendError),
    /// The referenced product is not in the local list.
    #[error("unknown product: {0}")]
    UnknownProduct(String),
    /// A save was attempted without an open create/edit session.
    #[error("no product form is open")]
    SessionClosed,
}

impl CatalogError {
    /// Text suitable for showing to the user in a notice or CLI output.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Backend(err) => err.user_message(),
            other => other.to_string(),
        }
    }
}
