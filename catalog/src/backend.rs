//! Backend seam for the products REST resource.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard talks to `/api/Products` through [`ProductBackend`]. The
//! browser client implements it with `gloo-net`, the CLI with `reqwest`, and
//! tests with an in-memory store. The response helpers here keep status and
//! body interpretation identical across transports.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures map to [`BackendError::Network`] and are shown as a
//! generic notice. Non-2xx bodies are kept verbatim in
//! [`BackendError::Rejected`] and shown to the user as-is.

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

use crate::product::{Product, ProductInput};

/// Collection path of the products resource.
pub const PRODUCTS_PATH: &str = "/api/Products";

/// Generic text shown for connectivity failures.
pub const UNREACHABLE_MESSAGE: &str = "could not reach server";

/// Errors produced by a [`ProductBackend`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    /// The request never produced an HTTP response.
    #[error("could not reach server: {0}")]
    Network(String),
    /// The backend answered with a non-success status.
    #[error("{body}")]
    Rejected { status: u16, body: String },
    /// A success response carried a body that is not the expected JSON.
    #[error("unexpected response from server: {0}")]
    Decode(String),
    /// The id cannot be addressed as a single path segment; nothing was sent.
    #[error("invalid product id: {0:?}")]
    InvalidId(String),
}

impl BackendError {
    /// Text suitable for showing to the user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => UNREACHABLE_MESSAGE.to_owned(),
            Self::Rejected { body, .. } => body.clone(),
            Self::Decode(_) => "unexpected response from server".to_owned(),
            Self::InvalidId(_) => "invalid product id".to_owned(),
        }
    }
}

/// Remote products store.
#[async_trait::async_trait(?Send)]
pub trait ProductBackend {
    /// `GET /api/Products`.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] on transport failure, a non-2xx status, or
    /// an undecodable body.
    async fn list(&self) -> Result<Vec<Product>, BackendError>;

    /// `POST /api/Products`. Returns the created product when the backend
    /// echoes it.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] on transport failure or a non-2xx status.
    async fn create(&self, input: &ProductInput) -> Result<Option<Product>, BackendError>;

    /// `PUT /api/Products/{id}` with the identifier in the body.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] on transport failure or a non-2xx status.
    async fn update(&self, id: &str, input: &ProductInput) -> Result<(), BackendError>;

    /// `DELETE /api/Products/{id}`.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] on transport failure or a non-2xx status.
    async fn delete(&self, id: &str) -> Result<(), BackendError>;
}

/// Path of a single product. The id is percent-encoded as one segment.
#[must_use]
pub fn product_path(id: &str) -> String {
    format!("{PRODUCTS_PATH}/{}", urlencoding::encode(id))
}

/// Whether `id` can address a product as a single path segment.
///
/// Dot segments are rejected since URL normalization would resolve them
/// even when percent-encoded.
#[must_use]
pub fn is_addressable_id(id: &str) -> bool {
    !id.is_empty() && !id.contains('/') && id != "." && id != ".."
}

/// [`product_path`] for ids that pass [`is_addressable_id`].
///
/// # Errors
///
/// Returns [`BackendError::InvalidId`] for any other id.
pub fn checked_product_path(id: &str) -> Result<String, BackendError> {
    if is_addressable_id(id) {
        Ok(product_path(id))
    } else {
        Err(BackendError::InvalidId(id.to_owned()))
    }
}

/// Join a base URL (may be empty for same-origin) with an API path.
#[must_use]
pub fn join_url(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

/// Error for a non-2xx response. Blank bodies get a status fallback.
#[must_use]
pub fn rejected(status: u16, body: String) -> BackendError {
    let body = if body.trim().is_empty() {
        format!("request failed with status {status}")
    } else {
        body
    };
    BackendError::Rejected { status, body }
}

/// Decode a `GET /api/Products` success body.
///
/// # Errors
///
/// Returns [`BackendError::Decode`] when the body is not a product array.
pub fn decode_list(body: &str) -> Result<Vec<Product>, BackendError> {
    serde_json::from_str(body).map_err(|e| BackendError::Decode(e.to_string()))
}

/// Decode a `POST /api/Products` success body, which may be empty.
#[must_use]
pub fn decode_created(body: &str) -> Option<Product> {
    if body.trim().is_empty() {
        return None;
    }
    match serde_json::from_str(body) {
        Ok(product) => Some(product),
        Err(err) => {
            tracing::debug!(error = %err, "create response is not a product; ignoring body");
            None
        }
    }
}
