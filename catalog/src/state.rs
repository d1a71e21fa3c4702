//! Catalog session state and its synchronous transitions.
//!
//! DESIGN
//! ======
//! Every network-bound operation is split into a `begin_*` step that decides
//! what to send and a `finish_*` step that applies the outcome. Callers own
//! the await in between, which lets the UI keep this struct in a reactive
//! signal while the controller drives the same steps for non-UI callers.
//!
//! The product list is only ever replaced wholesale by [`CatalogState::finish_reload`].
//! Overlapping reloads are not sequenced: whichever finishes last wins.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use crate::CatalogError;
use crate::backend::BackendError;
use crate::product::{Product, ProductDraft, ProductInput};
use crate::stats::{self, CatalogStats};
use crate::validation::{self, ValidationErrors};
use crate::view::{self, ViewMode};

/// Load status of the product list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ListStatus {
    #[default]
    Idle,
    Loading,
    /// Last reload failed; the previous list is still shown.
    Error(String),
}

/// The create/edit modal.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum EditSession {
    #[default]
    Closed,
    Creating,
    Editing(Product),
}

impl EditSession {
    #[must_use]
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }
}

/// Last user-visible message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Error(String),
    Success(String),
}

/// A validated mutation ready to send.
#[derive(Clone, Debug, PartialEq)]
pub enum SaveRequest {
    Create(ProductInput),
    Update { id: String, input: ProductInput },
}

/// Everything the dashboard knows about the catalog for the current session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogState {
    pub products: Vec<Product>,
    pub view: ViewMode,
    pub list: ListStatus,
    pub session: EditSession,
    /// Per-field messages from the last rejected save.
    pub field_errors: ValidationErrors,
    /// Product awaiting delete confirmation.
    pub pending_delete: Option<String>,
    pub notice: Option<Notice>,
}

impl CatalogState {
    /// Products visible under the current view mode.
    #[must_use]
    pub fn filtered(&self) -> Vec<&Product> {
        view::filter(&self.products, &self.view)
    }

    #[must_use]
    pub fn stats(&self) -> CatalogStats {
        stats::compute(&self.products)
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.list, ListStatus::Loading)
    }

    // =========================================================================
    // VIEW
    // =========================================================================

    /// Store raw search box text. Never touches the network.
    pub fn set_search_term(&mut self, term: &str) {
        self.view = ViewMode::search(term);
    }

    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    // =========================================================================
    // RELOAD
    // =========================================================================

    pub fn begin_reload(&mut self) {
        self.list = ListStatus::Loading;
    }

    /// Apply a list response. On failure the previous list is kept.
    ///
    /// # Errors
    ///
    /// Passes the backend error back after recording it as a notice.
    pub fn finish_reload(&mut self, result: Result<Vec<Product>, BackendError>) -> Result<usize, BackendError> {
        match result {
            Ok(products) => {
                self.products = dedupe_by_id(products);
                self.list = ListStatus::Idle;
                if matches!(self.notice, Some(Notice::Error(_))) {
                    self.notice = None;
                }
                if self.pending_delete_product().is_none() {
                    self.pending_delete = None;
                }
                Ok(self.products.len())
            }
            Err(err) => {
                let message = err.user_message();
                self.list = ListStatus::Error(message.clone());
                self.notice = Some(Notice::Error(message));
                Err(err)
            }
        }
    }

    // =========================================================================
    // EDIT SESSION
    // =========================================================================

    /// `Closed -> Creating`. Returns `false` if a form is already open.
    pub fn open_create(&mut self) -> bool {
        if self.session.is_open() {
            return false;
        }
        self.session = EditSession::Creating;
        self.field_errors = ValidationErrors::default();
        true
    }

    /// `Closed -> Editing(product)`. Returns `Ok(false)` if a form is already open.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownProduct`] if `id` is not in the list.
    pub fn open_edit(&mut self, id: &str) -> Result<bool, CatalogError> {
        let product = self
            .find(id)
            .cloned()
            .ok_or_else(|| CatalogError::UnknownProduct(id.to_owned()))?;
        if self.session.is_open() {
            return Ok(false);
        }
        self.session = EditSession::Editing(product);
        self.field_errors = ValidationErrors::default();
        Ok(true)
    }

    /// Cancel or finish the form.
    pub fn close_session(&mut self) {
        self.session = EditSession::Closed;
        self.field_errors = ValidationErrors::default();
    }

    /// Initial form contents for the open session.
    #[must_use]
    pub fn session_draft(&self) -> ProductDraft {
        match &self.session {
            EditSession::Editing(product) => ProductDraft::from_product(product),
            EditSession::Closed | EditSession::Creating => ProductDraft::default(),
        }
    }

    /// Validate `draft` and decide which request the open session needs.
    ///
    /// # Errors
    ///
    /// [`CatalogError::SessionClosed`] without an open form, or
    /// [`CatalogError::Validation`] with per-field messages (also kept in
    /// `field_errors`).
    pub fn begin_save(&mut self, draft: &ProductDraft) -> Result<SaveRequest, CatalogError> {
        let target = match &self.session {
            EditSession::Closed => return Err(CatalogError::SessionClosed),
            EditSession::Creating => None,
            EditSession::Editing(product) => Some(product.id.clone()),
        };

        let input = match validation::validate(draft) {
            Ok(input) => input,
            Err(errors) => {
                self.field_errors = errors.clone();
                return Err(CatalogError::Validation(errors));
            }
        };
        self.field_errors = ValidationErrors::default();

        Ok(match target {
            None => SaveRequest::Create(input),
            Some(id) => SaveRequest::Update { id, input },
        })
    }

    /// Apply the response to `request`. Success closes the form it was sent
    /// from; a form opened since then is left alone. Failure keeps it open.
    ///
    /// # Errors
    ///
    /// Passes the backend error back after recording it as a notice.
    pub fn finish_save(&mut self, request: &SaveRequest, result: Result<(), BackendError>) -> Result<(), CatalogError> {
        match result {
            Ok(()) => {
                let message = match request {
                    SaveRequest::Create(_) => "product created",
                    SaveRequest::Update { .. } => "product updated",
                };
                if self.session_sent(request) {
                    self.close_session();
                }
                self.notice = Some(Notice::Success(message.to_owned()));
                Ok(())
            }
            Err(err) => {
                self.notice = Some(Notice::Error(err.user_message()));
                Err(err.into())
            }
        }
    }

    /// Whether the open form is the one that produced `request`.
    fn session_sent(&self, request: &SaveRequest) -> bool {
        match (&self.session, request) {
            (EditSession::Creating, SaveRequest::Create(_)) => true,
            (EditSession::Editing(product), SaveRequest::Update { id, .. }) => product.id == *id,
            _ => false,
        }
    }

    // =========================================================================
    // DELETE
    // =========================================================================

    /// Ask for confirmation before deleting `id`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownProduct`] if `id` is not in the list.
    pub fn request_delete(&mut self, id: &str) -> Result<&Product, CatalogError> {
        let index = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| CatalogError::UnknownProduct(id.to_owned()))?;
        self.pending_delete = Some(id.to_owned());
        Ok(&self.products[index])
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Product awaiting confirmation, if still in the list.
    #[must_use]
    pub fn pending_delete_product(&self) -> Option<&Product> {
        self.pending_delete.as_deref().and_then(|id| self.find(id))
    }

    /// Consume the confirmation. Returns the id to delete.
    pub fn confirm_delete(&mut self) -> Option<String> {
        self.pending_delete.take()
    }

    /// Apply a delete response. The list itself changes only on reload.
    ///
    /// # Errors
    ///
    /// Passes the backend error back after recording it as a notice.
    pub fn finish_delete(&mut self, result: Result<(), BackendError>) -> Result<(), CatalogError> {
        match result {
            Ok(()) => {
                self.notice = Some(Notice::Success("product deleted".to_owned()));
                Ok(())
            }
            Err(err) => {
                self.notice = Some(Notice::Error(err.user_message()));
                Err(err.into())
            }
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

/// Keep the first occurrence of each id.
fn dedupe_by_id(products: Vec<Product>) -> Vec<Product> {
    let mut out: Vec<Product> = Vec::with_capacity(products.len());
    for product in products {
        if out.iter().any(|p| p.id == product.id) {
            tracing::warn!(id = %product.id, "backend returned duplicate product id; keeping first");
            continue;
        }
        out.push(product);
    }
    out
}
