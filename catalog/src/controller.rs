//! Catalog controller: a [`CatalogState`] driven against a backend.
//!
//! Every mutation is a request followed by a full reload; the local list is
//! never patched from a mutation response. Errors are recorded on the state
//! and also returned so callers can report them.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::CatalogError;
use crate::auth::AuthGateway;
use crate::backend::ProductBackend;
use crate::product::{Product, ProductDraft};
use crate::state::{CatalogState, SaveRequest};
use crate::stats::CatalogStats;
use crate::view::ViewMode;

/// Result of a delete intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    /// The user declined; nothing was sent.
    Declined,
}

/// Owns the session's product list and serializes intents into
/// request/reload cycles against `B`.
pub struct CatalogController<B> {
    backend: B,
    state: CatalogState,
}

impl<B: ProductBackend> CatalogController<B> {
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self { backend, state: CatalogState::default() }
    }

    #[must_use]
    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Initial load. Does nothing until the session is authenticated.
    ///
    /// Returns whether a reload was issued.
    ///
    /// # Errors
    ///
    /// Returns the reload failure, which is also recorded on the state.
    pub async fn mount(&mut self, auth: &dyn AuthGateway) -> Result<bool, CatalogError> {
        if !auth.is_authenticated() {
            tracing::debug!("not authenticated; skipping catalog load");
            return Ok(false);
        }
        self.reload().await?;
        Ok(true)
    }

    /// Replace the local list with the backend's. On failure the previous
    /// list is kept.
    ///
    /// # Errors
    ///
    /// Returns the backend failure, which is also recorded on the state.
    pub async fn reload(&mut self) -> Result<usize, CatalogError> {
        self.state.begin_reload();
        let result = self.backend.list().await;
        match self.state.finish_reload(result) {
            Ok(count) => {
                tracing::debug!(count, "catalog reloaded");
                Ok(count)
            }
            Err(err) => {
                tracing::warn!(error = %err, "catalog reload failed");
                Err(err.into())
            }
        }
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.state.set_search_term(term);
    }

    pub fn set_view(&mut self, view: ViewMode) {
        self.state.set_view(view);
    }

    #[must_use]
    pub fn filtered_products(&self) -> Vec<&Product> {
        self.state.filtered()
    }

    #[must_use]
    pub fn stats(&self) -> CatalogStats {
        self.state.stats()
    }

    /// Open the form for a new product.
    pub fn open_create(&mut self) -> bool {
        self.state.open_create()
    }

    /// Open the form for an existing product.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownProduct`] if `id` is not loaded.
    pub fn open_edit(&mut self, id: &str) -> Result<bool, CatalogError> {
        self.state.open_edit(id)
    }

    pub fn close_session(&mut self) {
        self.state.close_session();
    }

    /// Validate and submit the open form, then reload.
    ///
    /// Creating sends a `POST`; editing sends a `PUT` addressed by the edited
    /// product's id. On success the form closes. A reload failure after a
    /// successful save is recorded on the state but does not fail the save.
    ///
    /// # Errors
    ///
    /// Validation errors (nothing sent), [`CatalogError::SessionClosed`], or
    /// the backend rejection. The form stays open on any error.
    pub async fn create_or_update(&mut self, draft: &ProductDraft) -> Result<(), CatalogError> {
        let request = self.state.begin_save(draft)?;
        let result = match &request {
            SaveRequest::Create(input) => self.backend.create(input).await.map(|_| ()),
            SaveRequest::Update { id, input } => self.backend.update(id, input).await,
        };

        if let Err(err) = self.state.finish_save(&request, result) {
            tracing::warn!(error = %err, "product save failed");
            return Err(err);
        }
        match &request {
            SaveRequest::Create(input) => tracing::info!(name = input.name(), "product created"),
            SaveRequest::Update { id, .. } => tracing::info!(%id, "product updated"),
        }

        let _ = self.reload().await;
        Ok(())
    }

    /// Delete `id` after `confirm` approves the target product, then reload.
    ///
    /// # Errors
    ///
    /// [`CatalogError::UnknownProduct`] if `id` is not loaded, or the backend
    /// rejection. The list is unchanged on any error.
    pub async fn remove<F>(&mut self, id: &str, confirm: F) -> Result<RemoveOutcome, CatalogError>
    where
        F: FnOnce(&Product) -> bool,
    {
        let approved = confirm(self.state.request_delete(id)?);
        if !approved {
            self.state.cancel_delete();
            return Ok(RemoveOutcome::Declined);
        }
        let Some(id) = self.state.confirm_delete() else {
            return Ok(RemoveOutcome::Declined);
        };

        let result = self.backend.delete(&id).await;
        if let Err(err) = self.state.finish_delete(result) {
            tracing::warn!(%id, error = %err, "product delete failed");
            return Err(err);
        }
        tracing::info!(%id, "product deleted");

        let _ = self.reload().await;
        Ok(RemoveOutcome::Removed)
    }
}
