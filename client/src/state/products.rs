//! Async catalog operations over the shared `RwSignal<CatalogState>`.
//!
//! Each function applies a `begin_*` transition, awaits the backend without
//! holding the signal, then applies the matching `finish_*`. Reloads are not
//! sequenced: the last response to arrive wins.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use catalog::backend::ProductBackend;
use catalog::{CatalogError, CatalogState, ProductDraft, SaveRequest};
use leptos::logging::{log, warn};
use leptos::prelude::*;

/// Replace the product list with a fresh fetch.
pub async fn reload<B: ProductBackend + ?Sized>(catalog: RwSignal<CatalogState>, backend: &B) {
    catalog.update(CatalogState::begin_reload);
    let result = backend.list().await;
    catalog.update(move |state| match state.finish_reload(result) {
        Ok(count) => log!("catalog reloaded: {count} products"),
        Err(err) => warn!("catalog reload failed: {err}"),
    });
}

/// Validate and submit the open form; reload after the backend accepts it.
///
/// # Errors
///
/// Validation errors (nothing sent), a closed form, or the backend rejection.
/// The form stays open on any error.
pub async fn save<B: ProductBackend + ?Sized>(
    catalog: RwSignal<CatalogState>,
    backend: &B,
    draft: ProductDraft,
) -> Result<(), CatalogError> {
    let request = catalog
        .try_update(|state| state.begin_save(&draft))
        .unwrap_or(Err(CatalogError::SessionClosed))?;

    let result = match &request {
        SaveRequest::Create(input) => backend.create(input).await.map(|_| ()),
        SaveRequest::Update { id, input } => backend.update(id, input).await,
    };
    catalog
        .try_update(move |state| state.finish_save(&request, result))
        .unwrap_or(Err(CatalogError::SessionClosed))
        .inspect_err(|err| warn!("product save failed: {err}"))?;

    reload(catalog, backend).await;
    Ok(())
}

/// Delete the product awaiting confirmation, then reload.
///
/// Returns `Ok(false)` when nothing was pending.
///
/// # Errors
///
/// The backend rejection. The list is left as it was.
pub async fn delete_confirmed<B: ProductBackend + ?Sized>(
    catalog: RwSignal<CatalogState>,
    backend: &B,
) -> Result<bool, CatalogError> {
    let Some(id) = catalog.try_update(CatalogState::confirm_delete).flatten() else {
        return Ok(false);
    };

    let result = backend.delete(&id).await;
    catalog
        .try_update(move |state| state.finish_delete(result))
        .unwrap_or(Ok(()))
        .inspect_err(|err| warn!("product delete failed: {err}"))?;

    reload(catalog, backend).await;
    Ok(true)
}
