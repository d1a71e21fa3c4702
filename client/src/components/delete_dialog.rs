//! Confirmation dialog for deleting the pending product.

#[cfg(test)]
#[path = "delete_dialog_test.rs"]
mod delete_dialog_test;

use catalog::CatalogState;
use leptos::prelude::*;

use crate::state::auth::{SessionHandle, current_backend};
use crate::state::products;

#[component]
pub fn DeleteDialog() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let session = expect_context::<SessionHandle>();
    let deleting = RwSignal::new(false);

    let target = Memo::new(move |_| catalog.with(|s| s.pending_delete_product().map(|p| p.name.clone())));
    let on_cancel = move |_| catalog.update(CatalogState::cancel_delete);
    let on_confirm = move |_| {
        if deleting.get_untracked() {
            return;
        }
        deleting.set(true);
        leptos::task::spawn_local(async move {
            let backend = current_backend(session).await;
            // Failures are already recorded on the catalog state.
            let _ = products::delete_confirmed(catalog, &backend).await;
            deleting.set(false);
        });
    };

    view! {
        <Show when=move || target.with(Option::is_some)>
            <div class="dialog-backdrop" on:click=on_cancel>
                <div class="dialog" role="alertdialog" on:click=move |ev| ev.stop_propagation()>
                    <h2>"Delete product"</h2>
                    <p>{move || confirm_text(&target.get().unwrap_or_default())}</p>
                    <div class="dialog__actions">
                        <button class="btn" on:click=on_cancel>
                            "Cancel"
                        </button>
                        <button class="btn btn--danger" on:click=on_confirm disabled=move || deleting.get()>
                            "Delete"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

pub fn confirm_text(name: &str) -> String {
    format!("Delete \"{name}\"? This cannot be undone.")
}
