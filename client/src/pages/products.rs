//! Product management: search, table, and create/edit/delete entry points.

use catalog::{CatalogState, ViewMode};
use leptos::prelude::*;

use crate::components::auth_gate::AuthGate;
use crate::components::product_table::{ProductTable, delete_action, edit_action};
use crate::state::auth::{SessionHandle, current_backend};
use crate::state::products;

#[component]
pub fn ProductsPage() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let session = expect_context::<SessionHandle>();

    // Coming back from the low-stock page shows the full list again; a
    // search typed earlier is kept.
    catalog.update(|s| {
        if s.view.is_low_stock_only() {
            s.set_view(ViewMode::All);
        }
    });

    let visible = Signal::derive(move || catalog.with(|s| s.filtered().into_iter().cloned().collect::<Vec<_>>()));
    let on_new = move |_| {
        catalog.update(|s| {
            s.open_create();
        });
    };
    let on_reload = move |_| {
        leptos::task::spawn_local(async move {
            let backend = current_backend(session).await;
            products::reload(catalog, &backend).await;
        });
    };

    view! {
        <AuthGate>
            <div class="products-page">
                <header class="page__header">
                    <h2 class="page__title">"Products"</h2>
                    <span class="page__spacer"></span>
                    <button class="btn" on:click=on_reload disabled=move || catalog.with(CatalogState::is_loading)>
                        "Reload"
                    </button>
                    <button class="btn btn--primary" on:click=on_new>
                        "+ New product"
                    </button>
                </header>
                <input
                    class="products-page__search"
                    type="search"
                    placeholder="Search by name or category"
                    prop:value=move || catalog.with(|s| s.view.search_text().to_owned())
                    on:input=move |ev| {
                        let term = event_target_value(&ev);
                        catalog.update(|s| s.set_search_term(&term));
                    }
                />
                <Show when=move || catalog.with(CatalogState::is_loading)>
                    <p class="page__loading">"Loading products..."</p>
                </Show>
                <ProductTable
                    products=visible
                    on_edit=edit_action(catalog)
                    on_delete=delete_action(catalog)
                />
            </div>
        </AuthGate>
    }
}
