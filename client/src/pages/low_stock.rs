//! Products below the restock threshold.

use catalog::{CatalogState, LOW_STOCK_THRESHOLD, ViewMode};
use leptos::prelude::*;

use crate::components::auth_gate::AuthGate;
use crate::components::product_table::{ProductTable, delete_action, edit_action};

#[component]
pub fn LowStockPage() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    catalog.update(|s| s.set_view(ViewMode::LowStockOnly));

    let visible = Signal::derive(move || catalog.with(|s| s.filtered().into_iter().cloned().collect::<Vec<_>>()));

    view! {
        <AuthGate>
            <div class="low-stock-page">
                <h2 class="page__title">"Low stock"</h2>
                <p class="page__subtitle">
                    {format!("Products with fewer than {LOW_STOCK_THRESHOLD} units on hand.")}
                </p>
                <ProductTable
                    products=visible
                    on_edit=edit_action(catalog)
                    on_delete=delete_action(catalog)
                    empty_text="No products are running low."
                />
            </div>
        </AuthGate>
    }
}
