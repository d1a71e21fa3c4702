//! Product list table with edit and delete actions.
//!
//! DESIGN
//! ======
//! Rows are rebuilt from the filtered list on every change rather than keyed,
//! so an edited product re-renders even though its id is unchanged.

#[cfg(test)]
#[path = "product_table_test.rs"]
mod product_table_test;

use catalog::format::{format_price, format_stock};
use catalog::{CatalogError, CatalogState, Notice, Product};
use leptos::prelude::*;

#[component]
pub fn ProductTable(
    #[prop(into)] products: Signal<Vec<Product>>,
    on_edit: Callback<String>,
    on_delete: Callback<String>,
    #[prop(default = "No products found.")] empty_text: &'static str,
) -> impl IntoView {
    view! {
        <Show
            when=move || !products.with(Vec::is_empty)
            fallback=move || view! { <p class="product-table__empty">{empty_text}</p> }
        >
            <table class="product-table">
                <thead>
                    <tr>
                        <th>"Product"</th>
                        <th>"Category"</th>
                        <th>"Price"</th>
                        <th>"Stock"</th>
                        <th class="product-table__actions">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        products
                            .get()
                            .into_iter()
                            .map(|product| view! { <ProductRow product on_edit on_delete/> })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </Show>
    }
}

#[component]
fn ProductRow(product: Product, on_edit: Callback<String>, on_delete: Callback<String>) -> impl IntoView {
    let edit_id = product.id.clone();
    let delete_id = product.id.clone();
    let stock_class = stock_class(&product);

    view! {
        <tr class="product-table__row">
            <td>
                <div class="product-table__name">{product.name.clone()}</div>
                <div class="product-table__description">{product.description.clone()}</div>
            </td>
            <td>
                <span class="badge">{product.category_id.clone()}</span>
            </td>
            <td class="product-table__price">{format_price(product.price)}</td>
            <td>
                <span class=stock_class>{format_stock(product.stock_quantity)}</span>
            </td>
            <td class="product-table__actions">
                <button class="btn btn--icon" title="Edit" on:click=move |_| on_edit.run(edit_id.clone())>
                    "Edit"
                </button>
                <button
                    class="btn btn--icon btn--danger"
                    title="Delete"
                    on:click=move |_| on_delete.run(delete_id.clone())
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}

/// Stock cell class; below the threshold the count is marked critical.
pub fn stock_class(product: &Product) -> &'static str {
    if product.is_low_stock() { "stock stock--critical" } else { "stock" }
}

/// Row edit action: open the modal for `id`.
pub fn edit_action(catalog: RwSignal<CatalogState>) -> Callback<String> {
    Callback::new(move |id: String| {
        catalog.update(|s| {
            let result = s.open_edit(&id).map(|_| ());
            report(s, result);
        });
    })
}

/// Row delete action: ask for confirmation of `id`.
pub fn delete_action(catalog: RwSignal<CatalogState>) -> Callback<String> {
    Callback::new(move |id: String| {
        catalog.update(|s| {
            let result = s.request_delete(&id).map(|_| ());
            report(s, result);
        });
    })
}

fn report(state: &mut CatalogState, result: Result<(), CatalogError>) {
    if let Err(err) = result {
        state.notice = Some(Notice::Error(err.user_message()));
    }
}
