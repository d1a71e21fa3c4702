//! Category distribution as a table and a bar chart.

#[cfg(test)]
#[path = "categories_test.rs"]
mod categories_test;

use catalog::{CatalogState, CategoryCount};
use leptos::prelude::*;

use crate::components::auth_gate::AuthGate;
use crate::components::category_chart::CategoryChart;

#[component]
pub fn CategoriesPage() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let histogram = Memo::new(move |_| catalog.with(|s| s.stats().category_histogram));
    let total = Memo::new(move |_| catalog.with(|s| s.products.len()));

    view! {
        <AuthGate>
            <div class="categories-page">
                <h2 class="page__title">"Categories"</h2>
                <CategoryChart histogram=histogram/>
                <table class="category-table">
                    <thead>
                        <tr>
                            <th>"Category"</th>
                            <th>"Products"</th>
                            <th>"Share"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let total = total.get();
                            histogram
                                .get()
                                .into_iter()
                                .map(|entry| {
                                    let share = share_label(&entry, total);
                                    view! {
                                        <tr>
                                            <td>
                                                <span class="badge">{entry.category_id}</span>
                                            </td>
                                            <td>{entry.count}</td>
                                            <td>{share}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>
        </AuthGate>
    }
}

/// Percentage of all products in this category, rounded to a whole number.
#[allow(clippy::cast_precision_loss)]
pub fn share_label(entry: &CategoryCount, total: usize) -> String {
    if total == 0 {
        return "0%".to_owned();
    }
    format!("{:.0}%", entry.count as f64 * 100.0 / total as f64)
}
