//! Dashboard home: headline figures and the category distribution.

use catalog::format::format_price;
use catalog::{CatalogState, CatalogStats};
use leptos::prelude::*;

use crate::components::auth_gate::AuthGate;
use crate::components::category_chart::CategoryChart;
use crate::components::summary_card::SummaryCard;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let stats = Memo::new(move |_| catalog.with(CatalogState::stats));
    let figure = move |f: fn(&CatalogStats) -> String| Signal::derive(move || stats.with(f));

    view! {
        <AuthGate>
            <div class="dashboard-page">
                <h2 class="page__title">"Dashboard"</h2>
                <div class="dashboard-page__cards">
                    <SummaryCard title="Total products" value=figure(|s| s.total.to_string()) tone="blue"/>
                    <SummaryCard
                        title="Inventory value"
                        value=figure(|s| format_price(s.total_value))
                        tone="green"
                    />
                    <SummaryCard
                        title="Low stock"
                        value=figure(|s| s.low_stock_count.to_string())
                        tone="red"
                    />
                    <SummaryCard
                        title="Categories"
                        value=figure(|s| s.category_histogram.len().to_string())
                        tone="purple"
                    />
                </div>
                <section class="dashboard-page__chart">
                    <h3>"Products by category"</h3>
                    <CategoryChart histogram=Signal::derive(move || stats.with(|s| s.category_histogram.clone()))/>
                </section>
            </div>
        </AuthGate>
    }
}
