//! Headline figure card for the dashboard.

use leptos::prelude::*;

#[component]
pub fn SummaryCard(
    title: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(default = "neutral")] tone: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("summary-card summary-card--{tone}")>
            <p class="summary-card__title">{title}</p>
            <h3 class="summary-card__value">{move || value.get()}</h3>
        </div>
    }
}
