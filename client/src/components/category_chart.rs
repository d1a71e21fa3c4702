//! SVG bar chart of products per category.

use catalog::CategoryCount;
use leptos::prelude::*;

use crate::util::chart::bars;

const CHART_WIDTH: f64 = 480.0;
const CHART_HEIGHT: f64 = 200.0;
/// Room below the plot for category labels.
const LABEL_BAND: f64 = 24.0;

#[component]
pub fn CategoryChart(#[prop(into)] histogram: Signal<Vec<CategoryCount>>) -> impl IntoView {
    let view_box = format!("0 0 {CHART_WIDTH} {}", CHART_HEIGHT + LABEL_BAND);

    view! {
        <Show
            when=move || !histogram.with(Vec::is_empty)
            fallback=|| view! { <p class="category-chart__empty">"No categories yet."</p> }
        >
            <svg class="category-chart" viewBox=view_box.clone() role="img" aria-label="Products per category">
                {move || {
                    bars(&histogram.get(), CHART_WIDTH, CHART_HEIGHT)
                        .into_iter()
                        .map(|bar| {
                            let center = format!("{:.1}", bar.center());
                            view! {
                                <g class="category-chart__bar">
                                    <rect
                                        x=format!("{:.1}", bar.x)
                                        y=format!("{:.1}", bar.y)
                                        width=format!("{:.1}", bar.width)
                                        height=format!("{:.1}", bar.height)
                                    ></rect>
                                    <text
                                        class="category-chart__count"
                                        x=center.clone()
                                        y=format!("{:.1}", (bar.y - 4.0).max(12.0))
                                        text-anchor="middle"
                                    >
                                        {bar.count}
                                    </text>
                                    <text
                                        class="category-chart__label"
                                        x=center
                                        y=format!("{:.1}", CHART_HEIGHT + 16.0)
                                        text-anchor="middle"
                                    >
                                        {bar.label}
                                    </text>
                                </g>
                            }
                        })
                        .collect_view()
                }}
            </svg>
        </Show>
    }
}
