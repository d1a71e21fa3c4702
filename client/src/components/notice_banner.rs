//! Dismissable banner for the last catalog error or success message.

#[cfg(test)]
#[path = "notice_banner_test.rs"]
mod notice_banner_test;

use catalog::{CatalogState, Notice};
use leptos::prelude::*;

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let notice = Memo::new(move |_| catalog.with(|s| s.notice.clone()));

    move || {
        notice.get().map(|notice| {
            let (class, text) = notice_parts(&notice);
            view! {
                <div class=class role="status">
                    <span>{text}</span>
                    <button
                        class="notice__dismiss"
                        title="Dismiss"
                        on:click=move |_| catalog.update(CatalogState::dismiss_notice)
                    >
                        "✕"
                    </button>
                </div>
            }
        })
    }
}

/// CSS class and text for a notice.
pub fn notice_parts(notice: &Notice) -> (&'static str, String) {
    match notice {
        Notice::Error(message) => ("notice notice--error", message.clone()),
        Notice::Success(message) => ("notice notice--success", message.clone()),
    }
}
