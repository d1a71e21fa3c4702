//! Navigation sidebar with the signed-in user and logout.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::{AuthState, SessionHandle};

/// Label and route for each navigation entry.
pub const NAV_ITEMS: [(&str, &str); 4] = [
    ("Dashboard", "/"),
    ("Products", "/produtos"),
    ("Categories", "/categorias"),
    ("Low stock", "/estoque-baixo"),
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<SessionHandle>();

    let on_logout = move |_| {
        session.with_value(|s| {
            if let Some(s) = s {
                catalog::auth::AuthGateway::logout(s);
            }
        });
        auth.set(AuthState::default());
    };

    view! {
        <aside class="sidebar">
            <h1 class="sidebar__brand">"HypeStore"</h1>
            <nav class="sidebar__nav">
                {NAV_ITEMS
                    .iter()
                    .map(|(label, path)| {
                        view! {
                            <A href=*path attr:class="sidebar__link">
                                {*label}
                            </A>
                        }
                    })
                    .collect_view()}
            </nav>
            <div class="sidebar__footer">
                <Show when=move || auth.get().is_authenticated()>
                    <span class="sidebar__user">{move || auth.get().user_label()}</span>
                </Show>
                <button class="btn sidebar__logout" on:click=on_logout title="Sign out">
                    "Sign out"
                </button>
            </div>
        </aside>
    }
}
