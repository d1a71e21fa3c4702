//! Renders its children only for an authenticated session.
//!
//! Pages wrap their content in this so nothing catalog-related renders
//! before the identity provider reports a signed-in user.

#[cfg(test)]
#[path = "auth_gate_test.rs"]
mod auth_gate_test;

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn AuthGate(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <Show
            when=move || auth.get().is_authenticated()
            fallback=move || view! { <p class="auth-gate">{move || gate_message(&auth.get())}</p> }
        >
            {children()}
        </Show>
    }
}

/// What to show instead of page content.
pub fn gate_message(state: &AuthState) -> String {
    if state.loading {
        return "Signing in...".to_owned();
    }
    match &state.error {
        Some(error) => format!("Sign-in failed: {error}"),
        None => "Sign-in required.".to_owned(),
    }
}
