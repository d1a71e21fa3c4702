//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! A snapshot of the identity-provider session, taken once `init` settles.
//! Pages render nothing catalog-related and issue no requests until
//! `is_authenticated` holds. The bearer token is not part of the snapshot:
//! every request reads it from the live adapter through [`current_backend`].

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use catalog::auth::AuthGateway;
use leptos::prelude::*;

use crate::net::api::HttpProductBackend;
use crate::net::keycloak::{KeycloakSession, TOKEN_MIN_VALIDITY_SECS};

/// Handle to the live adapter, for tokens and logout. Lives only in the browser.
pub type SessionHandle = StoredValue<Option<KeycloakSession>, LocalStorage>;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub loading: bool,
    pub authenticated: bool,
    pub user: Option<String>,
    /// Why sign-in could not complete.
    pub error: Option<String>,
}

impl AuthState {
    /// Initial state while the identity provider handshake runs.
    pub fn pending() -> Self {
        Self { loading: true, ..Self::default() }
    }

    pub fn from_gateway(gateway: &dyn AuthGateway) -> Self {
        let authenticated = gateway.is_authenticated();
        Self {
            loading: false,
            authenticated,
            user: authenticated.then(|| gateway.display_name()).flatten(),
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self { error: Some(message.into()), ..Self::default() }
    }

    pub fn is_authenticated(&self) -> bool {
        !self.loading && self.authenticated
    }

    /// Label for the sidebar footer.
    pub fn user_label(&self) -> String {
        self.user.clone().unwrap_or_else(|| "signed in".to_owned())
    }
}

/// API client carrying the token `gateway` holds right now.
pub fn backend_for(gateway: &dyn AuthGateway) -> HttpProductBackend {
    HttpProductBackend::new(gateway.is_authenticated().then(|| gateway.token()).flatten())
}

/// API client for the next request, after the adapter has had a chance to
/// renew a token that is about to expire.
pub async fn current_backend(session: SessionHandle) -> HttpProductBackend {
    let Some(adapter) = session.with_value(Clone::clone) else {
        return HttpProductBackend::default();
    };
    adapter.refresh_token(TOKEN_MIN_VALIDITY_SECS).await;
    backend_for(&adapter)
}
