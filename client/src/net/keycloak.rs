//! Identity-provider session backed by the keycloak-js adapter.
//!
//! SYSTEM CONTEXT
//! ==============
//! The adapter script is loaded by the HTML shell and exposes a global
//! `Keycloak` constructor. This module binds the handful of members the
//! dashboard needs and exposes them through [`catalog::auth::AuthGateway`].
//! Redirects stay inside the adapter; callers ask it to renew the access
//! token with [`KeycloakSession::refresh_token`] before each API call.
//!
//! Settings default to the development realm and can be overridden at build
//! time with `CATALOG_KEYCLOAK_URL`, `CATALOG_KEYCLOAK_REALM`,
//! `CATALOG_KEYCLOAK_CLIENT_ID` and `CATALOG_KEYCLOAK_JS`.

#[cfg(test)]
#[path = "keycloak_test.rs"]
mod keycloak_test;

use catalog::auth::AuthGateway;
use serde::Serialize;

pub const DEFAULT_URL: &str = "http://localhost:8080";
pub const DEFAULT_REALM: &str = "hypesoft-realm";
pub const DEFAULT_CLIENT_ID: &str = "hypesoft-app";
pub const DEFAULT_ADAPTER_SCRIPT: &str = "https://cdn.jsdelivr.net/npm/keycloak-js@24.0.5/dist/keycloak.min.js";

/// Constructor argument for `new Keycloak(...)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeycloakConfig {
    pub url: String,
    pub realm: String,
    pub client_id: String,
}

impl KeycloakConfig {
    pub fn from_build_env() -> Self {
        Self::resolve(
            option_env!("CATALOG_KEYCLOAK_URL"),
            option_env!("CATALOG_KEYCLOAK_REALM"),
            option_env!("CATALOG_KEYCLOAK_CLIENT_ID"),
        )
    }

    /// Blank or missing overrides fall back to the defaults.
    fn resolve(url: Option<&str>, realm: Option<&str>, client_id: Option<&str>) -> Self {
        Self {
            url: or_default(url, DEFAULT_URL).trim_end_matches('/').to_owned(),
            realm: or_default(realm, DEFAULT_REALM).to_owned(),
            client_id: or_default(client_id, DEFAULT_CLIENT_ID).to_owned(),
        }
    }
}

fn or_default<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    value.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(default)
}

/// `<script src>` for the adapter.
pub fn adapter_script_url() -> &'static str {
    option_env!("CATALOG_KEYCLOAK_JS").unwrap_or(DEFAULT_ADAPTER_SCRIPT)
}

/// Argument for `keycloak.init(...)`: force the login redirect up front.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitOptions {
    pub on_load: &'static str,
    pub check_login_iframe: bool,
}

pub const LOGIN_REQUIRED: InitOptions = InitOptions { on_load: "login-required", check_login_iframe: false };

/// Renew the access token when it expires within this many seconds.
pub const TOKEN_MIN_VALIDITY_SECS: i32 = 30;

/// Name to show for the signed-in user, read from the access token claims.
pub fn display_name_from_claims(claims: &serde_json::Value) -> Option<String> {
    ["name", "preferred_username", "email"]
        .iter()
        .filter_map(|key| claims.get(key).and_then(serde_json::Value::as_str))
        .map(str::trim)
        .find(|v| !v.is_empty())
        .map(ToOwned::to_owned)
}

#[cfg(feature = "hydrate")]
mod js {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        pub type Keycloak;

        #[wasm_bindgen(constructor, catch)]
        pub fn new(config: &JsValue) -> Result<Keycloak, JsValue>;

        #[wasm_bindgen(method)]
        pub fn init(this: &Keycloak, options: &JsValue) -> js_sys::Promise;

        #[wasm_bindgen(method)]
        pub fn logout(this: &Keycloak) -> js_sys::Promise;

        #[wasm_bindgen(method, js_name = updateToken)]
        pub fn update_token(this: &Keycloak, min_validity: i32) -> js_sys::Promise;

        #[wasm_bindgen(method, getter)]
        pub fn authenticated(this: &Keycloak) -> Option<bool>;

        #[wasm_bindgen(method, getter)]
        pub fn token(this: &Keycloak) -> Option<String>;

        #[wasm_bindgen(method, getter, js_name = tokenParsed)]
        pub fn token_parsed(this: &Keycloak) -> JsValue;
    }
}

/// A keycloak-js instance after `init` has settled.
///
/// On the server this is an empty, never-authenticated placeholder.
#[derive(Clone, Default)]
pub struct KeycloakSession {
    #[cfg(feature = "hydrate")]
    adapter: Option<js::Keycloak>,
}

impl KeycloakSession {
    /// Have the adapter renew the access token if it expires within
    /// `min_validity_secs`. A failed renewal is logged and the current token
    /// stays in place.
    #[cfg_attr(not(feature = "hydrate"), allow(clippy::unused_async))]
    pub async fn refresh_token(&self, min_validity_secs: i32) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(adapter) = &self.adapter {
                let renewal = wasm_bindgen_futures::JsFuture::from(adapter.update_token(min_validity_secs));
                if let Err(err) = renewal.await {
                    log::warn!("keycloak token refresh failed: {}", js_error(&err));
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = min_validity_secs;
        }
    }
}

#[cfg(feature = "hydrate")]
fn to_js<T: Serialize>(value: &T) -> Result<wasm_bindgen::JsValue, String> {
    let text = serde_json::to_string(value).map_err(|e| e.to_string())?;
    js_sys::JSON::parse(&text).map_err(|e| js_error(&e))
}

#[cfg(feature = "hydrate")]
fn js_error(err: &wasm_bindgen::JsValue) -> String {
    err.as_string()
        .or_else(|| js_sys::JSON::stringify(err).ok().and_then(|s| s.as_string()))
        .filter(|s| !s.is_empty() && s != "undefined" && s != "{}")
        .unwrap_or_else(|| "keycloak init failed".to_owned())
}

/// Construct the adapter and run its login-required init.
///
/// # Errors
///
/// Returns an error string if the adapter script is missing or init rejects.
pub async fn connect(config: &KeycloakConfig) -> Result<KeycloakSession, String> {
    #[cfg(feature = "hydrate")]
    {
        let adapter = js::Keycloak::new(&to_js(config)?).map_err(|e| js_error(&e))?;
        wasm_bindgen_futures::JsFuture::from(adapter.init(&to_js(&LOGIN_REQUIRED)?))
            .await
            .map_err(|e| js_error(&e))?;
        log::info!("keycloak session ready (realm {})", config.realm);
        Ok(KeycloakSession { adapter: Some(adapter) })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err("not available on server".to_owned())
    }
}

impl AuthGateway for KeycloakSession {
    fn is_authenticated(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            self.adapter.as_ref().and_then(js::Keycloak::authenticated).unwrap_or(false)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }

    fn display_name(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let parsed = self.adapter.as_ref()?.token_parsed();
            let text = js_sys::JSON::stringify(&parsed).ok()?.as_string()?;
            let claims: serde_json::Value = serde_json::from_str(&text).ok()?;
            display_name_from_claims(&claims)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn token(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            self.adapter.as_ref().and_then(js::Keycloak::token)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn logout(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(adapter) = &self.adapter {
                // The adapter navigates away; the promise is never awaited.
                let _ = adapter.logout();
            }
        }
    }
}
