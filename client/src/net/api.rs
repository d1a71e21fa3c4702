//! REST backend for the product catalog.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against the
//! same-origin `/api/Products` proxy.
//! Server-side (SSR): every call fails with a network error since there is
//! no browser session to act for.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures become `BackendError::Network`; non-2xx responses keep
//! their body verbatim so the UI can show the API's own message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use catalog::backend::{BackendError, ProductBackend};
use catalog::{Product, ProductInput};

#[cfg(not(feature = "hydrate"))]
const SERVER_SIDE: &str = "not available on server";

#[cfg(any(test, feature = "hydrate"))]
fn transport_error(detail: impl std::fmt::Display) -> BackendError {
    BackendError::Network(detail.to_string())
}

/// Product API client authorized with the signed-in user's token.
#[derive(Clone, Debug, Default)]
pub struct HttpProductBackend {
    token: Option<String>,
}

impl HttpProductBackend {
    pub fn new(token: Option<String>) -> Self {
        Self { token }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[cfg(any(test, feature = "hydrate"))]
    fn authorization(&self) -> Option<String> {
        self.token.as_deref().map(catalog::auth::bearer)
    }
}

#[cfg(feature = "hydrate")]
impl HttpProductBackend {
    fn authorize(&self, builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
        match self.authorization() {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }

    /// Send and return the body of a 2xx response.
    async fn send(request: gloo_net::http::Request) -> Result<String, BackendError> {
        let resp = request.send().await.map_err(transport_error)?;
        let status = resp.status();
        let body = resp.text().await.map_err(transport_error)?;
        if !resp.ok() {
            return Err(catalog::backend::rejected(status, body));
        }
        Ok(body)
    }
}

#[async_trait::async_trait(?Send)]
impl ProductBackend for HttpProductBackend {
    async fn list(&self) -> Result<Vec<Product>, BackendError> {
        #[cfg(feature = "hydrate")]
        {
            use catalog::backend::{PRODUCTS_PATH, decode_list};
            let request = self
                .authorize(gloo_net::http::Request::get(PRODUCTS_PATH))
                .build()
                .map_err(transport_error)?;
            let body = Self::send(request).await?;
            decode_list(&body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(BackendError::Network(SERVER_SIDE.to_owned()))
        }
    }

    async fn create(&self, input: &ProductInput) -> Result<Option<Product>, BackendError> {
        #[cfg(feature = "hydrate")]
        {
            use catalog::backend::{PRODUCTS_PATH, decode_created};
            let request = self
                .authorize(gloo_net::http::Request::post(PRODUCTS_PATH))
                .json(input)
                .map_err(transport_error)?;
            let body = Self::send(request).await?;
            Ok(decode_created(&body))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = input;
            Err(BackendError::Network(SERVER_SIDE.to_owned()))
        }
    }

    async fn update(&self, id: &str, input: &ProductInput) -> Result<(), BackendError> {
        #[cfg(feature = "hydrate")]
        {
            let url = catalog::backend::checked_product_path(id)?;
            let request = self
                .authorize(gloo_net::http::Request::put(&url))
                .json(&input.update_body(id))
                .map_err(transport_error)?;
            Self::send(request).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, input);
            Err(BackendError::Network(SERVER_SIDE.to_owned()))
        }
    }

    async fn delete(&self, id: &str) -> Result<(), BackendError> {
        #[cfg(feature = "hydrate")]
        {
            let url = catalog::backend::checked_product_path(id)?;
            let request = self
                .authorize(gloo_net::http::Request::delete(&url))
                .build()
                .map_err(transport_error)?;
            Self::send(request).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            Err(BackendError::Network(SERVER_SIDE.to_owned()))
        }
    }
}
