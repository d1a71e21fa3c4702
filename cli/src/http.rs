//! `reqwest` implementation of the products backend.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::time::Duration;

use catalog::backend::{self, BackendError, PRODUCTS_PATH, ProductBackend};
use catalog::{Product, ProductInput};

pub const REQUEST_TIMEOUT_SECS: u64 = 30;
pub const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Products API client bound to one base URL and bearer token.
pub struct HttpBackend {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpBackend {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_owned(), token })
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = backend::join_url(&self.base_url, path);
        let request = self.http.request(method, url);
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Send and return the body of a 2xx response.
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<String, BackendError> {
        let response = request
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;
        if !status.is_success() {
            return Err(backend::rejected(status.as_u16(), body));
        }
        Ok(body)
    }
}

#[async_trait::async_trait(?Send)]
impl ProductBackend for HttpBackend {
    async fn list(&self) -> Result<Vec<Product>, BackendError> {
        let body = self.send(self.request(reqwest::Method::GET, PRODUCTS_PATH)).await?;
        backend::decode_list(&body)
    }

    async fn create(&self, input: &ProductInput) -> Result<Option<Product>, BackendError> {
        let request = self.request(reqwest::Method::POST, PRODUCTS_PATH).json(input);
        let body = self.send(request).await?;
        Ok(backend::decode_created(&body))
    }

    async fn update(&self, id: &str, input: &ProductInput) -> Result<(), BackendError> {
        let request = self
            .request(reqwest::Method::PUT, &backend::checked_product_path(id)?)
            .json(&input.update_body(id));
        self.send(request).await.map(|_| ())
    }

    async fn delete(&self, id: &str) -> Result<(), BackendError> {
        let request = self.request(reqwest::Method::DELETE, &backend::checked_product_path(id)?);
        self.send(request).await.map(|_| ())
    }
}
