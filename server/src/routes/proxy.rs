//! Pass-through routes for the products REST API.
//!
//! The browser talks to this server same-origin; each call is replayed
//! against `CATALOG_API_URL` with the caller's bearer token. Status and body
//! come back untouched so the client sees the upstream's own messages.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, Method, StatusCode, header};
use axum::response::{IntoResponse, Response};
use catalog::backend::{PRODUCTS_PATH, UNREACHABLE_MESSAGE, checked_product_path, join_url};

use crate::state::AppState;

const FORWARDED_HEADERS: [header::HeaderName; 3] = [header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT];

pub async fn list_products(State(state): State<AppState>, headers: HeaderMap) -> Response {
    forward(&state, Method::GET, PRODUCTS_PATH, &headers, Bytes::new()).await
}

pub async fn create_product(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    forward(&state, Method::POST, PRODUCTS_PATH, &headers, body).await
}

pub const INVALID_ID_MESSAGE: &str = "invalid product id";

pub async fn get_product(State(state): State<AppState>, Path(id): Path<String>, headers: HeaderMap) -> Response {
    forward_product(&state, Method::GET, &id, &headers, Bytes::new()).await
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    forward_product(&state, Method::PUT, &id, &headers, body).await
}

pub async fn delete_product(State(state): State<AppState>, Path(id): Path<String>, headers: HeaderMap) -> Response {
    forward_product(&state, Method::DELETE, &id, &headers, Bytes::new()).await
}

/// `id` arrives percent-decoded; it must still name exactly one segment
/// under the products path.
async fn forward_product(state: &AppState, method: Method, id: &str, headers: &HeaderMap, body: Bytes) -> Response {
    match checked_product_path(id) {
        Ok(path) => forward(state, method, &path, headers, body).await,
        Err(err) => {
            tracing::info!(%method, error = %err, "rejected product id outside the products path");
            (StatusCode::BAD_REQUEST, INVALID_ID_MESSAGE).into_response()
        }
    }
}

async fn forward(state: &AppState, method: Method, path: &str, headers: &HeaderMap, body: Bytes) -> Response {
    let url = join_url(&state.config.api_url, path);
    let mut request = state.http.request(method.clone(), &url);
    for name in &FORWARDED_HEADERS {
        if let Some(value) = headers.get(name) {
            request = request.header(name.clone(), value.clone());
        }
    }
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = match request.send().await {
        Ok(upstream) => upstream,
        Err(e) => {
            tracing::warn!(%method, %url, error = %e, "catalog api unreachable");
            return bad_gateway();
        }
    };

    let status = upstream.status();
    let content_type = upstream.headers().get(header::CONTENT_TYPE).cloned();
    let bytes = match upstream.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(%method, %url, error = %e, "catalog api body read failed");
            return bad_gateway();
        }
    };

    if status.is_success() {
        tracing::debug!(%method, %url, status = status.as_u16(), "catalog api call");
    } else {
        tracing::info!(%method, %url, status = status.as_u16(), "catalog api rejected call");
    }

    let mut response = (status, bytes).into_response();
    if let Some(content_type) = content_type {
        response.headers_mut().insert(header::CONTENT_TYPE, content_type);
    }
    response
}

fn bad_gateway() -> Response {
    (StatusCode::BAD_GATEWAY, UNREACHABLE_MESSAGE).into_response()
}
