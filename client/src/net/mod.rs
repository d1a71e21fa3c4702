//! Browser-facing network modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` talks to the catalog REST API through the server's same-origin
//! proxy, and `keycloak` wraps the identity provider's JS adapter.

pub mod api;
pub mod keycloak;
