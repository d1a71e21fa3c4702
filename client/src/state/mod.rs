//! Reactive application state shared through Leptos context.
//!
//! DESIGN
//! ======
//! State structs are plain data stored in `RwSignal`s. The catalog itself is
//! [`catalog::CatalogState`]; `products` only adds the async glue that runs
//! its begin/finish transitions around backend calls.

pub mod auth;
pub mod products;
