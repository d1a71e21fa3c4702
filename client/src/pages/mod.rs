//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page picks the catalog view it needs and delegates rendering to
//! `components`. The product modal and delete dialog are mounted once by
//! the app, so every page shares them.

pub mod categories;
pub mod dashboard;
pub mod low_stock;
pub mod products;
