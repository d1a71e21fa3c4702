//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read and write the shared `AuthState` and `CatalogState`
//! signals from Leptos context; pages only arrange them.

pub mod auth_gate;
pub mod category_chart;
pub mod delete_dialog;
pub mod notice_banner;
pub mod product_modal;
pub mod product_table;
pub mod sidebar;
pub mod summary_card;
