//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure functions kept out of components so they can be tested without a DOM.

pub mod chart;
pub mod product_form;
