//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome, forms, and previews while reading shared
//! auth state from Leptos context.

pub mod generator_form;
pub mod header;
pub mod model_card;
pub mod model_viewer;
