//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and normalizes failures into display strings;
//! `types` defines the shared wire schema.

pub mod api;
pub mod types;
