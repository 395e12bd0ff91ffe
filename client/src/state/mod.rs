//! Client-side application state.
//!
//! DESIGN
//! ======
//! Each module holds a plain struct with pure transition methods. Pages wrap
//! them in `RwSignal`s; `auth` is shared app-wide through context, the others
//! are page-scoped.

pub mod auth;
pub mod generation;
pub mod models;
