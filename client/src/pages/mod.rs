//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod create_model;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod model_detail;
pub mod register;
