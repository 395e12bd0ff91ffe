//! Shared route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected pages and the login page apply identical redirect behavior, driven
//! by the shared `AuthState` signal.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Which audience a route is for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Guard {
    /// Dashboard, create, and model detail: signed-in users only.
    RequireUser,
    /// Login: signed-in users are sent onward.
    RequireAnonymous,
}

/// Where a route guarded by `guard` should send the user, if anywhere.
#[must_use]
pub fn redirect_target(state: &AuthState, guard: Guard) -> Option<&'static str> {
    match guard {
        Guard::RequireUser if state.should_redirect_to_login() => Some("/login"),
        Guard::RequireAnonymous if state.is_authenticated => Some("/dashboard"),
        _ => None,
    }
}

/// Redirect whenever the auth state no longer satisfies `guard`.
pub fn install_redirect<F>(auth: RwSignal<AuthState>, guard: Guard, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = auth.get();
        if let Some(target) = redirect_target(&state, guard) {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
