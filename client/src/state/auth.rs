//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering.
//!
//! DESIGN
//! ======
//! The session only changes through [`AuthState::apply`], so every transition
//! is a plain value-in/value-out function testable without a browser. The
//! orchestration that performs network calls lives in `util::session`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user, token, and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub user: Option<User>,
    pub token: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Every way the session can change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthAction {
    LoginRequest,
    LoginSuccess { token: String, user: User },
    LoginFailure(String),
    Logout,
    ClearError,
}

impl AuthState {
    /// State before the stored session has been checked.
    ///
    /// Starts as loading so route guards wait for `restore` instead of
    /// bouncing a reloaded protected page to `/login`.
    #[must_use]
    pub fn restoring() -> Self {
        Self { loading: true, ..Self::default() }
    }

    /// Apply one transition.
    pub fn apply(&mut self, action: AuthAction) {
        match action {
            AuthAction::LoginRequest => {
                self.loading = true;
                self.error = None;
            }
            AuthAction::LoginSuccess { token, user } => {
                *self = Self {
                    is_authenticated: true,
                    user: Some(user),
                    token: Some(token),
                    loading: false,
                    error: None,
                };
            }
            AuthAction::LoginFailure(message) => {
                *self = Self { error: Some(message), ..Self::default() };
            }
            AuthAction::Logout => *self = Self::default(),
            AuthAction::ClearError => self.error = None,
        }
    }

    /// Route guards redirect once loading settled without a user.
    #[must_use]
    pub fn should_redirect_to_login(&self) -> bool {
        !self.loading && self.user.is_none()
    }

    /// Bearer token, present only for an authenticated session.
    #[must_use]
    pub fn bearer(&self) -> Option<&str> {
        if self.is_authenticated { self.token.as_deref() } else { None }
    }
}
