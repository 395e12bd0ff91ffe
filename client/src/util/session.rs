//! Session lifecycle: restore on load, login, logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! These are the only callers of the `AuthState` reducer that touch the
//! network or `localStorage`. Pages call them; they never mutate auth state
//! directly.

use leptos::prelude::*;

use crate::net::api;
use crate::state::auth::{AuthAction, AuthState};
use crate::util::token;

fn dispatch(auth: RwSignal<AuthState>, action: AuthAction) {
    auth.update(|state| state.apply(action));
}

/// Re-validate the stored token once at application start.
///
/// Expired or unreadable tokens are dropped without a network call; a token
/// the backend rejects is dropped silently as well.
pub fn restore(auth: RwSignal<AuthState>) {
    match token::restore_decision(token::load(), token::now_secs()) {
        token::RestoreDecision::NoSession => dispatch(auth, AuthAction::Logout),
        token::RestoreDecision::Discard => {
            token::clear();
            dispatch(auth, AuthAction::Logout);
        }
        token::RestoreDecision::Validate(stored) => {
            dispatch(auth, AuthAction::LoginRequest);
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                match api::fetch_current_user(&stored).await {
                    Ok(user) => dispatch(auth, AuthAction::LoginSuccess { token: stored, user }),
                    Err(e) => {
                        log::warn!("session: stored token rejected: {e}");
                        token::clear();
                        dispatch(auth, AuthAction::Logout);
                    }
                }
            });
            #[cfg(not(feature = "hydrate"))]
            let _ = stored;
        }
    }
}

/// Exchange credentials for a token, load the profile, and persist the token.
///
/// Failures land in `AuthState::error` for the login page to show.
pub async fn login(auth: RwSignal<AuthState>, username: String, password: String) {
    dispatch(auth, AuthAction::LoginRequest);
    let result = async {
        let issued = api::login(&username, &password).await?;
        let user = api::fetch_current_user(&issued.access_token).await?;
        Ok::<_, String>((issued.access_token, user))
    }
    .await;
    match result {
        Ok((access_token, user)) => {
            token::save(&access_token);
            dispatch(auth, AuthAction::LoginSuccess { token: access_token, user });
        }
        Err(message) => {
            let message = if message.trim().is_empty() { api::LOGIN_FAILED.to_owned() } else { message };
            dispatch(auth, AuthAction::LoginFailure(message));
        }
    }
}

/// Drop the session. Callers navigate to `/login` afterwards.
pub fn logout(auth: RwSignal<AuthState>) {
    token::clear();
    dispatch(auth, AuthAction::Logout);
}

pub fn clear_error(auth: RwSignal<AuthState>) {
    dispatch(auth, AuthAction::ClearError);
}
