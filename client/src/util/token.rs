//! Access-token persistence and expiry checks.
//!
//! The token is an opaque JWT from the backend. The client never verifies its
//! signature; it only reads the `exp` claim to skip a doomed `/users/me` call
//! on startup. Storage is hydrate-only; SSR paths no-op.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

/// `localStorage` key holding the access token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// The JWT claims the client cares about.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Claims {
    /// Expiry as seconds since the Unix epoch.
    #[serde(default)]
    pub exp: Option<f64>,
}

impl Claims {
    /// A token without `exp` never expires.
    #[must_use]
    pub fn is_expired(&self, now_secs: f64) -> bool {
        self.exp.is_some_and(|exp| exp < now_secs)
    }
}

/// Decode the payload segment of a JWT without verifying it.
///
/// # Errors
///
/// Returns an error when the token has no payload segment, the segment is not
/// base64url, or it is not a JSON object.
pub fn decode_claims(token: &str) -> Result<Claims, String> {
    let payload = token
        .split('.')
        .nth(1)
        .filter(|segment| !segment.is_empty())
        .ok_or_else(|| "token has no payload segment".to_owned())?;
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| format!("token payload is not base64url: {e}"))?;
    serde_json::from_slice(&bytes).map_err(|e| format!("token payload is not JSON claims: {e}"))
}

/// What startup should do with a stored token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RestoreDecision {
    /// Nothing stored.
    NoSession,
    /// Stored token is unreadable or expired; drop it and log out.
    Discard,
    /// Stored token looks live; confirm it against `/users/me`.
    Validate(String),
}

#[must_use]
pub fn restore_decision(stored: Option<String>, now_secs: f64) -> RestoreDecision {
    let Some(token) = stored else {
        return RestoreDecision::NoSession;
    };
    match decode_claims(&token) {
        Ok(claims) if !claims.is_expired(now_secs) => RestoreDecision::Validate(token),
        _ => RestoreDecision::Discard,
    }
}

/// Current time in seconds since the Unix epoch, as the browser sees it.
#[must_use]
pub fn now_secs() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now() / 1000.0
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Read the stored token.
pub fn load() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(TOKEN_STORAGE_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist `token` for later page loads.
pub fn save(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        if storage.set_item(TOKEN_STORAGE_KEY, token).is_err() {
            log::warn!("token: localStorage write failed");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Forget the stored token.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(TOKEN_STORAGE_KEY);
        }
    }
}
