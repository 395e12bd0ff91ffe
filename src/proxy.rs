//! `/api` reverse proxy to the generation backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only ever talks to this host. Every `/api/{*path}` request is
//! replayed against `BACKEND_URL/{path}` with its method, query, body, and
//! end-to-end headers. The path is forwarded exactly as the browser encoded
//! it. The backend response is buffered and returned with its status and
//! end-to-end headers.
//! Transport failures become `502` with a `{"detail": ...}` body, the shape
//! the client already knows how to surface.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::Json;
use axum::body::{Body, to_bytes};
use axum::extract::{Request, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::state::AppState;

/// Mount point of the proxy on this host.
pub const API_MOUNT: &str = "/api";

/// Largest request body forwarded upstream.
pub const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Connection-scoped headers that must not cross the proxy.
const HOP_BY_HOP: [&str; 10] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
    "host",
    "content-length",
];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("request body unreadable: {0}")]
    Body(String),
    #[error("backend unreachable: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl ProxyError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Body(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

#[derive(Serialize)]
struct Detail {
    detail: String,
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (self.status(), Json(Detail { detail: self.to_string() })).into_response()
    }
}

/// The still-encoded path below the `/api` mount.
pub fn upstream_path(raw: &str) -> &str {
    raw.strip_prefix(API_MOUNT).unwrap_or(raw)
}

/// Join the backend origin, the path, and the original query.
pub fn upstream_url(backend: &str, path: &str, query: Option<&str>) -> String {
    let path = path.trim_start_matches('/');
    match query {
        Some(q) if !q.is_empty() => format!("{backend}/{path}?{q}"),
        _ => format!("{backend}/{path}"),
    }
}

pub fn is_hop_by_hop(name: &str) -> bool {
    HOP_BY_HOP.iter().any(|h| h.eq_ignore_ascii_case(name))
}

/// Copy end-to-end headers, dropping hop-by-hop ones.
pub fn forwardable_headers(headers: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        if !is_hop_by_hop(name.as_str()) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

/// Handler for `/api/{*path}`.
///
/// The path is taken from the raw request URI rather than a `Path`
/// extractor, which would percent-decode `%2F`, `%3F`, and `%23`.
///
/// # Errors
///
/// Returns [`ProxyError`] when the body cannot be read or the backend cannot
/// be reached. Backend error statuses are passed through untouched.
pub async fn forward(State(state): State<AppState>, request: Request) -> Result<Response, ProxyError> {
    let (parts, body) = request.into_parts();
    let path = upstream_path(parts.uri.path()).to_owned();
    let url = upstream_url(&state.config.backend_url, &path, parts.uri.query());
    let bytes = to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| ProxyError::Body(e.to_string()))?;

    let upstream = state
        .http
        .request(parts.method.clone(), &url)
        .headers(forwardable_headers(&parts.headers))
        .body(bytes)
        .send()
        .await
        .inspect_err(|e| tracing::warn!(method = %parts.method, %path, error = %e, "proxy: backend request failed"))?;

    let status = upstream.status();
    let headers = forwardable_headers(upstream.headers());
    let payload = upstream
        .bytes()
        .await
        .inspect_err(|e| tracing::warn!(method = %parts.method, %path, error = %e, "proxy: backend body failed"))?;
    tracing::debug!(method = %parts.method, %path, status = status.as_u16(), "proxy: forwarded");

    let mut response = Response::new(Body::from(payload));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}
