//! REST API helpers for communicating with the model-generation backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, routed through the
//! host's same-origin `/api` proxy.
//! Server-side (SSR): stubs returning an error since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, String>` where the error is already a
//! display string: the backend's `detail` when it sent one, otherwise the
//! per-operation fallback message. Pages show it verbatim.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{BBModel, BBModelResponse, GenerateRequest, RegisterRequest, TokenResponse, User};

/// Browser-side prefix the host server proxies to the backend.
pub const API_PREFIX: &str = "/api";

/// Page size requested from `GET /models/`.
pub const MODEL_LIST_LIMIT: u32 = 100;

pub const LOGIN_FAILED: &str = "Login failed";
pub const CURRENT_USER_FAILED: &str = "Failed to get user profile";
pub const REGISTRATION_FAILED: &str = "Registration failed";
pub const GENERATION_FAILED: &str = "Model generation failed";
pub const STATUS_FAILED: &str = "Failed to get model status";
pub const LIST_FAILED: &str = "Failed to get models";
pub const DOWNLOAD_FAILED: &str = "Failed to download model";

#[cfg(not(feature = "hydrate"))]
const NOT_AVAILABLE: &str = "not available on server";

#[cfg(any(test, feature = "hydrate"))]
fn api_url(path: &str) -> String {
    format!("{API_PREFIX}{path}")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn model_status_endpoint(model_id: &str) -> String {
    api_url(&format!("/models/status/{model_id}"))
}

#[cfg(any(test, feature = "hydrate"))]
fn model_list_endpoint(skip: u32, limit: u32) -> String {
    api_url(&format!("/models/?skip={skip}&limit={limit}"))
}

#[cfg(any(test, feature = "hydrate"))]
fn model_download_endpoint(model_id: &str) -> String {
    api_url(&format!("/models/{model_id}/download"))
}

/// Extract a display message from a FastAPI-style error body.
///
/// `{"detail": "msg"}` yields `msg`; `{"detail": [{"msg": ..}, ..]}` joins the
/// entries with `"; "`. Anything else yields `fallback`.
#[cfg(any(test, feature = "hydrate"))]
fn error_detail(body: &str, fallback: &str) -> String {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return fallback.to_owned();
    };
    match value.get("detail") {
        Some(serde_json::Value::String(detail)) if !detail.trim().is_empty() => detail.clone(),
        Some(serde_json::Value::Array(entries)) => {
            let messages: Vec<&str> = entries
                .iter()
                .filter_map(|entry| entry.get("msg").and_then(serde_json::Value::as_str))
                .collect();
            if messages.is_empty() {
                fallback.to_owned()
            } else {
                messages.join("; ")
            }
        }
        _ => fallback.to_owned(),
    }
}

#[cfg(feature = "hydrate")]
async fn failure(resp: gloo_net::http::Response, fallback: &str) -> String {
    let body = resp.text().await.unwrap_or_default();
    log::debug!("api: {} {} -> {}", resp.url(), resp.status(), body);
    error_detail(&body, fallback)
}

#[cfg(feature = "hydrate")]
fn transport(err: &gloo_net::Error, fallback: &str) -> String {
    log::warn!("api: request failed: {err}");
    fallback.to_owned()
}

#[cfg(feature = "hydrate")]
async fn json_or<T: serde::de::DeserializeOwned>(
    sent: Result<gloo_net::http::Response, gloo_net::Error>,
    fallback: &str,
) -> Result<T, String> {
    let resp = sent.map_err(|e| transport(&e, fallback))?;
    if !resp.ok() {
        return Err(failure(resp, fallback).await);
    }
    resp.json::<T>().await.map_err(|e| transport(&e, fallback))
}

/// Exchange credentials for an access token via `POST /auth/token`.
///
/// # Errors
///
/// Returns the backend's detail or `"Login failed"`.
pub async fn login(username: &str, password: &str) -> Result<TokenResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let form = web_sys::UrlSearchParams::new().map_err(|_| LOGIN_FAILED.to_owned())?;
        form.append("username", username);
        form.append("password", password);
        let request = gloo_net::http::Request::post(&api_url("/auth/token"))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(form)
            .map_err(|e| transport(&e, LOGIN_FAILED))?;
        json_or(request.send().await, LOGIN_FAILED).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err(NOT_AVAILABLE.to_owned())
    }
}

/// Fetch the account that owns `token` from `GET /users/me`.
///
/// # Errors
///
/// Returns the backend's detail or a generic profile failure.
pub async fn fetch_current_user(token: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let sent = gloo_net::http::Request::get(&api_url("/users/me"))
            .header("Authorization", &bearer_header(token))
            .send()
            .await;
        json_or(sent, CURRENT_USER_FAILED).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(NOT_AVAILABLE.to_owned())
    }
}

/// Create an account via `POST /users/`.
///
/// # Errors
///
/// Returns the backend's detail (e.g. a duplicate username) or
/// `"Registration failed"`.
pub async fn register(request: &RegisterRequest) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let built = gloo_net::http::Request::post(&api_url("/users/"))
            .json(request)
            .map_err(|e| transport(&e, REGISTRATION_FAILED))?;
        json_or(built.send().await, REGISTRATION_FAILED).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(NOT_AVAILABLE.to_owned())
    }
}

/// Submit a generation job via multipart `POST /models/generate`.
///
/// # Errors
///
/// Returns the backend's detail or `"Model generation failed"`.
pub async fn generate_model(token: &str, request: &GenerateRequest) -> Result<BBModelResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let form = web_sys::FormData::new().map_err(|_| GENERATION_FAILED.to_owned())?;
        for (name, value) in request.form_fields() {
            form.append_with_str(name, &value)
                .map_err(|_| GENERATION_FAILED.to_owned())?;
        }
        // No explicit Content-Type: the browser adds the multipart boundary.
        let built = gloo_net::http::Request::post(&api_url("/models/generate"))
            .header("Authorization", &bearer_header(token))
            .body(form)
            .map_err(|e| transport(&e, GENERATION_FAILED))?;
        json_or(built.send().await, GENERATION_FAILED).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, request);
        Err(NOT_AVAILABLE.to_owned())
    }
}

/// Poll a generation job via `GET /models/status/{id}`.
///
/// # Errors
///
/// Returns the backend's detail or `"Failed to get model status"`.
pub async fn fetch_model_status(token: &str, model_id: &str) -> Result<BBModelResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let sent = gloo_net::http::Request::get(&model_status_endpoint(model_id))
            .header("Authorization", &bearer_header(token))
            .send()
            .await;
        json_or(sent, STATUS_FAILED).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, model_id);
        Err(NOT_AVAILABLE.to_owned())
    }
}

/// List the current user's models via `GET /models/?skip=&limit=`.
///
/// # Errors
///
/// Returns the backend's detail or `"Failed to get models"`.
pub async fn list_models(token: &str, skip: u32, limit: u32) -> Result<Vec<BBModel>, String> {
    #[cfg(feature = "hydrate")]
    {
        let sent = gloo_net::http::Request::get(&model_list_endpoint(skip, limit))
            .header("Authorization", &bearer_header(token))
            .send()
            .await;
        json_or(sent, LIST_FAILED).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, skip, limit);
        Err(NOT_AVAILABLE.to_owned())
    }
}

/// Fetch the raw `.bbmodel` bytes via `GET /models/{id}/download`.
///
/// # Errors
///
/// Returns the backend's detail or `"Failed to download model"`.
pub async fn download_model(token: &str, model_id: &str) -> Result<Vec<u8>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&model_download_endpoint(model_id))
            .header("Authorization", &bearer_header(token))
            .send()
            .await
            .map_err(|e| transport(&e, DOWNLOAD_FAILED))?;
        if !resp.ok() {
            return Err(failure(resp, DOWNLOAD_FAILED).await);
        }
        resp.binary().await.map_err(|e| transport(&e, DOWNLOAD_FAILED))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, model_id);
        Err(NOT_AVAILABLE.to_owned())
    }
}
