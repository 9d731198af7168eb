//! Auth API client: exchanges credentials for a `(token, user)` pair.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: stubs returning an error, since the
//! exchange is only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` so pages can show the message inline
//! without matching on transport error types.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AuthResponse, LoginRequest, RegisterRequest};

#[cfg(any(test, feature = "hydrate"))]
fn login_endpoint(api_base_url: &str) -> String {
    format!("{}/auth/login", api_base_url.trim_end_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn register_endpoint(api_base_url: &str) -> String {
    format!("{}/auth/register", api_base_url.trim_end_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn auth_failed_message(action: &str, status: u16) -> String {
    match status {
        401 | 403 => format!("{action} failed: invalid email or password"),
        409 => format!("{action} failed: account already exists"),
        _ => format!("{action} failed: {status}"),
    }
}

#[cfg(feature = "hydrate")]
async fn post_auth<T: serde::Serialize>(url: &str, action: &str, body: &T) -> Result<AuthResponse, String> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(auth_failed_message(action, resp.status()));
    }
    resp.json::<AuthResponse>().await.map_err(|e| e.to_string())
}

/// Sign in via `POST {api_base_url}/auth/login`.
///
/// # Errors
///
/// Returns an error string if the request fails, the server rejects the
/// credentials, or the response body is not a `{token, user}` pair.
pub async fn login(api_base_url: &str, request: &LoginRequest) -> Result<AuthResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        post_auth(&login_endpoint(api_base_url), "login", request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api_base_url, request);
        Err("not available on server".to_owned())
    }
}

/// Create an account via `POST {api_base_url}/auth/register`.
///
/// # Errors
///
/// Returns an error string if the request fails, the server rejects the
/// registration, or the response body is not a `{token, user}` pair.
pub async fn register(api_base_url: &str, request: &RegisterRequest) -> Result<AuthResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        post_auth(&register_endpoint(api_base_url), "registration", request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api_base_url, request);
        Err("not available on server".to_owned())
    }
}
