//! REST API helpers for the auth and posts endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side (SSR):
//! stubs returning errors since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call funnels non-OK responses through [`ApiError::from_response`].
//! A 401 additionally destroys the stored session before the error reaches
//! the caller, so rejected credentials never linger; the caller owns the
//! redirect to the sign-in page.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{Post, TokenPair, User};

#[cfg(any(test, feature = "hydrate"))]
const DEFAULT_API_BASE: &str = "http://localhost:8080";

/// Absolute URL for an API path, honoring the compile-time `API_BASE_URL`
/// override.
#[cfg(any(test, feature = "hydrate"))]
fn api_url(path: &str) -> String {
    format!("{}{path}", option_env!("API_BASE_URL").unwrap_or(DEFAULT_API_BASE))
}

#[cfg(any(test, feature = "hydrate"))]
fn post_endpoint(id: i64) -> String {
    format!("/api/posts/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Destroy the stored session when the server rejected its token.
#[cfg(any(test, feature = "hydrate"))]
fn drop_rejected_session(error: ApiError) -> ApiError {
    if error == ApiError::Unauthorized {
        leptos::logging::warn!("access token rejected; clearing stored session");
        crate::session::lifecycle::logout();
    }
    error
}

#[cfg(feature = "hydrate")]
async fn fail(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    drop_rejected_session(ApiError::from_response(status, &body))
}

/// Attach the stored access token as a bearer header, when present.
#[cfg(feature = "hydrate")]
fn with_bearer(request: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match crate::session::credentials::access_token() {
        Some(token) if !token.is_empty() => request.header("Authorization", &bearer(&token)),
        _ => request,
    }
}

/// The stored access token, or `Unauthorized` for endpoints that demand one.
#[cfg(feature = "hydrate")]
fn required_token() -> Result<String, ApiError> {
    match crate::session::credentials::access_token() {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(ApiError::Unauthorized),
    }
}

/// Sign in via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the credentials are
/// rejected.
pub async fn login(email: &str, password: &str) -> Result<TokenPair, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post(&api_url("/api/auth/login"))
            .json(&payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(fail(resp).await);
        }
        resp.json::<TokenPair>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Create an account via `POST /api/auth/register`.
///
/// The server responds with a token pair, so registration doubles as the
/// first sign-in.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the account already
/// exists.
pub async fn register(email: &str, password: &str) -> Result<TokenPair, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post(&api_url("/api/auth/register"))
            .json(&payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(fail(resp).await);
        }
        resp.json::<TokenPair>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Request a password-reset email via `POST /api/auth/forgot-password`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn request_password_reset(email: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email });
        let resp = gloo_net::http::Request::post(&api_url("/api/auth/forgot-password"))
            .json(&payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(fail(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch the signed-in account via `GET /api/auth/me`.
///
/// # Errors
///
/// Returns [`ApiError::Unauthorized`] when no token is stored or the server
/// rejects it.
pub async fn fetch_me() -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let token = required_token()?;
        let resp = gloo_net::http::Request::get(&api_url("/api/auth/me"))
            .header("Authorization", &bearer(&token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(fail(resp).await);
        }
        resp.json::<User>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch all published posts via `GET /api/posts`.
///
/// Sends the bearer header when a token is stored; the listing itself is
/// public.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn fetch_posts() -> Result<Vec<Post>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_bearer(gloo_net::http::Request::get(&api_url("/api/posts")))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(fail(resp).await);
        }
        resp.json::<Vec<Post>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch the signed-in account's posts via `GET /api/posts/me`.
///
/// # Errors
///
/// Returns [`ApiError::Unauthorized`] when no token is stored or the server
/// rejects it.
pub async fn fetch_my_posts() -> Result<Vec<Post>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let token = required_token()?;
        let resp = gloo_net::http::Request::get(&api_url("/api/posts/me"))
            .header("Authorization", &bearer(&token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(fail(resp).await);
        }
        resp.json::<Vec<Post>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch one post via `GET /api/posts/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the post does not exist.
pub async fn fetch_post(id: i64) -> Result<Post, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&api_url(&post_endpoint(id)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(fail(resp).await);
        }
        resp.json::<Post>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Create a post via `POST /api/posts`.
///
/// # Errors
///
/// Returns [`ApiError::Unauthorized`] when no token is stored or the server
/// rejects it.
pub async fn create_post(title: &str, content: &str) -> Result<Post, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let token = required_token()?;
        let payload = serde_json::json!({ "title": title, "content": content });
        let resp = gloo_net::http::Request::post(&api_url("/api/posts"))
            .header("Authorization", &bearer(&token))
            .json(&payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(fail(resp).await);
        }
        resp.json::<Post>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (title, content);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Update a post via `PUT /api/posts/{id}`.
///
/// # Errors
///
/// Returns [`ApiError::Unauthorized`] when no token is stored or the server
/// rejects it, and a server error when the post belongs to someone else.
pub async fn update_post(id: i64, title: &str, content: &str) -> Result<Post, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let token = required_token()?;
        let payload = serde_json::json!({ "title": title, "content": content });
        let resp = gloo_net::http::Request::put(&api_url(&post_endpoint(id)))
            .header("Authorization", &bearer(&token))
            .json(&payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(fail(resp).await);
        }
        resp.json::<Post>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, title, content);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Delete a post via `DELETE /api/posts/{id}`.
///
/// # Errors
///
/// Returns [`ApiError::Unauthorized`] when no token is stored or the server
/// rejects it, and a server error when the post belongs to someone else.
pub async fn delete_post(id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let token = required_token()?;
        let resp = gloo_net::http::Request::delete(&api_url(&post_endpoint(id)))
            .header("Authorization", &bearer(&token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(fail(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}
