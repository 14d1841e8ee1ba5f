//! Authenticated session wrapper around the HTTP transport.
//!
//! One [`ApiSession`] is constructed at startup and shared (via `Arc`)
//! by every resource call for the process lifetime. It owns the single
//! `reqwest::Client`, the base URL, and the token store handle; the
//! [`authorize`] middleware runs before every outbound request and
//! injects `authorization: Bearer <token>` when a token is stored.
//!
//! Each request gets its own independent header-injection pass, so
//! concurrent calls never block on each other. This layer mutates
//! nothing but the request being sent — auth state and token storage
//! are written elsewhere.

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::token::TokenStore;
use reqwest::{header, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Shared HTTP session pre-configured with the API base URL.
pub struct ApiSession {
    http: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
}

impl ApiSession {
    /// Build the session transport. Created once at startup; never
    /// recreated between logins — only the token it reads changes.
    pub fn new(config: &ApiConfig, tokens: Arc<dyn TokenStore>) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            tokens,
        })
    }

    /// Compose the absolute URL for an API path.
    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Start a request for the given method and path, with the
    /// authorization pass already applied.
    pub async fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        tracing::debug!(%method, path, "outbound API request");
        let builder = self.http.request(method, self.endpoint(path));
        authorize(builder, self.tokens.as_ref()).await
    }
}

/// Request authorization middleware.
///
/// Reads the current session token and, if present, sets the
/// `authorization: Bearer <token>` header. With no token stored the
/// builder is returned unmodified and the request proceeds
/// unauthenticated — a missing token is not an error.
pub async fn authorize(
    builder: RequestBuilder,
    tokens: &dyn TokenStore,
) -> Result<RequestBuilder, ApiError> {
    let token = tokens.get_token().await.map_err(ApiError::TokenStore)?;
    Ok(match token {
        Some(token) => builder.header(header::AUTHORIZATION, format!("Bearer {token}")),
        None => builder,
    })
}

/// Dispatch a request and parse the 2xx JSON body.
///
/// Non-2xx replies surface as [`ApiError::Status`] with the body text
/// kept verbatim; no retries, no status translation.
pub async fn send_json<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, ApiError> {
    let resp = builder.send().await?;
    let status = resp.status();

    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::Status { status, body });
    }

    Ok(resp.json().await?)
}
