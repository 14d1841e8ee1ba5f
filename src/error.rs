//! Error taxonomy for the API session layer.
//!
//! Transport failures and non-2xx replies are surfaced unchanged — no
//! retries, no status translation. A missing session token is never an
//! error: the request simply goes out unauthenticated.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors produced by the session wrapper and resource client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network-level failure (DNS, connect, timeout, body decode).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server replied with a non-2xx status. The body text is kept verbatim.
    #[error("server replied {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// Secure token storage read/write failed.
    #[error("token store: {0}")]
    TokenStore(#[source] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_keeps_body_verbatim() {
        let err = ApiError::Status {
            status: StatusCode::UNAUTHORIZED,
            body: r#"{"message":"Invalid credentials"}"#.into(),
        };
        let text = err.to_string();
        assert!(text.contains("401"));
        assert!(text.contains("Invalid credentials"));
    }

    #[test]
    fn token_store_error_wraps_source() {
        let err = ApiError::TokenStore(anyhow::anyhow!("keystore unavailable"));
        assert!(err.to_string().contains("keystore unavailable"));
    }
}
