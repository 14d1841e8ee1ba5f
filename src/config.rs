//! API client configuration.
//!
//! The base URL is fixed once per process; every facade path is relative
//! to it. Environment overrides follow the `HAVEN_API_*` prefix.

use serde::{Deserialize, Serialize};

/// Production API base URL.
const DEFAULT_BASE_URL: &str = "https://api.havenapp.dev";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection configuration for the Haven backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API base URL (e.g. https://api.havenapp.dev). A trailing slash is tolerated.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    /// Load from environment variables. Returns `None` when `HAVEN_API_URL`
    /// is unset or empty.
    pub fn from_env() -> Option<Self> {
        let base_url = std::env::var("HAVEN_API_URL").ok()?;
        if base_url.is_empty() {
            return None;
        }

        let timeout_secs = std::env::var("HAVEN_API_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Some(Self {
            base_url,
            timeout_secs,
        })
    }
}
