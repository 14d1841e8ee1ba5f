//! Secure session token storage.
//!
//! The session token is an opaque string credential with exactly one
//! authoritative value per device: overwritten on login/signup, removed
//! on logout. Every read/write site goes through the [`TokenStore`]
//! trait under the single well-known [`TOKEN_KEY`], so the request
//! interceptor and the auth state container can never disagree on where
//! the credential lives.
//!
//! Two backends ship with the crate:
//! - [`MemoryTokenStore`]: in-process, for tests and ephemeral sessions
//! - [`EncryptedTokenStore`]: AES-256-GCM encrypted file under the app
//!   data directory, for platforms without a native keystore bridge

pub mod encrypted;

pub use encrypted::EncryptedTokenStore;

use anyhow::Result;
use async_trait::async_trait;
use parking_lot::Mutex;

/// Well-known storage key for the session token. Shared by the write
/// sites (login/signup/logout) and the read site (request interceptor).
pub const TOKEN_KEY: &str = "haven_session_token";

/// Device-secure key-value capability holding the session token.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Read the current token, if one is stored.
    async fn get_token(&self) -> Result<Option<String>>;

    /// Store a token, replacing any previous value.
    async fn set_token(&self, token: &str) -> Result<()>;

    /// Remove the stored token. Removing an absent token is not an error.
    async fn clear_token(&self) -> Result<()>;
}

/// In-memory token store.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn get_token(&self) -> Result<Option<String>> {
        Ok(self.token.lock().clone())
    }

    async fn set_token(&self, token: &str) -> Result<()> {
        *self.token.lock() = Some(token.to_string());
        Ok(())
    }

    async fn clear_token(&self) -> Result<()> {
        *self.token.lock() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_store_starts_empty() {
        let store = MemoryTokenStore::new();
        assert!(store.get_token().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn memory_store_set_get_clear() {
        let store = MemoryTokenStore::new();

        store.set_token("token-abc").await.unwrap();
        assert_eq!(store.get_token().await.unwrap().as_deref(), Some("token-abc"));

        store.clear_token().await.unwrap();
        assert!(store.get_token().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn memory_store_overwrites_previous_token() {
        let store = MemoryTokenStore::with_token("old-token");

        store.set_token("new-token").await.unwrap();
        assert_eq!(store.get_token().await.unwrap().as_deref(), Some("new-token"));
    }

    #[tokio::test]
    async fn clearing_absent_token_is_not_an_error() {
        let store = MemoryTokenStore::new();
        store.clear_token().await.unwrap();
        store.clear_token().await.unwrap();
    }
}
