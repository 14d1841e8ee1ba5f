//! Haven core — the Rust heart of the Haven safety companion app.
//!
//! UI layers (platform bridges, screens, navigation) live outside this
//! crate and consume three things from it:
//! - [`ApiSession`]: the shared transport pre-configured with the API
//!   base URL, injecting `authorization: Bearer <token>` before every
//!   outbound request
//! - [`ApiClient`]: one typed method per backend operation — auth,
//!   hotlines, shelters, articles, SOS contacts
//! - [`AuthManager`]: the auth state container, persisting the session
//!   token to secure storage and publishing state to subscribers
//!
//! Secure storage is a trait boundary ([`token::TokenStore`]) so
//! platform keystores can be bridged in without touching the core.

pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod token;

pub use api::ApiClient;
pub use auth::{AuthManager, AuthPhase, AuthState};
pub use client::ApiSession;
pub use config::ApiConfig;
pub use error::ApiError;
pub use token::{EncryptedTokenStore, MemoryTokenStore, TokenStore, TOKEN_KEY};
