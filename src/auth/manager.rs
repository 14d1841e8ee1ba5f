//! Async auth orchestrator.
//!
//! Drives the pure state machine from login/signup/logout outcomes,
//! applies token-store effects, and publishes every transition over a
//! `tokio::sync::watch` channel so UI layers can subscribe without
//! polling. This is the only component that converts a transport error
//! into local state — the resource client itself never swallows one.

use super::state::{reduce, AuthAction, AuthEffect, AuthState};
use crate::api::ApiClient;
use crate::token::TokenStore;
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::watch;

/// Owner of the auth state, shared by `Arc` across the app.
pub struct AuthManager {
    api: Arc<ApiClient>,
    tokens: Arc<dyn TokenStore>,
    state: watch::Sender<AuthState>,
}

impl AuthManager {
    pub fn new(api: Arc<ApiClient>, tokens: Arc<dyn TokenStore>) -> Self {
        let (state, _) = watch::channel(AuthState::default());
        Self { api, tokens, state }
    }

    /// Snapshot of the current auth state.
    pub fn state(&self) -> AuthState {
        self.state.borrow().clone()
    }

    /// Subscribe to auth state transitions.
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    /// Run one action through the reducer, apply its effects to the
    /// token store, then publish the new state.
    async fn dispatch(&self, action: AuthAction) -> Result<()> {
        let (next, effects) = {
            let current = self.state.borrow();
            reduce(&current, action)
        };

        for effect in effects {
            match effect {
                AuthEffect::PersistToken(token) => self.tokens.set_token(&token).await?,
                AuthEffect::ClearToken => self.tokens.clear_token().await?,
            }
        }

        self.state.send_replace(next);
        Ok(())
    }

    /// App start: adopt a previously persisted token if one exists.
    pub async fn restore(&self) -> Result<()> {
        let token = self.tokens.get_token().await?;
        self.dispatch(AuthAction::Restore(token)).await
    }

    /// Attempt a login. Failure lands in the `Error` phase with a
    /// user-facing message; nothing is retried automatically.
    pub async fn login(&self, email: &str, password: &str) -> Result<()> {
        self.dispatch(AuthAction::Submit).await?;

        match self.api.login(email, password).await {
            Ok(resp) => self.dispatch(AuthAction::Succeeded { token: resp.token }).await,
            Err(err) => {
                tracing::warn!("login failed: {err}");
                self.dispatch(AuthAction::Failed {
                    message: err.to_string(),
                })
                .await
            }
        }
    }

    /// Attempt a signup; same outcome handling as login.
    pub async fn signup(&self, email: &str, password: &str, username: &str) -> Result<()> {
        self.dispatch(AuthAction::Submit).await?;

        match self.api.signup(email, password, username).await {
            Ok(resp) => self.dispatch(AuthAction::Succeeded { token: resp.token }).await,
            Err(err) => {
                tracing::warn!("signup failed: {err}");
                self.dispatch(AuthAction::Failed {
                    message: err.to_string(),
                })
                .await
            }
        }
    }

    /// Explicit logout: clears the stored token and resets the state.
    pub async fn logout(&self) -> Result<()> {
        self.dispatch(AuthAction::Logout).await
    }

    /// Acknowledge the first-launch experience.
    pub async fn mark_launched(&self) -> Result<()> {
        self.dispatch(AuthAction::MarkLaunched).await
    }
}
