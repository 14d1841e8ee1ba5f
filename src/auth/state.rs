//! Pure auth state machine.
//!
//! States: Unauthenticated → Authenticating → Authenticated | Error.
//! Nothing here touches storage or the network — persistence shows up
//! as [`AuthEffect`] values for the manager to apply, which keeps the
//! transition table testable without mocking I/O.

use serde::{Deserialize, Serialize};

/// Session phase of the auth state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthPhase {
    Unauthenticated,
    Authenticating,
    Authenticated,
    Error,
}

/// Auth state exposed to UI subscribers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthState {
    pub phase: AuthPhase,
    /// In-session cached copy of the stored token.
    pub token: Option<String>,
    /// User-facing failure message; empty when there is none.
    pub error_message: String,
    /// True until the first launch has been acknowledged.
    pub is_first_launch: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            phase: AuthPhase::Unauthenticated,
            token: None,
            error_message: String::new(),
            is_first_launch: true,
        }
    }
}

impl AuthState {
    pub fn is_logged_in(&self) -> bool {
        self.phase == AuthPhase::Authenticated
    }
}

/// Events driving the state machine.
#[derive(Debug, Clone)]
pub enum AuthAction {
    /// App start: result of reading the persisted token.
    Restore(Option<String>),
    /// Login-or-signup submitted with credentials.
    Submit,
    /// Backend accepted the credentials and issued a token.
    Succeeded { token: String },
    /// Backend rejected the attempt (or transport failed).
    Failed { message: String },
    /// Explicit logout.
    Logout,
    /// The first-launch experience has been shown.
    MarkLaunched,
}

/// Side effects the manager must apply after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEffect {
    PersistToken(String),
    ClearToken,
}

/// Apply one action to the current state.
///
/// Returns the next state plus the token-store effects it implies.
/// A failed attempt leaves the stored token untouched; success clears
/// any previous error message.
pub fn reduce(state: &AuthState, action: AuthAction) -> (AuthState, Vec<AuthEffect>) {
    let mut next = state.clone();
    let mut effects = Vec::new();

    match action {
        AuthAction::Restore(Some(token)) => {
            next.phase = AuthPhase::Authenticated;
            next.token = Some(token);
        }
        AuthAction::Restore(None) => {
            next.phase = AuthPhase::Unauthenticated;
            next.token = None;
        }
        AuthAction::Submit => {
            next.phase = AuthPhase::Authenticating;
        }
        AuthAction::Succeeded { token } => {
            next.phase = AuthPhase::Authenticated;
            next.token = Some(token.clone());
            next.error_message.clear();
            effects.push(AuthEffect::PersistToken(token));
        }
        AuthAction::Failed { message } => {
            next.phase = AuthPhase::Error;
            next.error_message = message;
        }
        AuthAction::Logout => {
            next.phase = AuthPhase::Unauthenticated;
            next.token = None;
            effects.push(AuthEffect::ClearToken);
        }
        AuthAction::MarkLaunched => {
            next.is_first_launch = false;
        }
    }

    (next, effects)
}
