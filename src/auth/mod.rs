//! Auth state container.
//!
//! Single source of truth for whether the app considers the user
//! authenticated. Split in two:
//! - `state`: the pure transition function `(State, Action) -> (State, Effects)`,
//!   with token-store writes expressed as effects rather than performed inline
//! - `manager`: the async orchestrator that calls the resource client,
//!   applies effects to the token store, and publishes state to UI
//!   subscribers over a watch channel

pub mod manager;
pub mod state;

pub use manager::AuthManager;
pub use state::{reduce, AuthAction, AuthEffect, AuthPhase, AuthState};
