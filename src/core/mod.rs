//! Core engine types: roles, players, state, actions, configuration, errors, RNG.
//!
//! Everything here is plain data. Rules live in `rules`, the bot in `bot`,
//! and the turn loop in `turn`.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionKind};
pub use config::EngineConfig;
pub use error::EngineError;
pub use player::{PlayerState, Role};
pub use rng::GameRng;
pub use state::GameState;
