//! Turn orchestration: one human action, then the bot until the human can move.

pub mod orchestrator;
pub mod update;

pub use orchestrator::{run_turn, update_game_state};
pub use update::{GameUpdate, TurnOutcome};
