//! Rules engine trait.
//!
//! The turn orchestrator drives a game through this trait:
//! - What actions are legal
//! - How an action changes the state
//! - Who has won
//!
//! ## Implementation Notes
//!
//! - `legal_actions`: Return empty vec if the player can't act
//! - `apply_action`: Must be pure and deterministic; never mutate the input
//! - `winner`: Return None while the game continues

use crate::cards::CardCatalog;
use crate::core::{Action, EngineConfig, EngineError, GameState, Role};

pub trait RulesEngine {
    /// Get the engine configuration.
    fn config(&self) -> &EngineConfig;

    /// Get the card catalog.
    fn catalog(&self) -> &CardCatalog;

    /// Enumerate all legal actions for a player.
    fn legal_actions(&self, state: &GameState, role: Role) -> Vec<Action>;

    /// Apply an action for the player whose turn it is, producing the next state.
    fn apply_action(&self, state: &GameState, action: &Action) -> Result<GameState, EngineError>;

    // === Convenience Methods ===

    /// Check if a player can act at all.
    fn has_legal_action(&self, state: &GameState, role: Role) -> bool {
        !self.legal_actions(state, role).is_empty()
    }

    /// Check if an action is legal for a player.
    fn is_legal(&self, state: &GameState, role: Role, action: &Action) -> bool {
        self.legal_actions(state, role).contains(action)
    }

    /// Determine the winner, if any.
    ///
    /// A declared winner takes precedence. Otherwise a player at or below
    /// zero health has lost; the opponent is checked first, matching the
    /// order in which the turn loop checks after a human action.
    fn winner(&self, state: &GameState) -> Option<Role> {
        if state.winner.is_some() {
            return state.winner;
        }
        if state.opponent.is_defeated() {
            Some(Role::You)
        } else if state.you.is_defeated() {
            Some(Role::Opponent)
        } else {
            None
        }
    }
}
