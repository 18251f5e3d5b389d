//! Game state: both players, turn possession and the winner.
//!
//! ## Snapshots
//!
//! A `GameState` is a value. Every transition builds a new one; nothing in
//! the engine mutates a state it was handed. Player collections are `im`
//! persistent vectors, so a clone shares structure with its source and
//! costs O(1). Callers can hold on to any earlier state as a read-only
//! snapshot.
//!
//! ## Terminal states
//!
//! Once `winner` is set the game is over and the engine returns the state
//! unchanged for any further action.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use super::error::EngineError;
use super::player::{PlayerState, Role};

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// The human player.
    pub you: PlayerState,

    /// The bot.
    pub opponent: PlayerState,

    /// Who acts next.
    pub whos_turn: Role,

    /// Set once a player's health reaches 0 or below.
    #[serde(default)]
    pub winner: Option<Role>,
}

impl GameState {
    /// Create an ongoing game with the human to move.
    #[must_use]
    pub fn new(you: PlayerState, opponent: PlayerState) -> Self {
        Self {
            you,
            opponent,
            whos_turn: Role::You,
            winner: None,
        }
    }

    /// Get a player's state.
    #[must_use]
    pub fn player(&self, role: Role) -> &PlayerState {
        match role {
            Role::You => &self.you,
            Role::Opponent => &self.opponent,
        }
    }

    /// Check if the game is over.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.winner.is_some()
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn active(&self) -> &PlayerState {
        self.player(self.whos_turn)
    }

    // === Transitions ===
    //
    // These consume `self` and return the next snapshot. Cloning a state
    // before calling them is O(1).

    /// Replace one player's state.
    #[must_use]
    pub fn with_player(mut self, role: Role, player: PlayerState) -> Self {
        match role {
            Role::You => self.you = player,
            Role::Opponent => self.opponent = player,
        }
        self
    }

    /// Set who acts next.
    #[must_use]
    pub fn with_turn(mut self, role: Role) -> Self {
        self.whos_turn = role;
        self
    }

    /// Hand the turn to the other player.
    #[must_use]
    pub fn pass_turn(self) -> Self {
        let next = self.whos_turn.other();
        self.with_turn(next)
    }

    /// Declare a winner, freezing the game.
    #[must_use]
    pub fn with_winner(mut self, role: Role) -> Self {
        self.winner = Some(role);
        self
    }

    // === Snapshots ===

    /// Encode as a compact binary snapshot.
    pub fn encode(&self) -> Result<Vec<u8>, EngineError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a snapshot produced by `encode`.
    pub fn decode(bytes: &[u8]) -> Result<Self, EngineError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl Index<Role> for GameState {
    type Output = PlayerState;

    fn index(&self, role: Role) -> &Self::Output {
        self.player(role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{FieldCreature, Ticker};
    use serde_json::json;

    fn sample() -> GameState {
        GameState::new(
            PlayerState::new([Ticker::from("AAPL"), Ticker::from("MSFT")], 100)
                .with_creature(FieldCreature::new("XOM", 30)),
            PlayerState::new([Ticker::from("JPM")], 95),
        )
    }

    #[test]
    fn test_new_state() {
        let state = sample();

        assert_eq!(state.whos_turn, Role::You);
        assert!(!state.is_terminal());
        assert_eq!(state[Role::You].health, 100);
        assert_eq!(state[Role::Opponent].hand.len(), 1);
        assert_eq!(state.active().health, 100);
    }

    #[test]
    fn test_pass_turn() {
        let state = sample().pass_turn();
        assert_eq!(state.whos_turn, Role::Opponent);
        assert_eq!(state.pass_turn().whos_turn, Role::You);
    }

    #[test]
    fn test_snapshots_are_independent() {
        let before = sample();
        let mut player = before.you.clone();
        player.health -= 10;
        player.hand.pop_front();

        let after = before.clone().with_player(Role::You, player);

        assert_eq!(before.you.health, 100);
        assert_eq!(before.you.hand.len(), 2);
        assert_eq!(after.you.health, 90);
        assert_eq!(after.you.hand.len(), 1);
    }

    #[test]
    fn test_winner() {
        let state = sample().with_winner(Role::Opponent);
        assert!(state.is_terminal());
        assert_eq!(state.winner, Some(Role::Opponent));
    }

    #[test]
    fn test_wire_format() {
        let json = serde_json::to_value(sample()).unwrap();

        assert_eq!(json["whosTurn"], "you");
        assert_eq!(json["winner"], json!(null));
        assert_eq!(json["you"]["inPlay"][0]["ticker"], "XOM");
        assert_eq!(json["opponent"]["health"], 95);
    }

    #[test]
    fn test_parse_without_winner() {
        let json = r#"{
            "you": {"hand": ["AAPL"], "inPlay": [], "health": 100},
            "opponent": {"hand": [], "inPlay": [{"ticker": "XOM", "health": 12}], "health": 40},
            "whosTurn": "you"
        }"#;

        let state: GameState = serde_json::from_str(json).unwrap();
        assert_eq!(state.winner, None);
        assert_eq!(state.opponent.in_play[0].health, 12);
    }

    #[test]
    fn test_binary_snapshot() {
        let state = sample().pass_turn().with_winner(Role::You);
        let bytes = state.encode().unwrap();
        let decoded = GameState::decode(&bytes).unwrap();

        assert_eq!(decoded, state);
        assert!(GameState::decode(&[0xFF]).is_err());
    }
}
