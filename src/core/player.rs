//! Player roles and per-player state.
//!
//! ## Role
//!
//! The game always has exactly two seats: the human (`You`) and the bot
//! (`Opponent`). Roles are fixed for the lifetime of a game.
//!
//! ## PlayerState
//!
//! Hand, field and health pool for one seat. Collections are `im` vectors so
//! cloning a player (and therefore a whole `GameState`) is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{FieldCreature, Ticker};

/// One of the two fixed seats at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The human player.
    You,
    /// The bot.
    Opponent,
}

impl Role {
    /// Both roles, human first.
    pub const BOTH: [Role; 2] = [Role::You, Role::Opponent];

    /// The other seat.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Role::You => Role::Opponent,
            Role::Opponent => Role::You,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::You => write!(f, "you"),
            Role::Opponent => write!(f, "opponent"),
        }
    }
}

/// State of one player: hand, creatures in play and health.
///
/// `health` may go negative after a big hit; anything `<= 0` is a loss.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerState {
    /// Tickers in hand. Duplicates allowed, order kept for display.
    pub hand: Vector<Ticker>,

    /// Creatures on the field.
    pub in_play: Vector<FieldCreature>,

    /// Player health pool.
    pub health: i64,
}

impl PlayerState {
    /// Create a player with the given hand and health and an empty field.
    #[must_use]
    pub fn new(hand: impl IntoIterator<Item = Ticker>, health: i64) -> Self {
        Self {
            hand: hand.into_iter().collect(),
            in_play: Vector::new(),
            health,
        }
    }

    /// Put a creature on the field (builder pattern, mostly for tests and setup).
    #[must_use]
    pub fn with_creature(mut self, creature: FieldCreature) -> Self {
        self.in_play.push_back(creature);
        self
    }

    /// Check if this player has been knocked out.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }

    /// Check if the field is empty.
    #[must_use]
    pub fn field_is_empty(&self) -> bool {
        self.in_play.is_empty()
    }

    /// Position of the first hand card with this ticker.
    #[must_use]
    pub fn hand_index(&self, ticker: &Ticker) -> Option<usize> {
        self.hand.iter().position(|t| t == ticker)
    }

    /// Position of the first creature in play with this ticker.
    #[must_use]
    pub fn creature_index(&self, ticker: &Ticker) -> Option<usize> {
        self.in_play.iter().position(|c| &c.ticker == ticker)
    }

    /// First creature in play with this ticker.
    #[must_use]
    pub fn creature(&self, ticker: &Ticker) -> Option<&FieldCreature> {
        self.in_play.iter().find(|c| &c.ticker == ticker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_other() {
        assert_eq!(Role::You.other(), Role::Opponent);
        assert_eq!(Role::Opponent.other(), Role::You);
        assert_eq!(Role::You.other().other(), Role::You);
    }

    #[test]
    fn test_role_display() {
        assert_eq!(format!("{}", Role::You), "you");
        assert_eq!(format!("{}", Role::Opponent), "opponent");
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::You).unwrap(), "\"you\"");
        let role: Role = serde_json::from_str("\"opponent\"").unwrap();
        assert_eq!(role, Role::Opponent);
    }

    #[test]
    fn test_player_lookup() {
        let player = PlayerState::new([Ticker::from("AAPL"), Ticker::from("MSFT")], 100)
            .with_creature(FieldCreature::new("XOM", 30))
            .with_creature(FieldCreature::new("XOM", 12));

        assert_eq!(player.hand_index(&Ticker::from("MSFT")), Some(1));
        assert_eq!(player.hand_index(&Ticker::from("XOM")), None);
        assert_eq!(player.creature_index(&Ticker::from("XOM")), Some(0));
        assert_eq!(player.creature(&Ticker::from("XOM")).map(|c| c.health), Some(30));
        assert!(!player.field_is_empty());
    }

    #[test]
    fn test_defeated_includes_negative_health() {
        assert!(PlayerState::new([], 0).is_defeated());
        assert!(PlayerState::new([], -7).is_defeated());
        assert!(!PlayerState::new([], 1).is_defeated());
    }

    #[test]
    fn test_player_wire_format() {
        let player = PlayerState::new([Ticker::from("AAPL")], 90)
            .with_creature(FieldCreature::new("MSFT", 40));
        let json = serde_json::to_value(&player).unwrap();

        assert_eq!(json["hand"][0], "AAPL");
        assert_eq!(json["inPlay"][0]["ticker"], "MSFT");
        assert_eq!(json["inPlay"][0]["health"], 40);
        assert_eq!(json["health"], 90);
    }
}
