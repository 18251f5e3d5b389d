//! Action representation.
//!
//! An action is one of four kinds, each with its own payload:
//! - `Play`: put a hand card onto the field
//! - `Grow`: heal one of your creatures (overflow heals you)
//! - `Attack`: creature vs. creature, both sides take damage
//! - `AttackFace`: hit the other player directly, only when their field is empty
//!
//! The wire format is adjacently tagged, matching what the serving layer
//! sends: `{"actionType": "attack", "data": {"attacker": "AAPL", "opponent": "XOM"}}`.

use serde::{Deserialize, Serialize};

use crate::cards::Ticker;

/// A complete game action.
///
/// ## Example
///
/// ```
/// use marketmon::core::Action;
///
/// let play = Action::play("AAPL");
/// let hit = Action::attack("AAPL", "XOM");
///
/// assert_eq!(play.actor().as_str(), "AAPL");
/// assert_eq!(hit.target().map(|t| t.as_str()), Some("XOM"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "actionType", content = "data")]
pub enum Action {
    /// Play a card from hand.
    #[serde(rename = "play")]
    Play(Ticker),

    /// Grow a creature in play.
    #[serde(rename = "grow")]
    Grow(Ticker),

    /// Attack an enemy creature.
    #[serde(rename = "attack")]
    Attack {
        attacker: Ticker,
        /// The defending creature.
        #[serde(rename = "opponent")]
        defender: Ticker,
    },

    /// Attack the other player directly.
    #[serde(rename = "attack-face")]
    AttackFace(Ticker),
}

/// Action kind without payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionKind {
    Play,
    Grow,
    Attack,
    AttackFace,
}

impl Action {
    #[must_use]
    pub fn play(ticker: impl Into<Ticker>) -> Self {
        Action::Play(ticker.into())
    }

    #[must_use]
    pub fn grow(ticker: impl Into<Ticker>) -> Self {
        Action::Grow(ticker.into())
    }

    #[must_use]
    pub fn attack(attacker: impl Into<Ticker>, defender: impl Into<Ticker>) -> Self {
        Action::Attack {
            attacker: attacker.into(),
            defender: defender.into(),
        }
    }

    #[must_use]
    pub fn attack_face(attacker: impl Into<Ticker>) -> Self {
        Action::AttackFace(attacker.into())
    }

    /// Get the kind of this action.
    #[must_use]
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Play(_) => ActionKind::Play,
            Action::Grow(_) => ActionKind::Grow,
            Action::Attack { .. } => ActionKind::Attack,
            Action::AttackFace(_) => ActionKind::AttackFace,
        }
    }

    /// The acting card: the card played, the creature grown, or the attacker.
    #[must_use]
    pub fn actor(&self) -> &Ticker {
        match self {
            Action::Play(ticker) | Action::Grow(ticker) | Action::AttackFace(ticker) => ticker,
            Action::Attack { attacker, .. } => attacker,
        }
    }

    /// The defending creature, for creature attacks.
    #[must_use]
    pub fn target(&self) -> Option<&Ticker> {
        match self {
            Action::Attack { defender, .. } => Some(defender),
            _ => None,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Play(ticker) => write!(f, "play {}", ticker),
            Action::Grow(ticker) => write!(f, "grow {}", ticker),
            Action::Attack { attacker, defender } => write!(f, "{} attacks {}", attacker, defender),
            Action::AttackFace(ticker) => write!(f, "{} attacks face", ticker),
        }
    }
}
