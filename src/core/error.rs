//! Engine error type.
//!
//! Errors cover caller mistakes only: stale or malformed actions, bad card
//! data, undecodable snapshots. A bot with no move or a turn loop hitting its
//! step limit are normal outcomes and are reported through `TurnOutcome`.

use thiserror::Error;

use super::action::Action;
use super::player::Role;
use crate::cards::Ticker;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Unknown ticker: {0}")]
    UnknownTicker(Ticker),

    #[error("{ticker} is not in the hand of {role}")]
    CardNotInHand { role: Role, ticker: Ticker },

    #[error("{ticker} is not on the field of {role}")]
    CreatureNotInPlay { role: Role, ticker: Ticker },

    #[error("Illegal action: {action:?}")]
    IllegalAction { action: Action },

    #[error("Invalid card {ticker}: {reason}")]
    InvalidCard { ticker: Ticker, reason: String },

    #[error("Catalog too small: need {needed} cards, have {available}")]
    CatalogTooSmall { needed: usize, available: usize },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),
}

impl EngineError {
    /// Check if the error came from an action that does not fit the state.
    #[must_use]
    pub fn is_illegal_input(&self) -> bool {
        matches!(
            self,
            EngineError::UnknownTicker(_)
                | EngineError::CardNotInHand { .. }
                | EngineError::CreatureNotInPlay { .. }
                | EngineError::IllegalAction { .. }
        )
    }
}
