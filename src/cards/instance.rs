//! Creatures in play.

use serde::{Deserialize, Serialize};

use super::definition::Ticker;

/// A card on the field.
///
/// Only current health is tracked here; every other stat comes from the
/// card's `CardDefinition`. Health stays within `1..=definition.health`:
/// a creature that drops to 0 or below is removed from the field.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldCreature {
    /// Ticker of the card this creature was played from.
    pub ticker: Ticker,

    /// Current health.
    pub health: i64,
}

impl FieldCreature {
    #[must_use]
    pub fn new(ticker: impl Into<Ticker>, health: i64) -> Self {
        Self {
            ticker: ticker.into(),
            health,
        }
    }

    /// Check if this creature should leave the field.
    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.health <= 0
    }
}
