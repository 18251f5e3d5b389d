//! Combat arithmetic shared by the resolver and the bot.
//!
//! - Strike: `max(attack - defense, 1)`, doubled if super-effective
//! - Counter: `max(defender.attack - attacker.defense, 1)`, never boosted
//! - Face hit: the attacker's raw attack
//! - Grow: heal up to the cap, overflow goes to the owner

use crate::cards::{CardDefinition, SUPER_EFFECTIVE_MULTIPLIER};

/// Damage exchanged by one creature-vs-creature attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Exchange {
    /// Damage dealt to the defender.
    pub damage: i64,
    /// Damage dealt back to the attacker.
    pub counter: i64,
    /// Whether the attacker's sector counters the defender's.
    pub super_effective: bool,
}

impl Exchange {
    /// Compute the exchange between two card definitions.
    #[must_use]
    pub fn between(attacker: &CardDefinition, defender: &CardDefinition) -> Self {
        let super_effective = attacker.sector.is_super_effective(defender.sector);
        let base = (attacker.attack - defender.defense).max(1);
        let damage = if super_effective {
            base * SUPER_EFFECTIVE_MULTIPLIER
        } else {
            base
        };

        Self {
            damage,
            counter: (defender.attack - attacker.defense).max(1),
            super_effective,
        }
    }

    /// Check if `damage / counter > other.damage / other.counter`.
    ///
    /// Compared by cross-multiplication in `i128`; both counters are at least 1.
    #[must_use]
    pub fn better_ratio_than(&self, other: &Exchange) -> bool {
        i128::from(self.damage) * i128::from(other.counter)
            > i128::from(other.damage) * i128::from(self.counter)
    }
}

/// Damage a face attack deals to the other player.
#[must_use]
pub fn face_damage(attacker: &CardDefinition) -> i64 {
    attacker.attack
}

/// Result of growing a creature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Growth {
    /// New creature health, never above base health.
    pub health: i64,
    /// Health refunded to the owning player.
    pub overflow: i64,
}

impl Growth {
    /// Grow a creature currently at `current` health.
    #[must_use]
    pub fn apply(current: i64, card: &CardDefinition) -> Self {
        let grown = current + card.growth;
        Self {
            health: grown.min(card.health),
            overflow: (grown - card.health).max(0),
        }
    }
}
