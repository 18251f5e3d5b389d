//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable combat statistics of a market
//! creature. A creature's current health on the field is stored separately
//! in `FieldCreature`.

use serde::{Deserialize, Serialize};

use super::sector::Sector;

/// Unique identifier for a card definition (a stock ticker such as `"AAPL"`).
///
/// Also identifies a creature in play: a creature carries the ticker of the
/// card it was played from.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ticker(String);

impl Ticker {
    /// Create a new ticker.
    #[must_use]
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    /// Get the ticker symbol.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Ticker {
    fn from(symbol: &str) -> Self {
        Self::new(symbol)
    }
}

impl From<String> for Ticker {
    fn from(symbol: String) -> Self {
        Self(symbol)
    }
}

impl std::fmt::Display for Ticker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use marketmon::cards::{CardDefinition, Sector};
///
/// let card = CardDefinition::new("AAPL", Sector::Technology)
///     .with_health(80)
///     .with_attack(24)
///     .with_defense(9)
///     .with_growth(7);
///
/// assert_eq!(card.play_cost(), 40);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDefinition {
    /// Unique identifier.
    pub ticker: Ticker,

    /// Company name (display only). The dataset may leave it null.
    #[serde(default)]
    pub name: Option<String>,

    /// Creature name (display only). The dataset may leave it null.
    #[serde(default)]
    pub creature_name: Option<String>,

    /// Sector, used for type effectiveness.
    pub sector: Sector,

    /// Base and maximum health. Always positive.
    pub health: i64,

    /// Attack stat.
    pub attack: i64,

    /// Defense stat.
    pub defense: i64,

    /// Health regained per grow action.
    pub growth: i64,
}

impl CardDefinition {
    /// Create a definition with the given ticker and sector.
    ///
    /// Stats start at 1 health and 0 everything else; use the builders.
    #[must_use]
    pub fn new(ticker: impl Into<Ticker>, sector: Sector) -> Self {
        Self {
            ticker: ticker.into(),
            name: None,
            creature_name: None,
            sector,
            health: 1,
            attack: 0,
            defense: 0,
            growth: 0,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>, creature_name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self.creature_name = Some(creature_name.into());
        self
    }

    #[must_use]
    pub fn with_health(mut self, health: i64) -> Self {
        self.health = health;
        self
    }

    #[must_use]
    pub fn with_attack(mut self, attack: i64) -> Self {
        self.attack = attack;
        self
    }

    #[must_use]
    pub fn with_defense(mut self, defense: i64) -> Self {
        self.defense = defense;
        self
    }

    #[must_use]
    pub fn with_growth(mut self, growth: i64) -> Self {
        self.growth = growth;
        self
    }

    /// Health a player pays to put this card into play: `ceil(health / 2)`.
    #[must_use]
    pub fn play_cost(&self) -> i64 {
        (self.health + 1).div_euclid(2)
    }

    /// Largest value accepted for any stat.
    pub const MAX_STAT: i64 = 1_000_000;

    /// Check the invariants of a loaded definition.
    ///
    /// Returns a description of the first violated invariant.
    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        if self.ticker.as_str().is_empty() {
            return Err("ticker must not be empty");
        }
        if self.health <= 0 {
            return Err("health must be positive");
        }
        if self.attack < 0 {
            return Err("attack must not be negative");
        }
        if self.defense < 0 {
            return Err("defense must not be negative");
        }
        if self.growth < 0 {
            return Err("growth must not be negative");
        }
        if [self.health, self.attack, self.defense, self.growth]
            .iter()
            .any(|&stat| stat > Self::MAX_STAT)
        {
            return Err("stat exceeds MAX_STAT");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticker() {
        let ticker = Ticker::from("MSFT");
        assert_eq!(ticker.as_str(), "MSFT");
        assert_eq!(format!("{}", ticker), "MSFT");
        assert_eq!(serde_json::to_string(&ticker).unwrap(), "\"MSFT\"");
    }

    #[test]
    fn test_play_cost_rounds_up() {
        let card = |health| CardDefinition::new("X", Sector::Energy).with_health(health);

        assert_eq!(card(10).play_cost(), 5);
        assert_eq!(card(11).play_cost(), 6);
        assert_eq!(card(1).play_cost(), 1);
        assert_eq!(card(24).play_cost(), 12);
    }

    #[test]
    fn test_validate() {
        let good = CardDefinition::new("X", Sector::Energy).with_health(30).with_attack(5);
        assert!(good.validate().is_ok());

        assert!(good.clone().with_health(0).validate().is_err());
        assert!(good.clone().with_attack(-1).validate().is_err());
        assert!(good.clone().with_defense(-1).validate().is_err());
        assert!(good.clone().with_growth(-2).validate().is_err());
        assert!(CardDefinition::new("", Sector::Energy).validate().is_err());

        let max = CardDefinition::MAX_STAT;
        assert!(good.clone().with_health(max).with_attack(max).validate().is_ok());
        assert!(good.clone().with_health(max + 1).validate().is_err());
        assert!(good.clone().with_attack(i64::MAX).validate().is_err());
        assert!(good.clone().with_defense(max + 1).validate().is_err());
        assert!(good.clone().with_growth(max + 1).validate().is_err());
    }

    #[test]
    fn test_dataset_format() {
        let json = r#"{
            "name": "Exxon Mobil Corporation",
            "creatureName": "Petrolisk",
            "ticker": "XOM",
            "sector": "Energy",
            "health": 80,
            "attack": 24,
            "defense": 11,
            "growth": 3,
            "image": "creature_images/XOM.png"
        }"#;

        let card: CardDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(card.ticker, Ticker::from("XOM"));
        assert_eq!(card.creature_name.as_deref(), Some("Petrolisk"));
        assert_eq!(card.sector, Sector::Energy);
        assert_eq!(card.health, 80);
        assert_eq!(card.growth, 3);
    }

    #[test]
    fn test_null_names_are_accepted() {
        let json = r#"{"ticker": "XYZ", "name": null, "creatureName": null,
            "sector": "Energy", "health": 40, "attack": 13, "defense": 5, "growth": 5}"#;

        let card: CardDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(card.name, None);
        assert_eq!(card.creature_name, None);

        let named = card.with_name("XYZ Corp", "Zyxling");
        assert_eq!(named.name.as_deref(), Some("XYZ Corp"));
    }
}
