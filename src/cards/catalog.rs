//! Card catalog for definition lookup.
//!
//! The `CardCatalog` stores every card definition available to a game and
//! resolves tickers to combat statistics. It is read-only once built and is
//! meant to be shared between games behind an `Arc`.

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, Ticker};
use crate::core::EngineError;

/// Catalog of card definitions keyed by ticker.
///
/// ## Example
///
/// ```
/// use marketmon::cards::{CardCatalog, CardDefinition, Sector, Ticker};
///
/// let catalog = CardCatalog::from_definitions([
///     CardDefinition::new("AAPL", Sector::Technology).with_health(80).with_attack(24),
/// ])
/// .unwrap();
///
/// let apple = catalog.get(&Ticker::from("AAPL")).unwrap();
/// assert_eq!(apple.attack, 24);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<Ticker, CardDefinition>,
    /// Load order, for deterministic iteration.
    order: Vec<Ticker>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from definitions, validating each one.
    pub fn from_definitions(
        cards: impl IntoIterator<Item = CardDefinition>,
    ) -> Result<Self, EngineError> {
        let mut catalog = Self::new();
        for card in cards {
            catalog.register(card)?;
        }
        Ok(catalog)
    }

    /// Load the card dataset: a JSON array of card objects.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let cards: Vec<CardDefinition> = serde_json::from_str(json)?;
        let catalog = Self::from_definitions(cards)?;
        log::debug!("Loaded card catalog with {} cards", catalog.len());
        Ok(catalog)
    }

    /// Register a card definition.
    ///
    /// Fails if the definition is invalid or its ticker is already registered.
    pub fn register(&mut self, card: CardDefinition) -> Result<(), EngineError> {
        if let Err(reason) = card.validate() {
            return Err(EngineError::InvalidCard {
                ticker: card.ticker,
                reason: reason.to_string(),
            });
        }
        if self.cards.contains_key(&card.ticker) {
            return Err(EngineError::InvalidCard {
                ticker: card.ticker,
                reason: "duplicate ticker".to_string(),
            });
        }
        self.order.push(card.ticker.clone());
        self.cards.insert(card.ticker.clone(), card);
        Ok(())
    }

    /// Get a card definition by ticker.
    #[must_use]
    pub fn get(&self, ticker: &Ticker) -> Option<&CardDefinition> {
        self.cards.get(ticker)
    }

    /// Get a card definition by ticker, failing with `UnknownTicker`.
    pub fn require(&self, ticker: &Ticker) -> Result<&CardDefinition, EngineError> {
        self.get(ticker)
            .ok_or_else(|| EngineError::UnknownTicker(ticker.clone()))
    }

    /// Check if a ticker is registered.
    #[must_use]
    pub fn contains(&self, ticker: &Ticker) -> bool {
        self.cards.contains_key(ticker)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions in load order.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.order.iter().filter_map(|ticker| self.cards.get(ticker))
    }

    /// Tickers in load order.
    #[must_use]
    pub fn tickers(&self) -> &[Ticker] {
        &self.order
    }
}
