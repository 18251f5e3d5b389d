//! New-game setup.

use std::borrow::Borrow;

use im::Vector;

use crate::cards::{CardCatalog, Ticker};
use crate::core::{EngineError, GameRng, GameState, PlayerState, Role};
use crate::rules::RulesEngine;

use super::Marketmon;

impl<C: Borrow<CardCatalog>> Marketmon<C> {
    /// Deal a new game.
    ///
    /// Each player gets `hand_size` distinct cards from the catalog, drawn
    /// from their own seeded stream, and `starting_health` health. The
    /// human moves first.
    pub fn new_game(&self, seed: u64) -> Result<GameState, EngineError> {
        let catalog = self.catalog();
        let config = self.config();
        let hand_size = config.hand_size;
        if catalog.len() < hand_size {
            return Err(EngineError::CatalogTooSmall {
                needed: hand_size,
                available: catalog.len(),
            });
        }

        let rng = GameRng::new(seed);
        let deal = |role: Role| {
            let mut stream = rng.for_context(&role.to_string());
            let hand: Vector<Ticker> = stream
                .sample_indices(catalog.len(), hand_size)
                .into_iter()
                .map(|index| catalog.tickers()[index].clone())
                .collect();
            PlayerState::new(hand, config.starting_health)
        };

        let state = GameState::new(deal(Role::You), deal(Role::Opponent));
        log::debug!("Dealt new game with seed {}", seed);
        Ok(state)
    }
}
