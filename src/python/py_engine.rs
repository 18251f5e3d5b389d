//! Engine bindings for Python.

use std::sync::Arc;

use pyo3::prelude::*;
use pyo3::types::PyBytes;

use crate::cards::CardCatalog;
use crate::core::{Action, GameState};
use crate::games::marketmon::Marketmon;
use crate::rules::RulesEngine;

use super::py_core::{from_json, parse_role, to_json};

/// Python wrapper for the Marketmon engine.
///
/// One engine holds one loaded catalog and can serve any number of games.
/// Every method is stateless: the game state is passed in and returned as
/// JSON.
#[pyclass(name = "Engine", frozen)]
pub struct PyEngine {
    engine: Marketmon,
}

#[pymethods]
impl PyEngine {
    /// Create an engine from the card dataset.
    ///
    /// # Arguments
    /// - catalog_json: JSON array of card objects
    #[new]
    fn new(catalog_json: &str) -> PyResult<Self> {
        let catalog = CardCatalog::from_json(catalog_json)?;
        Ok(Self {
            engine: Marketmon::new(Arc::new(catalog)),
        })
    }

    /// Deal a new game. Returns the state as JSON.
    #[pyo3(signature = (seed = 42))]
    fn new_game(&self, seed: u64) -> PyResult<String> {
        to_json(&self.engine.new_game(seed)?)
    }

    /// Legal actions for a player, as a JSON array.
    fn valid_actions(&self, state_json: &str, player: &Bound<'_, PyAny>) -> PyResult<String> {
        let state: GameState = from_json(state_json)?;
        let role = parse_role(player)?;
        to_json(&self.engine.legal_actions(&state, role))
    }

    /// The bot's next action as JSON, or None if it has no move.
    fn bot_action(&self, state_json: &str) -> PyResult<Option<String>> {
        let state: GameState = from_json(state_json)?;
        self.engine
            .bot_action(&state)?
            .map(|action| to_json(&action))
            .transpose()
    }

    /// Apply a human action and the bot's reply. Returns the update as JSON.
    fn update(&self, py: Python<'_>, state_json: &str, action_json: &str) -> PyResult<String> {
        let state: GameState = from_json(state_json)?;
        let action: Action = from_json(action_json)?;
        let update = py.allow_threads(|| self.engine.update(&state, &action))?;
        to_json(&update)
    }

    /// Encode a JSON state as a compact binary snapshot.
    fn encode_state<'py>(&self, py: Python<'py>, state_json: &str) -> PyResult<Bound<'py, PyBytes>> {
        let state: GameState = from_json(state_json)?;
        Ok(PyBytes::new_bound(py, &state.encode()?))
    }

    /// Decode a binary snapshot back to a JSON state.
    fn decode_state(&self, snapshot: &[u8]) -> PyResult<String> {
        to_json(&GameState::decode(snapshot)?)
    }

    /// Number of cards in the catalog.
    #[getter]
    fn card_count(&self) -> usize {
        self.engine.catalog().len()
    }

    fn __repr__(&self) -> String {
        format!("Engine(cards={})", self.engine.catalog().len())
    }
}
