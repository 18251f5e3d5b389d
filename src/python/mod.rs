//! Python bindings for the marketmon rules engine.
//!
//! The serving layer talks to the engine in JSON: states, actions and
//! updates use the same wire format as the rest of the game.
//!
//! # Quick Start
//!
//! ```python
//! import json
//! import marketmon
//!
//! engine = marketmon.Engine(open("cards.json").read())
//! state = engine.new_game(seed=42)
//!
//! actions = json.loads(engine.valid_actions(state, "you"))
//! update = json.loads(engine.update(state, json.dumps(actions[0])))
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_engine;

pub use py_core::*;
pub use py_engine::*;

/// marketmon: rules engine and bot for the Marketmon card battler.
#[pymodule]
fn marketmon(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyEngine>()?;
    m.add_class::<PyRole>()?;
    Ok(())
}
