//! Game rules: legal moves, combat arithmetic and action resolution.
//!
//! The free functions here are the rules themselves. `RulesEngine` is the
//! seam the turn orchestrator drives; `games::marketmon::Marketmon`
//! implements it on top of these functions.

pub mod combat;
pub mod engine;
pub mod legal;
pub mod resolver;

pub use combat::{face_damage, Exchange, Growth};
pub use engine::RulesEngine;
pub use legal::{has_legal_action, legal_actions};
pub use resolver::compute_new_state;
