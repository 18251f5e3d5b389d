//! # marketmon
//!
//! Rules engine for Marketmon, a two-player card battle where stock tickers
//! fight as creatures.
//!
//! ## Design Principles
//!
//! 1. **Pure Transitions**: Every action produces a new `GameState`; earlier
//!    states stay valid snapshots. Rule resolution never draws random numbers.
//!
//! 2. **Persistent Data Structures**: O(1) cloning via `im-rs`, so the bot
//!    loop and callers can keep history for free.
//!
//! 3. **Shared Catalog**: Card definitions are loaded once and shared
//!    read-only between games.
//!
//! ## Modules
//!
//! - `core`: Roles, players, state, actions, RNG, configuration, errors
//! - `cards`: Tickers, sectors, card definitions and the catalog
//! - `rules`: Legal moves, combat arithmetic, resolution, `RulesEngine`
//! - `bot`: The rule-ladder opponent
//! - `turn`: The human-action-then-bot turn loop
//! - `games`: The `Marketmon` engine handle and new-game setup
//!
//! ## Example
//!
//! ```
//! use marketmon::{Action, CardCatalog, GameState, Marketmon, PlayerState, Role, Ticker};
//!
//! let catalog = CardCatalog::from_json(r#"[
//!     {"ticker": "AAPL", "sector": "Technology", "health": 30, "attack": 9, "defense": 2, "growth": 5},
//!     {"ticker": "T", "sector": "Communication Services", "health": 20, "attack": 6, "defense": 3, "growth": 4}
//! ]"#).unwrap();
//!
//! let engine = Marketmon::new(&catalog);
//! let state = GameState::new(
//!     PlayerState::new([Ticker::from("AAPL")], 100),
//!     PlayerState::new([Ticker::from("T")], 100),
//! );
//!
//! let update = engine.update(&state, &Action::play("AAPL")).unwrap();
//! assert_eq!(update.bot_action, Some(Action::play("T")));
//! assert_eq!(update.state.whos_turn, Role::You);
//! ```

pub mod bot;
pub mod cards;
pub mod core;
pub mod games;
pub mod rules;
pub mod turn;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionKind, EngineConfig, EngineError, GameRng, GameState, PlayerState, Role,
};

pub use crate::cards::{
    is_super_effective, CardCatalog, CardDefinition, FieldCreature, Sector, Ticker,
    SUPER_EFFECTIVE_MULTIPLIER,
};

pub use crate::rules::{compute_new_state, legal_actions, RulesEngine};

pub use crate::bot::{select_bot_action, BotPolicy, BotRule};

pub use crate::turn::{update_game_state, GameUpdate, TurnOutcome};

pub use crate::games::marketmon::Marketmon;
