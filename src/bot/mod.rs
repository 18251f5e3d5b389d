//! The automated opponent.
//!
//! The bot always plays the `Opponent` seat. Its policy is an ordered list
//! of named rules (`BotRule`), each a predicate plus a selector over the
//! bot's legal actions. Rules are evaluated in order and the first one that
//! picks an action decides the move, which keeps every rung of the ladder
//! testable on its own.
//!
//! ```
//! use marketmon::bot::BotPolicy;
//!
//! let policy = BotPolicy::default();
//! assert_eq!(policy.rule_names().next(), Some("opening-deploy"));
//! ```

pub mod context;
pub mod policy;
pub mod rules;

pub use context::BotContext;
pub use policy::{select_bot_action, BotDecision, BotPolicy};
pub use rules::BotRule;
