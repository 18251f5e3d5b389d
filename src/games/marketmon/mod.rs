//! Marketmon: stock tickers as battling creatures.
//!
//! - Each player starts with 100 health and eight cards dealt from the catalog
//! - Playing a card costs half its health, rounded up
//! - On your turn: play a card, grow a creature, or attack
//! - Creatures can hit the enemy player only once the enemy field is empty
//! - First player to 0 health loses
//!
//! The human always sits in the `You` seat and the bot in `Opponent`.

mod game;
mod setup;

pub use game::Marketmon;
