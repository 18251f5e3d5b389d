//! Game implementations.
//!
//! Each game implements `RulesEngine` on top of the shared rules.

pub mod marketmon;
