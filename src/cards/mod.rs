//! Card system: sectors, definitions, creatures in play, and the catalog.
//!
//! ## Key Types
//!
//! - `Ticker`: Identifier for card definitions and creatures in play
//! - `Sector`: Card category, drives the effectiveness cycle
//! - `CardDefinition`: Static combat stats
//! - `FieldCreature`: A card in play with its current health
//! - `CardCatalog`: Ticker lookup, loaded once and shared read-only

pub mod catalog;
pub mod definition;
pub mod instance;
pub mod sector;

pub use catalog::CardCatalog;
pub use definition::{CardDefinition, Ticker};
pub use instance::FieldCreature;
pub use sector::{is_super_effective, Sector, UnknownSector, SUPER_EFFECTIVE_MULTIPLIER};
