//! Market sectors and the effectiveness cycle.
//!
//! Every sector counters exactly one other sector. Following the cycle from
//! any sector visits all eleven and returns to the start:
//!
//! Technology → Communication Services → Consumer Defensive → Healthcare →
//! Industrials → Energy → Utilities → Real Estate → Financial Services →
//! Consumer Cyclical → Basic Materials → Technology
//!
//! The table is a `match`, so it is fixed at compile time.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Damage multiplier for a super-effective strike.
pub const SUPER_EFFECTIVE_MULTIPLIER: i64 = 2;

/// Thematic card category. Determines type effectiveness.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sector {
    #[serde(rename = "Technology")]
    Technology,
    #[serde(rename = "Communication Services")]
    CommunicationServices,
    #[serde(rename = "Consumer Defensive")]
    ConsumerDefensive,
    #[serde(rename = "Healthcare")]
    Healthcare,
    #[serde(rename = "Industrials")]
    Industrials,
    #[serde(rename = "Energy")]
    Energy,
    #[serde(rename = "Utilities")]
    Utilities,
    #[serde(rename = "Real Estate")]
    RealEstate,
    #[serde(rename = "Financial Services")]
    FinancialServices,
    #[serde(rename = "Consumer Cyclical")]
    ConsumerCyclical,
    #[serde(rename = "Basic Materials")]
    BasicMaterials,
}

impl Sector {
    /// All sectors, in cycle order.
    pub const ALL: [Sector; 11] = [
        Sector::Technology,
        Sector::CommunicationServices,
        Sector::ConsumerDefensive,
        Sector::Healthcare,
        Sector::Industrials,
        Sector::Energy,
        Sector::Utilities,
        Sector::RealEstate,
        Sector::FinancialServices,
        Sector::ConsumerCyclical,
        Sector::BasicMaterials,
    ];

    /// The sector this one is super-effective against.
    #[must_use]
    pub const fn counters(self) -> Sector {
        match self {
            Sector::Technology => Sector::CommunicationServices,
            Sector::CommunicationServices => Sector::ConsumerDefensive,
            Sector::ConsumerDefensive => Sector::Healthcare,
            Sector::Healthcare => Sector::Industrials,
            Sector::Industrials => Sector::Energy,
            Sector::Energy => Sector::Utilities,
            Sector::Utilities => Sector::RealEstate,
            Sector::RealEstate => Sector::FinancialServices,
            Sector::FinancialServices => Sector::ConsumerCyclical,
            Sector::ConsumerCyclical => Sector::BasicMaterials,
            Sector::BasicMaterials => Sector::Technology,
        }
    }

    /// Check if an attacker from this sector is super-effective against `defender`.
    #[must_use]
    pub fn is_super_effective(self, defender: Sector) -> bool {
        self.counters() == defender
    }

    /// Display name, as used by the card dataset.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Sector::Technology => "Technology",
            Sector::CommunicationServices => "Communication Services",
            Sector::ConsumerDefensive => "Consumer Defensive",
            Sector::Healthcare => "Healthcare",
            Sector::Industrials => "Industrials",
            Sector::Energy => "Energy",
            Sector::Utilities => "Utilities",
            Sector::RealEstate => "Real Estate",
            Sector::FinancialServices => "Financial Services",
            Sector::ConsumerCyclical => "Consumer Cyclical",
            Sector::BasicMaterials => "Basic Materials",
        }
    }
}

/// Check if `attacker` is super-effective against `defender`.
#[must_use]
pub fn is_super_effective(attacker: Sector, defender: Sector) -> bool {
    attacker.is_super_effective(defender)
}

impl std::fmt::Display for Sector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown sector name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown sector: {0}")]
pub struct UnknownSector(pub String);

impl FromStr for Sector {
    type Err = UnknownSector;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sector::ALL
            .into_iter()
            .find(|sector| sector.name() == s)
            .ok_or_else(|| UnknownSector(s.to_string()))
    }
}
