//! Engine configuration.
//!
//! `EngineConfig` collects the tunable numbers of a game: setup sizes, the
//! bot loop's step limit, and the thresholds used by the bot's heuristics.
//! The defaults reproduce the live game's rules.

use serde::{Deserialize, Serialize};

/// Engine configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum bot actions resolved per human action.
    /// Guarantees the turn loop terminates.
    pub max_bot_steps: u32,

    /// Health each player starts with.
    pub starting_health: i64,

    /// Cards dealt to each player at setup.
    pub hand_size: usize,

    /// The bot goes face when the human's health is at or below this.
    pub finishing_blow_health: i64,

    /// A bot creature below this percentage of its max health counts as hurt.
    pub triage_health_percent: i64,

    /// Minimum growth stat for the bot to bother growing a hurt creature.
    pub triage_min_growth: i64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_bot_steps: 20,
            starting_health: 100,
            hand_size: 8,
            finishing_blow_health: 20,
            triage_health_percent: 40,
            triage_min_growth: 4,
        }
    }
}

impl EngineConfig {
    /// Create a new config with a custom bot step limit.
    pub fn with_max_bot_steps(mut self, steps: u32) -> Self {
        self.max_bot_steps = steps;
        self
    }

    /// Create a new config with custom starting health.
    pub fn with_starting_health(mut self, health: i64) -> Self {
        self.starting_health = health;
        self
    }

    /// Create a new config with a custom hand size.
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    /// Create a new config with a custom finishing-blow threshold.
    pub fn with_finishing_blow_health(mut self, health: i64) -> Self {
        self.finishing_blow_health = health;
        self
    }

    /// Create a new config with custom triage thresholds.
    pub fn with_triage(mut self, health_percent: i64, min_growth: i64) -> Self {
        self.triage_health_percent = health_percent;
        self.triage_min_growth = min_growth;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.max_bot_steps, 20);
        assert_eq!(config.starting_health, 100);
        assert_eq!(config.hand_size, 8);
        assert_eq!(config.finishing_blow_health, 20);
        assert_eq!(config.triage_health_percent, 40);
        assert_eq!(config.triage_min_growth, 4);
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::default()
            .with_max_bot_steps(5)
            .with_hand_size(3)
            .with_triage(50, 2);

        assert_eq!(config.max_bot_steps, 5);
        assert_eq!(config.hand_size, 3);
        assert_eq!(config.triage_health_percent, 50);
        assert_eq!(config.triage_min_growth, 2);
    }

    #[test]
    fn test_serialization() {
        let config = EngineConfig::default().with_starting_health(60);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
