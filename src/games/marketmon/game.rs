//! Marketmon engine handle.

use std::borrow::Borrow;
use std::sync::Arc;

use crate::bot::{BotDecision, BotPolicy};
use crate::cards::CardCatalog;
use crate::core::{Action, EngineConfig, EngineError, GameState, Role};
use crate::rules::{self, RulesEngine};
use crate::turn::{run_turn, GameUpdate};

/// A Marketmon game server: catalog, configuration and bot.
///
/// The catalog is usually shared behind an `Arc` so that many games can
/// run against one loaded dataset. Anything that borrows as a
/// `CardCatalog` works, including a plain reference.
///
/// ```
/// use marketmon::cards::{CardCatalog, CardDefinition, Sector};
/// use marketmon::core::{EngineConfig, Role};
/// use marketmon::games::marketmon::Marketmon;
///
/// let catalog = CardCatalog::from_definitions([
///     CardDefinition::new("AAPL", Sector::Technology).with_health(30).with_attack(9),
///     CardDefinition::new("XOM", Sector::Energy).with_health(40).with_attack(12),
/// ])
/// .unwrap();
///
/// let engine = Marketmon::new(&catalog).with_config(EngineConfig::default().with_hand_size(1));
/// let state = engine.new_game(7).unwrap();
/// assert_eq!(state.whos_turn, Role::You);
/// assert_eq!(state.you.hand.len(), 1);
/// ```
#[derive(Debug)]
pub struct Marketmon<C = Arc<CardCatalog>> {
    catalog: C,
    config: EngineConfig,
    bot: BotPolicy,
}

impl<C: Borrow<CardCatalog>> Marketmon<C> {
    /// Create an engine with the default configuration and bot.
    pub fn new(catalog: C) -> Self {
        let config = EngineConfig::default();
        let bot = BotPolicy::from_config(&config);
        Self {
            catalog,
            config,
            bot,
        }
    }

    /// Replace the configuration. The bot is rebuilt with its thresholds.
    #[must_use]
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.bot = BotPolicy::from_config(&config);
        self.config = config;
        self
    }

    /// Replace the bot.
    #[must_use]
    pub fn with_bot(mut self, bot: BotPolicy) -> Self {
        self.bot = bot;
        self
    }

    /// Get the bot policy.
    pub fn bot(&self) -> &BotPolicy {
        &self.bot
    }

    /// Apply a human action and play out the bot's reply.
    pub fn update(&self, state: &GameState, action: &Action) -> Result<GameUpdate, EngineError> {
        run_turn(self, &self.bot, state, action)
    }

    /// What the bot would do in this state, and why.
    pub fn bot_decision(&self, state: &GameState) -> Result<Option<BotDecision>, EngineError> {
        self.bot.decide(state, self.catalog.borrow())
    }

    /// What the bot would do in this state.
    pub fn bot_action(&self, state: &GameState) -> Result<Option<Action>, EngineError> {
        self.bot.select(state, self.catalog.borrow())
    }
}

impl<C: Borrow<CardCatalog>> RulesEngine for Marketmon<C> {
    fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn catalog(&self) -> &CardCatalog {
        self.catalog.borrow()
    }

    fn legal_actions(&self, state: &GameState, role: Role) -> Vec<Action> {
        rules::legal_actions(state, self.catalog.borrow(), role)
    }

    fn apply_action(&self, state: &GameState, action: &Action) -> Result<GameState, EngineError> {
        rules::compute_new_state(state, action, self.catalog.borrow())
    }

    fn has_legal_action(&self, state: &GameState, role: Role) -> bool {
        rules::has_legal_action(state, self.catalog.borrow(), role)
    }
}
