//! The bot's decision ladder.

use crate::cards::CardCatalog;
use crate::core::{Action, EngineConfig, EngineError, GameState};

use super::context::BotContext;
use super::rules::{
    BestTrade, BotRule, Fallback, FinishingBlow, GoFace, OpeningDeploy, Reinforce, SafeKill,
    SuperEffectiveStrike, Triage,
};

/// A bot decision and the rule that made it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BotDecision {
    pub rule: &'static str,
    pub action: Action,
}

/// Ordered list of rules. The first rule to pick an action wins.
#[derive(Debug)]
pub struct BotPolicy {
    rules: Vec<Box<dyn BotRule>>,
}

impl Default for BotPolicy {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}

impl BotPolicy {
    /// The standard ladder with thresholds taken from `config`.
    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::with_rules(vec![
            Box::new(OpeningDeploy),
            Box::new(FinishingBlow {
                max_enemy_health: config.finishing_blow_health,
            }),
            Box::new(SuperEffectiveStrike),
            Box::new(SafeKill),
            Box::new(Triage {
                health_percent: config.triage_health_percent,
                min_growth: config.triage_min_growth,
            }),
            Box::new(GoFace),
            Box::new(BestTrade),
            Box::new(Reinforce),
            Box::new(Fallback),
        ])
    }

    /// A custom ladder.
    #[must_use]
    pub fn with_rules(rules: Vec<Box<dyn BotRule>>) -> Self {
        Self { rules }
    }

    /// Rule names in evaluation order.
    pub fn rule_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|rule| rule.name())
    }

    /// Decide the bot's next action.
    ///
    /// Returns `None` when the bot has no legal action. If every rule passes
    /// on a non-empty action set, nothing is chosen either; the standard
    /// ladder covers every action kind so that cannot happen with it.
    pub fn decide(
        &self,
        state: &GameState,
        catalog: &CardCatalog,
    ) -> Result<Option<BotDecision>, EngineError> {
        let actions = BotContext::legal_actions(state, catalog);
        if actions.is_empty() {
            log::debug!("Bot has no legal actions");
            return Ok(None);
        }

        let context = BotContext::build(state, catalog, &actions)?;
        let decision = self.rules.iter().find_map(|rule| {
            rule.select(&context).map(|action| BotDecision {
                rule: rule.name(),
                action,
            })
        });

        match &decision {
            Some(d) => log::debug!("Bot chose {} via {}", d.action, d.rule),
            None => log::warn!("No bot rule matched {} legal actions", actions.len()),
        }
        Ok(decision)
    }

    /// Select the bot's next action, if any.
    pub fn select(
        &self,
        state: &GameState,
        catalog: &CardCatalog,
    ) -> Result<Option<Action>, EngineError> {
        Ok(self.decide(state, catalog)?.map(|d| d.action))
    }
}

/// Select the bot's next action with the default ladder.
pub fn select_bot_action(
    state: &GameState,
    catalog: &CardCatalog,
) -> Result<Option<Action>, EngineError> {
    BotPolicy::default().select(state, catalog)
}
