//! The bot's decision rules.
//!
//! Each rule looks at a `BotContext` and either picks an action or passes.
//! `BotPolicy` evaluates them in a fixed order and takes the first pick.
//!
//! | # | Rule | Picks |
//! |---|------|-------|
//! | 1 | `OpeningDeploy` | field empty: highest-attack affordable card |
//! | 2 | `FinishingBlow` | human at low health: highest-attack face hit |
//! | 3 | `SuperEffectiveStrike` | highest-damage super-effective attack |
//! | 4 | `SafeKill` | first attack that kills and survives the counter |
//! | 5 | `Triage` | first hurt creature with decent growth |
//! | 6 | `GoFace` | highest-attack face hit |
//! | 7 | `BestTrade` | best damage-to-counter ratio |
//! | 8 | `Reinforce` | highest-attack affordable card |
//! | 9 | `Fallback` | grow the first creature |
//!
//! Ties always go to the earliest candidate in generation order.

use crate::core::Action;

use super::context::{first_max_by_key, BotContext};

/// One rung of the bot's decision ladder.
pub trait BotRule: Send + Sync + std::fmt::Debug {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Pick an action, or `None` to defer to the next rule.
    fn select(&self, context: &BotContext<'_>) -> Option<Action>;
}

fn best_deploy(context: &BotContext<'_>) -> Option<Action> {
    first_max_by_key(context.deploys.iter(), |d| d.card.attack)
        .map(|d| Action::Play(d.ticker.clone()))
}

fn best_face_hit(context: &BotContext<'_>) -> Option<Action> {
    first_max_by_key(context.face_hits.iter(), |f| f.damage)
        .map(|f| Action::AttackFace(f.attacker.clone()))
}

/// Rule 1: with nothing on the field, deploy the hardest hitter.
#[derive(Clone, Debug, Default)]
pub struct OpeningDeploy;

impl BotRule for OpeningDeploy {
    fn name(&self) -> &'static str {
        "opening-deploy"
    }

    fn select(&self, context: &BotContext<'_>) -> Option<Action> {
        if !context.field_empty {
            return None;
        }
        best_deploy(context)
    }
}

/// Rule 2: go face when the human is low.
#[derive(Clone, Debug)]
pub struct FinishingBlow {
    /// Human health at or below which the bot goes face.
    pub max_enemy_health: i64,
}

impl BotRule for FinishingBlow {
    fn name(&self) -> &'static str {
        "finishing-blow"
    }

    fn select(&self, context: &BotContext<'_>) -> Option<Action> {
        if context.enemy_health > self.max_enemy_health {
            return None;
        }
        best_face_hit(context)
    }
}

/// Rule 3: exploit sector weakness for the most damage.
#[derive(Clone, Debug, Default)]
pub struct SuperEffectiveStrike;

impl BotRule for SuperEffectiveStrike {
    fn name(&self) -> &'static str {
        "super-effective-strike"
    }

    fn select(&self, context: &BotContext<'_>) -> Option<Action> {
        let strikes = context.strikes.iter().filter(|s| s.exchange.super_effective);
        first_max_by_key(strikes, |s| s.exchange.damage)
            .map(|s| Action::attack(s.attacker.clone(), s.defender.clone()))
    }
}

/// Rule 4: take a kill the attacker survives.
#[derive(Clone, Debug, Default)]
pub struct SafeKill;

impl BotRule for SafeKill {
    fn name(&self) -> &'static str {
        "safe-kill"
    }

    fn select(&self, context: &BotContext<'_>) -> Option<Action> {
        context
            .strikes
            .iter()
            .find(|s| s.is_safe_kill())
            .map(|s| Action::attack(s.attacker.clone(), s.defender.clone()))
    }
}

/// Rule 5: grow a badly hurt creature that grows well.
#[derive(Clone, Debug)]
pub struct Triage {
    /// Hurt means health below this percentage of max health.
    pub health_percent: i64,
    /// Minimum growth stat worth spending a turn on.
    pub min_growth: i64,
}

impl BotRule for Triage {
    fn name(&self) -> &'static str {
        "triage"
    }

    fn select(&self, context: &BotContext<'_>) -> Option<Action> {
        context
            .tends
            .iter()
            .find(|t| {
                i128::from(t.health) * 100
                    < i128::from(t.card.health) * i128::from(self.health_percent)
                    && t.card.growth >= self.min_growth
            })
            .map(|t| Action::Grow(t.ticker.clone()))
    }
}

/// Rule 6: go face whenever possible.
#[derive(Clone, Debug, Default)]
pub struct GoFace;

impl BotRule for GoFace {
    fn name(&self) -> &'static str {
        "go-face"
    }

    fn select(&self, context: &BotContext<'_>) -> Option<Action> {
        best_face_hit(context)
    }
}

/// Rule 7: make the most efficient trade.
#[derive(Clone, Debug, Default)]
pub struct BestTrade;

impl BotRule for BestTrade {
    fn name(&self) -> &'static str {
        "best-trade"
    }

    fn select(&self, context: &BotContext<'_>) -> Option<Action> {
        context
            .strikes
            .iter()
            .reduce(|best, next| {
                if next.exchange.better_ratio_than(&best.exchange) {
                    next
                } else {
                    best
                }
            })
            .map(|s| Action::attack(s.attacker.clone(), s.defender.clone()))
    }
}

/// Rule 8: deploy the hardest hitter.
#[derive(Clone, Debug, Default)]
pub struct Reinforce;

impl BotRule for Reinforce {
    fn name(&self) -> &'static str {
        "reinforce"
    }

    fn select(&self, context: &BotContext<'_>) -> Option<Action> {
        best_deploy(context)
    }
}

/// Rule 9: grow whatever is first.
#[derive(Clone, Debug, Default)]
pub struct Fallback;

impl BotRule for Fallback {
    fn name(&self) -> &'static str {
        "fallback"
    }

    fn select(&self, context: &BotContext<'_>) -> Option<Action> {
        context.tends.first().map(|t| Action::Grow(t.ticker.clone()))
    }
}
