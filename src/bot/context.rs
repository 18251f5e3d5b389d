//! The bot's view of its options.
//!
//! `BotContext` takes the bot's legal actions and sorts them into four
//! buckets (deploy, strike, face hit, grow), resolving every card they
//! reference up front. Rules then work on plain numbers and never touch the
//! catalog.

use smallvec::SmallVec;

use crate::cards::{CardCatalog, CardDefinition, Ticker};
use crate::core::{Action, EngineError, GameState, PlayerState, Role};
use crate::rules::{face_damage, legal_actions, Exchange};

/// A hand card the bot can afford.
#[derive(Clone, Debug)]
pub struct Deploy<'a> {
    pub ticker: &'a Ticker,
    pub card: &'a CardDefinition,
}

/// A creature-vs-creature attack the bot can make.
#[derive(Clone, Debug)]
pub struct Strike<'a> {
    pub attacker: &'a Ticker,
    pub defender: &'a Ticker,
    pub exchange: Exchange,
    /// Current health of the attacking creature.
    pub attacker_health: i64,
    /// Current health of the defending creature.
    pub defender_health: i64,
}

impl Strike<'_> {
    /// The defender dies and the attacker survives the counter.
    #[must_use]
    pub fn is_safe_kill(&self) -> bool {
        self.exchange.damage >= self.defender_health && self.attacker_health > self.exchange.counter
    }
}

/// A face attack the bot can make.
#[derive(Clone, Debug)]
pub struct FaceHit<'a> {
    pub attacker: &'a Ticker,
    pub damage: i64,
}

/// A creature the bot can grow.
#[derive(Clone, Debug)]
pub struct Tend<'a> {
    pub ticker: &'a Ticker,
    pub card: &'a CardDefinition,
    /// Current health of the creature.
    pub health: i64,
}

/// Bucketed legal actions for the bot.
#[derive(Debug)]
pub struct BotContext<'a> {
    /// Legal actions in generation order.
    pub actions: &'a [Action],
    pub deploys: SmallVec<[Deploy<'a>; 8]>,
    pub strikes: SmallVec<[Strike<'a>; 8]>,
    pub face_hits: SmallVec<[FaceHit<'a>; 8]>,
    pub tends: SmallVec<[Tend<'a>; 8]>,
    /// Whether the bot has no creatures in play.
    pub field_empty: bool,
    /// The human player's health.
    pub enemy_health: i64,
}

impl<'a> BotContext<'a> {
    /// The seat the bot plays.
    pub const ROLE: Role = Role::Opponent;

    /// Legal actions for the bot in `state`.
    #[must_use]
    pub fn legal_actions(state: &GameState, catalog: &CardCatalog) -> Vec<Action> {
        legal_actions(state, catalog, Self::ROLE)
    }

    /// Sort `actions` (the bot's legal actions for `state`) into buckets.
    pub fn build(
        state: &'a GameState,
        catalog: &'a CardCatalog,
        actions: &'a [Action],
    ) -> Result<Self, EngineError> {
        let own = state.player(Self::ROLE);
        let enemy = state.player(Self::ROLE.other());

        let mut context = Self {
            actions,
            deploys: SmallVec::new(),
            strikes: SmallVec::new(),
            face_hits: SmallVec::new(),
            tends: SmallVec::new(),
            field_empty: own.field_is_empty(),
            enemy_health: enemy.health,
        };

        for action in actions {
            match action {
                Action::Play(ticker) => context.deploys.push(Deploy {
                    ticker,
                    card: catalog.require(ticker)?,
                }),
                Action::Grow(ticker) => context.tends.push(Tend {
                    ticker,
                    card: catalog.require(ticker)?,
                    health: field_health(own, Self::ROLE, ticker)?,
                }),
                Action::Attack { attacker, defender } => context.strikes.push(Strike {
                    attacker,
                    defender,
                    exchange: Exchange::between(catalog.require(attacker)?, catalog.require(defender)?),
                    attacker_health: field_health(own, Self::ROLE, attacker)?,
                    defender_health: field_health(enemy, Self::ROLE.other(), defender)?,
                }),
                Action::AttackFace(attacker) => context.face_hits.push(FaceHit {
                    attacker,
                    damage: face_damage(catalog.require(attacker)?),
                }),
            }
        }

        Ok(context)
    }

    /// Check if the bot has nothing to do.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

fn field_health(player: &PlayerState, role: Role, ticker: &Ticker) -> Result<i64, EngineError> {
    player
        .creature(ticker)
        .map(|creature| creature.health)
        .ok_or_else(|| EngineError::CreatureNotInPlay {
            role,
            ticker: ticker.clone(),
        })
}

/// First item with the highest key. Later items must be strictly better to win.
pub fn first_max_by_key<T, I, F>(items: I, key: F) -> Option<T>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> i64,
{
    items
        .into_iter()
        .map(|item| {
            let k = key(&item);
            (item, k)
        })
        .reduce(|best, next| if next.1 > best.1 { next } else { best })
        .map(|(item, _)| item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{FieldCreature, Sector};

    fn catalog() -> CardCatalog {
        CardCatalog::from_definitions([
            CardDefinition::new("TECH", Sector::Technology)
                .with_health(30)
                .with_attack(9)
                .with_defense(2)
                .with_growth(5),
            CardDefinition::new("COMM", Sector::CommunicationServices)
                .with_health(20)
                .with_attack(6)
                .with_defense(3)
                .with_growth(4),
        ])
        .unwrap()
    }

    #[test]
    fn test_buckets() {
        let catalog = catalog();
        let state = GameState::new(
            PlayerState::new([], 80).with_creature(FieldCreature::new("COMM", 11)),
            PlayerState::new([Ticker::from("COMM")], 60).with_creature(FieldCreature::new("TECH", 25)),
        );
        let actions = BotContext::legal_actions(&state, &catalog);
        let context = BotContext::build(&state, &catalog, &actions).unwrap();

        assert_eq!(context.deploys.len(), 1);
        assert_eq!(context.tends.len(), 1);
        assert_eq!(context.tends[0].health, 25);
        assert_eq!(context.face_hits.len(), 0);
        assert!(!context.field_empty);
        assert_eq!(context.enemy_health, 80);

        let strike = &context.strikes[0];
        assert!(strike.exchange.super_effective);
        assert_eq!(strike.exchange.damage, 12);
        assert_eq!(strike.exchange.counter, 4);
        assert_eq!(strike.attacker_health, 25);
        assert_eq!(strike.defender_health, 11);
        assert!(strike.is_safe_kill());
    }

    #[test]
    fn test_build_rejects_stale_actions() {
        let catalog = catalog();
        let state = GameState::new(PlayerState::new([], 80), PlayerState::new([], 80));
        let actions = vec![Action::grow("TECH")];

        let err = BotContext::build(&state, &catalog, &actions).unwrap_err();
        assert!(matches!(err, EngineError::CreatureNotInPlay { role: Role::Opponent, .. }));
    }

    #[test]
    fn test_first_max_keeps_earliest_tie() {
        let items = [("a", 3), ("b", 7), ("c", 7), ("d", 1)];
        let best = first_max_by_key(items.iter(), |(_, v)| *v);
        assert_eq!(best.map(|(name, _)| *name), Some("b"));

        let empty: [(&str, i64); 0] = [];
        assert!(first_max_by_key(empty.iter(), |(_, v)| *v).is_none());
    }
}
