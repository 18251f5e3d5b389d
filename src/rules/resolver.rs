//! Action resolution: one state plus one action gives the next state.
//!
//! Resolution is pure and deterministic. The acting player is always
//! `state.whos_turn`, and the turn passes to the other player afterwards.
//! Actions are expected to come from `legal_actions`; a payload that names
//! a card not where the action needs it is reported as an error rather
//! than resolved against the wrong creature.

use crate::cards::{CardCatalog, FieldCreature, Ticker};
use crate::core::{Action, EngineError, GameState, PlayerState, Role};

use super::combat::{face_damage, Exchange, Growth};

/// Resolve `action` for the player whose turn it is.
///
/// A finished game is returned unchanged.
pub fn compute_new_state(
    state: &GameState,
    action: &Action,
    catalog: &CardCatalog,
) -> Result<GameState, EngineError> {
    if state.is_terminal() {
        return Ok(state.clone());
    }

    let actor = state.whos_turn;
    let next = match action {
        Action::Play(ticker) => play(state, actor, ticker, catalog)?,
        Action::Grow(ticker) => grow(state, actor, ticker, catalog)?,
        Action::Attack { attacker, defender } => {
            attack(state, actor, attacker, defender, catalog)?
        }
        Action::AttackFace(ticker) => attack_face(state, actor, ticker, catalog)?,
    };

    log::debug!("{} resolved: {}", actor, action);
    Ok(next.pass_turn())
}

fn play(
    state: &GameState,
    actor: Role,
    ticker: &Ticker,
    catalog: &CardCatalog,
) -> Result<GameState, EngineError> {
    let card = catalog.require(ticker)?;
    let mut player = state.player(actor).clone();

    let index = player
        .hand_index(ticker)
        .ok_or_else(|| EngineError::CardNotInHand {
            role: actor,
            ticker: ticker.clone(),
        })?;

    player.hand.remove(index);
    player
        .in_play
        .push_back(FieldCreature::new(ticker.clone(), card.health));
    player.health -= card.play_cost();

    Ok(state.clone().with_player(actor, player))
}

fn grow(
    state: &GameState,
    actor: Role,
    ticker: &Ticker,
    catalog: &CardCatalog,
) -> Result<GameState, EngineError> {
    let card = catalog.require(ticker)?;
    let mut player = state.player(actor).clone();
    let index = creature_index(&player, actor, ticker)?;

    let growth = Growth::apply(player.in_play[index].health, card);
    player.in_play[index].health = growth.health;
    player.health += growth.overflow;

    Ok(state.clone().with_player(actor, player))
}

fn attack(
    state: &GameState,
    actor: Role,
    attacker: &Ticker,
    defender: &Ticker,
    catalog: &CardCatalog,
) -> Result<GameState, EngineError> {
    let attacker_card = catalog.require(attacker)?;
    let defender_card = catalog.require(defender)?;
    let exchange = Exchange::between(attacker_card, defender_card);

    let mut own = state.player(actor).clone();
    let mut enemy = state.player(actor.other()).clone();
    let attacker_index = creature_index(&own, actor, attacker)?;
    let defender_index = creature_index(&enemy, actor.other(), defender)?;

    // Both sides take damage in the same step
    own.in_play[attacker_index].health -= exchange.counter;
    enemy.in_play[defender_index].health -= exchange.damage;

    remove_destroyed(&mut own, attacker_index);
    remove_destroyed(&mut enemy, defender_index);

    Ok(state
        .clone()
        .with_player(actor, own)
        .with_player(actor.other(), enemy))
}

fn attack_face(
    state: &GameState,
    actor: Role,
    attacker: &Ticker,
    catalog: &CardCatalog,
) -> Result<GameState, EngineError> {
    let card = catalog.require(attacker)?;
    creature_index(state.player(actor), actor, attacker)?;

    let mut enemy = state.player(actor.other()).clone();
    enemy.health -= face_damage(card);

    Ok(state.clone().with_player(actor.other(), enemy))
}

fn creature_index(player: &PlayerState, role: Role, ticker: &Ticker) -> Result<usize, EngineError> {
    player
        .creature_index(ticker)
        .ok_or_else(|| EngineError::CreatureNotInPlay {
            role,
            ticker: ticker.clone(),
        })
}

fn remove_destroyed(player: &mut PlayerState, index: usize) {
    if player.in_play[index].is_destroyed() {
        let fallen = player.in_play.remove(index);
        log::debug!("{} was destroyed", fallen.ticker);
    }
}
