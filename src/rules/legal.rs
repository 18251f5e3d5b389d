//! Legal action generation.
//!
//! Rules, each evaluated independently:
//! - Play: every hand card whose cost is strictly below the player's health
//! - Grow: every creature in play, always
//! - Attack: every (own creature, enemy creature) pair, if the enemy field
//!   is not empty
//! - Attack face: every own creature, if the enemy field is empty
//!
//! Output order is plays, grows, then attacks, each in collection order.
//! Turn possession is not checked; the orchestrator asks about either seat.

use crate::cards::CardCatalog;
use crate::core::{Action, GameState, Role};

/// Enumerate all actions `role` may take in `state`.
///
/// Hand cards missing from the catalog can never be afforded and are skipped.
#[must_use]
pub fn legal_actions(state: &GameState, catalog: &CardCatalog, role: Role) -> Vec<Action> {
    let player = state.player(role);
    let enemy = state.player(role.other());
    let mut actions = Vec::new();

    for ticker in &player.hand {
        match catalog.get(ticker) {
            Some(card) if card.play_cost() < player.health => {
                actions.push(Action::Play(ticker.clone()));
            }
            Some(_) => {}
            None => log::warn!("Skipping unknown hand card {} for {}", ticker, role),
        }
    }

    for creature in &player.in_play {
        actions.push(Action::Grow(creature.ticker.clone()));
    }

    if enemy.field_is_empty() {
        for creature in &player.in_play {
            actions.push(Action::AttackFace(creature.ticker.clone()));
        }
    } else {
        for attacker in &player.in_play {
            for defender in &enemy.in_play {
                actions.push(Action::Attack {
                    attacker: attacker.ticker.clone(),
                    defender: defender.ticker.clone(),
                });
            }
        }
    }

    log::trace!("{} has {} legal actions", role, actions.len());
    actions
}

/// Check if `role` has at least one legal action.
#[must_use]
pub fn has_legal_action(state: &GameState, catalog: &CardCatalog, role: Role) -> bool {
    let player = state.player(role);

    !player.in_play.is_empty()
        || player.hand.iter().any(|ticker| {
            catalog
                .get(ticker)
                .is_some_and(|card| card.play_cost() < player.health)
        })
}
