//! The turn loop.
//!
//! One call handles one human action and everything the bot does in reply:
//!
//! 1. A finished game is returned unchanged.
//! 2. The human action is checked against the legal actions and resolved.
//! 3. If the bot is knocked out, the human wins at once.
//! 4. The bot acts until the human has a legal action again, the human is
//!    knocked out, the bot runs out of moves, or the step limit is reached.
//!    While the human has no legal action, the turn is forced back to the bot.

use crate::bot::BotPolicy;
use crate::cards::CardCatalog;
use crate::core::{Action, EngineError, GameState, Role};
use crate::games::marketmon::Marketmon;
use crate::rules::RulesEngine;

use super::update::{GameUpdate, TurnOutcome};

/// Apply a human action and play out the bot's reply.
///
/// When the bot has no legal action the state is otherwise left as it
/// stands, but if the human can still act the turn is handed back to them
/// (`whos_turn = You`, `BotStalled`) so the next call is accepted. Only when
/// neither side can move does `whos_turn` stay with the bot (`Deadlock`).
pub fn run_turn<E: RulesEngine>(
    engine: &E,
    policy: &BotPolicy,
    state: &GameState,
    action: &Action,
) -> Result<GameUpdate, EngineError> {
    if let Some(winner) = state.winner {
        return Ok(GameUpdate::new(state.clone(), None, TurnOutcome::Won(winner)));
    }

    if state.whos_turn != Role::You || !engine.is_legal(state, Role::You, action) {
        return Err(EngineError::IllegalAction {
            action: action.clone(),
        });
    }

    let mut state = engine.apply_action(state, action)?;
    if state.opponent.is_defeated() {
        log::debug!("Human wins");
        return Ok(won(state, None, Role::You));
    }

    let mut first_bot_action = None;
    for step in 0..engine.config().max_bot_steps {
        let Some(bot_action) = policy.select(&state, engine.catalog())? else {
            return Ok(bot_stalled(engine, state, first_bot_action));
        };

        state = engine.apply_action(&state, &bot_action)?;
        first_bot_action.get_or_insert(bot_action);

        if state.you.is_defeated() {
            log::debug!("Bot wins after {} steps", step + 1);
            return Ok(won(state, first_bot_action, Role::Opponent));
        }

        if engine.has_legal_action(&state, Role::You) {
            return Ok(GameUpdate::new(state, first_bot_action, TurnOutcome::HumanToMove));
        }

        // Human is stuck: the bot keeps the turn
        state = state.with_turn(Role::Opponent);
    }

    log::warn!(
        "Bot step limit of {} reached with the human still unable to act",
        engine.config().max_bot_steps
    );
    Ok(GameUpdate::new(state, first_bot_action, TurnOutcome::StepLimit))
}

fn won(state: GameState, bot_action: Option<Action>, winner: Role) -> GameUpdate {
    GameUpdate::new(state.with_winner(winner), bot_action, TurnOutcome::Won(winner))
}

fn bot_stalled<E: RulesEngine>(
    engine: &E,
    state: GameState,
    bot_action: Option<Action>,
) -> GameUpdate {
    if engine.has_legal_action(&state, Role::You) {
        log::debug!("Bot has no move, passing to the human");
        GameUpdate::new(state.with_turn(Role::You), bot_action, TurnOutcome::BotStalled)
    } else {
        log::warn!("Neither player has a legal action");
        GameUpdate::new(state, bot_action, TurnOutcome::Deadlock)
    }
}

/// Apply a human action with the default configuration and bot.
pub fn update_game_state(
    state: &GameState,
    action: &Action,
    catalog: &CardCatalog,
) -> Result<GameUpdate, EngineError> {
    Marketmon::new(catalog).update(state, action)
}
