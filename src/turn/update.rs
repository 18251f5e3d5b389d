//! Result of one human action.

use serde::{Deserialize, Serialize};

use crate::core::{Action, GameState, Role};

/// How the turn loop ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TurnOutcome {
    /// The human has a legal action and it is their turn.
    HumanToMove,
    /// The game is over.
    Won(Role),
    /// The bot had no legal action and passed back to the human.
    BotStalled,
    /// Neither side has a legal action. The state stands, no winner.
    Deadlock,
    /// The bot used every allowed step while the human still had no move.
    StepLimit,
}

impl TurnOutcome {
    /// Check if the caller should record this turn as an anomaly.
    #[must_use]
    pub fn is_anomaly(self) -> bool {
        matches!(self, TurnOutcome::Deadlock | TurnOutcome::StepLimit)
    }
}

/// The orchestrator's output: the new state and the bot's first move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameUpdate {
    /// State after the human action and the bot's reply.
    pub state: GameState,

    /// First action the bot took, for replay. Absent if the bot did not act.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot_action: Option<Action>,

    pub outcome: TurnOutcome,
}

impl GameUpdate {
    pub(crate) fn new(state: GameState, bot_action: Option<Action>, outcome: TurnOutcome) -> Self {
        Self {
            state,
            bot_action,
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerState;
    use serde_json::json;

    #[test]
    fn test_anomalies() {
        assert!(TurnOutcome::StepLimit.is_anomaly());
        assert!(TurnOutcome::Deadlock.is_anomaly());
        assert!(!TurnOutcome::BotStalled.is_anomaly());
        assert!(!TurnOutcome::Won(Role::You).is_anomaly());
    }

    #[test]
    fn test_wire_format() {
        let state = GameState::new(PlayerState::new([], 10), PlayerState::new([], 10));

        let quiet = GameUpdate::new(state.clone(), None, TurnOutcome::BotStalled);
        let json = serde_json::to_value(&quiet).unwrap();
        assert!(json.get("botAction").is_none());
        assert_eq!(json["outcome"], "bot-stalled");

        let won = GameUpdate::new(state, Some(Action::grow("AAPL")), TurnOutcome::Won(Role::Opponent));
        let json = serde_json::to_value(&won).unwrap();
        assert_eq!(json["botAction"], json!({"actionType": "grow", "data": "AAPL"}));
        assert_eq!(json["outcome"], json!({"won": "opponent"}));
    }
}
