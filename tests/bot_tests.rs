//! Bot decision ladder tests.

use marketmon::bot::{select_bot_action, BotContext, BotPolicy, BotRule};
use marketmon::cards::{CardCatalog, CardDefinition, FieldCreature, Sector, Ticker};
use marketmon::core::{Action, GameState, PlayerState};

fn catalog() -> CardCatalog {
    CardCatalog::from_definitions([
        CardDefinition::new("NVDA", Sector::Technology)
            .with_health(30)
            .with_attack(9)
            .with_defense(2)
            .with_growth(5),
        CardDefinition::new("DIS", Sector::CommunicationServices)
            .with_health(20)
            .with_attack(6)
            .with_defense(3)
            .with_growth(4),
        CardDefinition::new("XOM", Sector::Energy)
            .with_health(40)
            .with_attack(12)
            .with_defense(4)
            .with_growth(2),
        CardDefinition::new("JPM", Sector::FinancialServices)
            .with_health(24)
            .with_attack(5)
            .with_defense(1)
            .with_growth(3),
        CardDefinition::new("O", Sector::RealEstate)
            .with_health(60)
            .with_attack(3)
            .with_defense(6)
            .with_growth(6),
    ])
    .unwrap()
}

fn decide(state: &GameState, catalog: &CardCatalog) -> (&'static str, Action) {
    let decision = BotPolicy::default()
        .decide(state, catalog)
        .unwrap()
        .expect("bot should have a move");
    (decision.rule, decision.action)
}

// =============================================================================
// Ladder
// =============================================================================

#[test]
fn test_single_affordable_card_is_deployed() {
    let catalog = catalog();
    // XOM costs 20 and is out of reach; JPM costs 12
    let state = GameState::new(
        PlayerState::new([], 100).with_creature(FieldCreature::new("NVDA", 30)),
        PlayerState::new([Ticker::from("XOM"), Ticker::from("JPM")], 20),
    );

    assert_eq!(decide(&state, &catalog), ("opening-deploy", Action::play("JPM")));
}

#[test]
fn test_finishing_blow_beats_everything_after_it() {
    let catalog = catalog();
    let state = GameState::new(
        PlayerState::new([], 12),
        PlayerState::new([], 100)
            .with_creature(FieldCreature::new("JPM", 2))
            .with_creature(FieldCreature::new("XOM", 40)),
    );

    assert_eq!(decide(&state, &catalog), ("finishing-blow", Action::attack_face("XOM")));
}

#[test]
fn test_super_effective_beats_safe_kill() {
    let catalog = catalog();
    // XOM would kill JPM safely, but NVDA -> DIS is super-effective
    let state = GameState::new(
        PlayerState::new([], 100)
            .with_creature(FieldCreature::new("JPM", 5))
            .with_creature(FieldCreature::new("DIS", 20)),
        PlayerState::new([], 100)
            .with_creature(FieldCreature::new("XOM", 40))
            .with_creature(FieldCreature::new("NVDA", 30)),
    );

    assert_eq!(
        decide(&state, &catalog),
        ("super-effective-strike", Action::attack("NVDA", "DIS"))
    );
}

#[test]
fn test_safe_kill_takes_first_found() {
    let catalog = catalog();
    let state = GameState::new(
        PlayerState::new([], 100)
            .with_creature(FieldCreature::new("O", 3))
            .with_creature(FieldCreature::new("JPM", 5)),
        PlayerState::new([], 100).with_creature(FieldCreature::new("XOM", 40)),
    );

    // XOM -> O: 12 - 6 = 6 kills O (3), takes 1
    assert_eq!(decide(&state, &catalog), ("safe-kill", Action::attack("XOM", "O")));
}

#[test]
fn test_triage_before_going_face() {
    let catalog = catalog();
    let state = GameState::new(
        PlayerState::new([], 100),
        PlayerState::new([], 100).with_creature(FieldCreature::new("O", 10)),
    );

    assert_eq!(decide(&state, &catalog), ("triage", Action::grow("O")));
}

#[test]
fn test_best_trade_when_nothing_better() {
    let catalog = catalog();
    // JPM -> O: max(5 - 6, 1) = 1 for 3 - 1 = 2 back
    // JPM -> XOM: 5 - 4 = 1 for 12 - 1 = 11 back
    let state = GameState::new(
        PlayerState::new([], 100)
            .with_creature(FieldCreature::new("XOM", 40))
            .with_creature(FieldCreature::new("O", 60)),
        PlayerState::new([], 100).with_creature(FieldCreature::new("JPM", 24)),
    );

    assert_eq!(decide(&state, &catalog), ("best-trade", Action::attack("JPM", "O")));
}

#[test]
fn test_no_move_is_explicit() {
    let catalog = catalog();
    let state = GameState::new(
        PlayerState::new([], 100),
        PlayerState::new([Ticker::from("O")], 30),
    );

    assert_eq!(select_bot_action(&state, &catalog).unwrap(), None);
}

// =============================================================================
// Custom ladders
// =============================================================================

/// Always deploys the cheapest card.
#[derive(Debug)]
struct Frugal;

impl BotRule for Frugal {
    fn name(&self) -> &'static str {
        "frugal"
    }

    fn select(&self, context: &BotContext<'_>) -> Option<Action> {
        context
            .deploys
            .iter()
            .min_by_key(|d| d.card.play_cost())
            .map(|d| Action::Play(d.ticker.clone()))
    }
}

#[test]
fn test_custom_rule_in_ladder() {
    let catalog = catalog();
    let state = GameState::new(
        PlayerState::new([], 100),
        PlayerState::new([Ticker::from("XOM"), Ticker::from("DIS")], 100),
    );

    let policy = BotPolicy::with_rules(vec![Box::new(Frugal)]);
    let decision = policy.decide(&state, &catalog).unwrap().unwrap();
    assert_eq!(decision.rule, "frugal");
    assert_eq!(decision.action, Action::play("DIS"));

    // The standard ladder opens with the hardest hitter instead
    assert_eq!(decide(&state, &catalog).1, Action::play("XOM"));
}
