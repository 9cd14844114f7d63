//! Full match flow: phase cycling, locks, cooldowns, abilities, win timing.

use triduel::actions::ActionKind;
use triduel::catalog::{CardKind, Catalog, Champion, MonsterCard};
use triduel::core::{Lane, PlayerId};
use triduel::error::CommandError;
use triduel::events::{EventLog, GameEvent, NullSink};
use triduel::flow::MatchController;
use triduel::state::{MatchState, Phase};

fn catalog() -> Catalog {
    Catalog::standard()
}

fn monster(name: &str) -> MonsterCard {
    MonsterCard::from_def(catalog().monster(name).unwrap())
}

/// A controller over a crafted strategy-phase state.
fn crafted<F: FnOnce(&mut MatchState)>(seed: u64, craft: F) -> MatchController<NullSink> {
    let mut state = MatchState::deal(seed, &catalog());
    state.phase = Phase::Strategy;
    craft(&mut state);
    MatchController::from_state(state, NullSink)
}

/// Advance Strategy -> Battle -> End and into the next Strategy.
fn next_turn<S: triduel::events::EventSink>(controller: &mut MatchController<S>) {
    controller.advance_phase().unwrap();
    controller.advance_phase().unwrap();
}

#[test]
fn ai_vs_ai_match_holds_invariants_over_many_turns() {
    let mut controller = MatchController::new(2024, &catalog(), NullSink);
    controller.start().unwrap();

    for _ in 0..30 {
        if controller.phase() == Phase::GameOver {
            break;
        }
        controller.run_opponent(PlayerId::ONE);
        controller.run_opponent(PlayerId::TWO);
        controller.advance_phase().unwrap();
        if controller.phase() == Phase::Battle {
            controller.advance_phase().unwrap();
        }

        for player in PlayerId::both() {
            let side = controller.state().player(player);
            assert!(side.lanes.iter().all(|&h| h >= 0));
            assert!(side.board[Lane::Champion.index()].is_none());
            assert!(side.spells[Lane::Champion.index()].is_none());
        }
    }

    // Ten spell draws exhaust the decks; later draws warn and skip.
    if controller.phase() != Phase::GameOver {
        assert!(controller.turn() > 10);
        for player in PlayerId::both() {
            assert!(controller.state().player(player).deck.is_empty());
        }
    }
}

#[test]
fn win_is_declared_only_during_the_end_phase() {
    let mut controller = crafted(1, |state| {
        // The defender's left lane is already destroyed; the attacker's
        // diagonal into the champion lane can finish the match.
        state.players[PlayerId::TWO].lanes = [0, 3, 5];
        state.players[PlayerId::ONE].board[0] = Some(monster("Swift Striker"));
    });

    controller
        .select_action(PlayerId::ONE, Lane::Left, ActionKind::AttackDiagonalRight)
        .unwrap();
    controller.advance_phase().unwrap();

    // The center lane is down, but the battle phase declares no winner.
    assert_eq!(controller.phase(), Phase::Battle);
    assert_eq!(
        controller.state().player(PlayerId::TWO).lane_health(Lane::Champion),
        0
    );
    assert_eq!(controller.winner(), None);

    controller.advance_phase().unwrap();
    assert_eq!(controller.phase(), Phase::GameOver);
    assert_eq!(controller.winner(), Some(PlayerId::ONE));

    // Everything is declined once the match is over.
    assert_eq!(
        controller.select_action(PlayerId::ONE, Lane::Left, ActionKind::AttackVertical),
        Err(CommandError::MatchOver)
    );
    assert_eq!(controller.advance_phase(), Err(CommandError::MatchOver));
}

#[test]
fn game_over_event_carries_the_winner() {
    let mut state = MatchState::deal(1, &catalog());
    state.phase = Phase::Strategy;
    state.players[PlayerId::TWO].lanes = [0, 2, 5];
    state.players[PlayerId::ONE].board[0] = Some(monster("Swift Striker"));
    let mut controller = MatchController::from_state(state, EventLog::new());

    controller
        .select_action(PlayerId::ONE, Lane::Left, ActionKind::AttackDiagonalRight)
        .unwrap();
    next_turn(&mut controller);

    let game_over = controller.sink().events().iter().find_map(|e| match e {
        GameEvent::PhaseChanged {
            phase: Phase::GameOver,
            winner,
            ..
        } => Some(*winner),
        _ => None,
    });
    assert_eq!(game_over, Some(Some(PlayerId::ONE)));
}

#[test]
fn defender_cooldown_cycles_over_three_turns() {
    let mut controller = crafted(2, |state| {
        state.players[PlayerId::ONE].board[0] = Some(monster("Iron Guardian"));
    });

    // Turn 1: defend.
    controller
        .select_action(PlayerId::ONE, Lane::Left, ActionKind::Defend)
        .unwrap();
    next_turn(&mut controller);

    // Turn 2: on cooldown, defend is not offered.
    let side = controller.state().player(PlayerId::ONE);
    assert!(side.defenders_on_cooldown[0]);
    assert_eq!(
        controller.select_action(PlayerId::ONE, Lane::Left, ActionKind::Defend),
        Err(CommandError::IllegalAction(Lane::Left))
    );
    controller
        .select_action(PlayerId::ONE, Lane::Left, ActionKind::AttackVertical)
        .unwrap();
    next_turn(&mut controller);

    // Turn 3: rested and ready to defend again.
    assert!(!controller.state().player(PlayerId::ONE).defenders_on_cooldown[0]);
    controller
        .select_action(PlayerId::ONE, Lane::Left, ActionKind::Defend)
        .unwrap();
}

#[test]
fn a_monster_that_fought_cannot_be_replaced() {
    let mut controller = crafted(3, |state| {
        state.players[PlayerId::ONE].board[0] = Some(monster("Iron Guardian"));
    });

    // Before any battle the monster can be swapped out freely.
    assert!(!controller.state().player(PlayerId::ONE).monsters_have_fought[0]);
    next_turn(&mut controller);

    assert!(controller.state().player(PlayerId::ONE).monsters_have_fought[0]);
    let monster_at = controller
        .state()
        .player(PlayerId::ONE)
        .hand
        .iter()
        .position(|c| c.kind() == CardKind::Monster)
        .expect("dealt hand holds monsters");
    assert_eq!(
        controller.place_card(PlayerId::ONE, monster_at, CardKind::Monster, Lane::Left),
        Err(CommandError::ReplacementLocked(Lane::Left))
    );

    // The untouched empty lane accepts the card fine.
    controller
        .place_card(PlayerId::ONE, monster_at, CardKind::Monster, Lane::Right)
        .unwrap();
}

#[test]
fn mana_drain_locks_spells_for_exactly_one_turn() {
    let mut controller = crafted(4, |state| {
        state.players[PlayerId::ONE].spells[0] = Some(triduel::catalog::SpellCard::from_def(
            catalog().spell("Mana Drain").unwrap(),
        ));
    });

    next_turn(&mut controller);

    // The victim is locked out of spell placement this turn.
    assert!(controller.state().player(PlayerId::TWO).spells_locked);
    let spell_at = |controller: &MatchController<NullSink>, player| {
        controller
            .state()
            .player(player)
            .hand
            .iter()
            .position(|c| c.kind() == CardKind::Spell)
            .expect("draws put spells in hand")
    };
    let idx = spell_at(&controller, PlayerId::TWO);
    assert_eq!(
        controller.place_card(PlayerId::TWO, idx, CardKind::Spell, Lane::Left),
        Err(CommandError::SpellsLocked)
    );

    // The caster is unaffected.
    let idx = spell_at(&controller, PlayerId::ONE);
    controller
        .place_card(PlayerId::ONE, idx, CardKind::Spell, Lane::Left)
        .unwrap();

    next_turn(&mut controller);

    // The lock expires after one turn.
    assert!(!controller.state().player(PlayerId::TWO).spells_locked);
    let idx = spell_at(&controller, PlayerId::TWO);
    controller
        .place_card(PlayerId::TWO, idx, CardKind::Spell, Lane::Left)
        .unwrap();
}

#[test]
fn freeze_disables_a_monster_and_takes_back_its_pump() {
    let mut controller = crafted(5, |state| {
        state.players[PlayerId::ONE].champion =
            Champion::from_def(catalog().champion("Frost Sentinel").unwrap());
        state.players[PlayerId::ONE].lanes[1] = state.players[PlayerId::ONE].champion.defense;
        state.players[PlayerId::TWO].board[0] = Some(monster("Windcharger"));
    });

    controller
        .select_action(PlayerId::TWO, Lane::Left, ActionKind::Pump)
        .unwrap();
    let card = controller.state().player(PlayerId::TWO).monster(Lane::Left).unwrap();
    assert_eq!((card.attack, card.defense, card.speed), (4, 6, 9));

    controller
        .activate_champion_ability(PlayerId::ONE, Lane::Left)
        .unwrap();

    let side = controller.state().player(PlayerId::TWO);
    let card = side.monster(Lane::Left).unwrap();
    assert!(card.frozen);
    assert_eq!((card.attack, card.defense, card.speed), (3, 5, 7));
    assert!(side.selected_actions[0].is_none());

    // A frozen monster offers no actions.
    assert_eq!(
        controller.select_action(PlayerId::TWO, Lane::Left, ActionKind::AttackVertical),
        Err(CommandError::IllegalAction(Lane::Left))
    );

    // Once per turn.
    assert_eq!(
        controller.activate_champion_ability(PlayerId::ONE, Lane::Left),
        Err(CommandError::AbilityUnavailable)
    );

    next_turn(&mut controller);
    let card = controller.state().player(PlayerId::TWO).monster(Lane::Left).unwrap();
    assert!(!card.frozen);
}

#[test]
fn heal_restores_a_monster_or_the_center_lane() {
    let mut controller = crafted(6, |state| {
        state.players[PlayerId::ONE].champion =
            Champion::from_def(catalog().champion("Ethereal Wisper").unwrap());
        state.players[PlayerId::ONE].lanes[1] = 10;
        state.players[PlayerId::ONE].board[0] = Some(monster("Iron Guardian"));
    });

    controller
        .activate_champion_ability(PlayerId::ONE, Lane::Champion)
        .unwrap();
    assert_eq!(
        controller.state().player(PlayerId::ONE).lane_health(Lane::Champion),
        13
    );

    next_turn(&mut controller);

    controller
        .activate_champion_ability(PlayerId::ONE, Lane::Left)
        .unwrap();
    let card = controller.state().player(PlayerId::ONE).monster(Lane::Left).unwrap();
    assert_eq!(card.defense, 11);
}

#[test]
fn unwired_champion_abilities_are_declined() {
    let mut controller = crafted(7, |state| {
        state.players[PlayerId::ONE].champion =
            Champion::from_def(catalog().champion("Invictus").unwrap());
    });

    assert_eq!(
        controller.activate_champion_ability(PlayerId::ONE, Lane::Left),
        Err(CommandError::AbilityUnavailable)
    );
}

#[test]
fn speed_pumper_gains_one_one_two() {
    let mut controller = crafted(8, |state| {
        state.players[PlayerId::ONE].board[0] = Some(monster("Windcharger"));
    });

    controller
        .select_action(PlayerId::ONE, Lane::Left, ActionKind::Pump)
        .unwrap();

    let card = controller.state().player(PlayerId::ONE).monster(Lane::Left).unwrap();
    assert_eq!(card.attack, 3 + 1);
    assert_eq!(card.defense, 5 + 1);
    assert_eq!(card.speed, 7 + 2);
}
