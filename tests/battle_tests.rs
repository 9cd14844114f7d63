//! Battle resolution scenarios driven through the public API.

use triduel::actions::ActionKind;
use triduel::battle::{resolve_battle, ActionRecord, AttackOutcome};
use triduel::catalog::{Catalog, MonsterCard, MonsterClass};
use triduel::core::{Lane, PlayerId};
use triduel::state::MatchState;

fn monster(name: &str, class: MonsterClass, attack: i32, defense: i32, speed: i32) -> MonsterCard {
    MonsterCard {
        name: name.to_string(),
        class,
        attack,
        defense,
        speed,
        bonus_stat: None,
        petrified: false,
        frozen: false,
    }
}

fn empty_state() -> MatchState {
    let catalog = Catalog::standard();
    let mut state = MatchState::deal(99, &catalog);
    for player in PlayerId::both() {
        state.players[player].hand.clear();
        state.players[player].deck.clear();
    }
    state
}

/// Resolve a single one-on-one exchange in the left lane and return the
/// attacker's outcome. The defender takes no action.
fn single_strike(attacker: MonsterCard, defender: MonsterCard) -> (AttackOutcome, MatchState) {
    let mut state = empty_state();
    state.players[PlayerId::ONE].board[0] = Some(attacker);
    state.players[PlayerId::ONE].selected_actions[0] = Some(ActionKind::AttackVertical);
    state.players[PlayerId::TWO].board[0] = Some(defender);

    let report = resolve_battle(&mut state);
    assert_eq!(report.actions.len(), 1);
    match &report.actions[0] {
        ActionRecord::Attack { outcome, .. } => (outcome.clone(), state),
        other => panic!("expected an attack record, got {other:?}"),
    }
}

#[test]
fn stronger_attacker_deals_the_difference() {
    // 5 ATK into a 3 ATK / 4 DEF defender: 2 damage.
    let (outcome, state) = single_strike(
        monster("Striker", MonsterClass::PlainAttacker, 5, 6, 5),
        monster("Target", MonsterClass::PlainAttacker, 3, 4, 3),
    );

    match outcome {
        AttackOutcome::MonsterHit {
            damage,
            defense_after,
            ..
        } => {
            assert_eq!(damage, 2);
            assert_eq!(defense_after, 2);
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    let target = state.player(PlayerId::TWO).monster(Lane::Left).unwrap();
    assert_eq!(target.defense, 2);
}

#[test]
fn equal_attack_grinds_down_to_defense_minus_one() {
    // 6 ATK into a 6 ATK / 5 DEF defender: 4 damage.
    let (outcome, _) = single_strike(
        monster("Striker", MonsterClass::PlainAttacker, 6, 6, 5),
        monster("Target", MonsterClass::PlainAttacker, 6, 5, 3),
    );

    match outcome {
        AttackOutcome::MonsterHit { damage, .. } => assert_eq!(damage, 4),
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn weaker_attacker_destroys_with_excess_spillover() {
    // 3 ATK into a 7 ATK / 2 DEF defender: full 3 damage, destruction,
    // 1 excess into the lane.
    let (outcome, state) = single_strike(
        monster("Striker", MonsterClass::PlainAttacker, 3, 6, 5),
        monster("Target", MonsterClass::PlainAttacker, 7, 2, 3),
    );

    match outcome {
        AttackOutcome::MonsterDestroyed {
            damage,
            excess,
            lane_health_after,
            ..
        } => {
            assert_eq!(damage, 3);
            assert_eq!(excess, 1);
            assert_eq!(lane_health_after, 4);
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert!(state.player(PlayerId::TWO).board[0].is_none());
    assert_eq!(state.player(PlayerId::TWO).graveyard.len(), 1);
    assert_eq!(state.player(PlayerId::TWO).lane_health(Lane::Left), 4);
}

#[test]
fn excess_spillover_clamps_lane_at_zero() {
    let mut state = empty_state();
    state.players[PlayerId::ONE].board[0] =
        Some(monster("Crusher", MonsterClass::PlainAttacker, 20, 6, 5));
    state.players[PlayerId::ONE].selected_actions[0] = Some(ActionKind::AttackVertical);
    state.players[PlayerId::TWO].board[0] =
        Some(monster("Target", MonsterClass::PlainAttacker, 1, 2, 3));

    let report = resolve_battle(&mut state);
    match &report.actions[0] {
        ActionRecord::Attack {
            outcome:
                AttackOutcome::MonsterDestroyed {
                    excess,
                    lane_health_after,
                    ..
                },
            ..
        } => {
            // 19 damage against 2 defense: 17 excess flattens the lane.
            assert_eq!(*excess, 17);
            assert_eq!(*lane_health_after, 0);
        }
        other => panic!("unexpected record: {other:?}"),
    }
    assert_eq!(state.player(PlayerId::TWO).lane_health(Lane::Left), 0);
}

#[test]
fn diagonal_off_the_board_is_a_recorded_noop() {
    let mut state = empty_state();
    state.players[PlayerId::ONE].board[0] =
        Some(monster("Rounder", MonsterClass::AllRounder, 4, 4, 8));
    // Not selectable through the command layer, which is exactly why
    // resolution must still handle it defensively.
    state.players[PlayerId::ONE].selected_actions[0] = Some(ActionKind::AttackDiagonalLeft);

    let before = state.clone();
    let report = resolve_battle(&mut state);

    match &report.actions[0] {
        ActionRecord::Attack {
            target_lane,
            outcome,
            ..
        } => {
            assert_eq!(*target_lane, None);
            assert_eq!(*outcome, AttackOutcome::NoOp);
        }
        other => panic!("unexpected record: {other:?}"),
    }
    assert_eq!(
        state.player(PlayerId::TWO).lanes,
        before.player(PlayerId::TWO).lanes
    );
}

#[test]
fn defend_nullifies_damage_entirely() {
    let mut state = empty_state();
    state.players[PlayerId::ONE].board[0] =
        Some(monster("Striker", MonsterClass::PlainAttacker, 9, 6, 5));
    state.players[PlayerId::ONE].selected_actions[0] = Some(ActionKind::AttackVertical);
    state.players[PlayerId::TWO].board[0] =
        Some(monster("Wall", MonsterClass::Defender, 2, 8, 2));
    state.players[PlayerId::TWO].selected_actions[0] = Some(ActionKind::Defend);

    let report = resolve_battle(&mut state);

    // Defend resolves before the attack.
    assert!(matches!(report.actions[0], ActionRecord::Defend { .. }));
    match &report.actions[1] {
        ActionRecord::Attack { outcome, .. } => {
            assert!(matches!(outcome, AttackOutcome::Blocked { .. }));
        }
        other => panic!("unexpected record: {other:?}"),
    }
    let wall = state.player(PlayerId::TWO).monster(Lane::Left).unwrap();
    assert_eq!(wall.defense, 8);
}

#[test]
fn pump_record_reports_selection_time_gain() {
    let catalog = Catalog::standard();
    let mut state = empty_state();
    // Windcharger is the Speed pumper: 3/5/7 pumps to 4/6/9.
    let mut windcharger = MonsterCard::from_def(catalog.monster("Windcharger").unwrap());
    windcharger.apply_pump();
    state.players[PlayerId::ONE].board[0] = Some(windcharger);
    state.players[PlayerId::ONE].selected_actions[0] = Some(ActionKind::Pump);

    let report = resolve_battle(&mut state);

    match &report.actions[0] {
        ActionRecord::Pump { before, after, .. } => {
            assert_eq!((before.attack, before.defense, before.speed), (3, 5, 7));
            assert_eq!((after.attack, after.defense, after.speed), (4, 6, 9));
        }
        other => panic!("unexpected record: {other:?}"),
    }
    // Resolution does not re-apply what selection already applied.
    let card = state.player(PlayerId::ONE).monster(Lane::Left).unwrap();
    assert_eq!((card.attack, card.defense, card.speed), (4, 6, 9));
}

#[test]
fn pumps_resolve_before_defends_before_attacks() {
    let mut state = empty_state();
    state.players[PlayerId::ONE].board[0] =
        Some(monster("Fast Striker", MonsterClass::PlainAttacker, 9, 6, 9));
    state.players[PlayerId::ONE].selected_actions[0] = Some(ActionKind::AttackVertical);
    let mut pumper = monster("Slow Pumper", MonsterClass::Pumper, 2, 6, 1);
    pumper.apply_pump();
    state.players[PlayerId::ONE].board[2] = Some(pumper);
    state.players[PlayerId::ONE].selected_actions[2] = Some(ActionKind::Pump);
    state.players[PlayerId::TWO].board[0] =
        Some(monster("Slow Wall", MonsterClass::Defender, 2, 8, 1));
    state.players[PlayerId::TWO].selected_actions[0] = Some(ActionKind::Defend);

    let report = resolve_battle(&mut state);

    assert!(matches!(report.actions[0], ActionRecord::Pump { .. }));
    assert!(matches!(report.actions[1], ActionRecord::Defend { .. }));
    assert!(matches!(report.actions[2], ActionRecord::Attack { .. }));
}

#[test]
fn identical_states_resolve_identically() {
    let build = || {
        let mut state = empty_state();
        state.players[PlayerId::ONE].board[0] =
            Some(monster("A", MonsterClass::AllRounder, 4, 4, 8));
        state.players[PlayerId::ONE].board[2] =
            Some(monster("B", MonsterClass::Pumper, 2, 6, 4));
        state.players[PlayerId::ONE].selected_actions[0] = Some(ActionKind::AttackVertical);
        state.players[PlayerId::ONE].selected_actions[2] = Some(ActionKind::AttackVertical);
        state.players[PlayerId::TWO].board[0] =
            Some(monster("C", MonsterClass::Defender, 3, 8, 2));
        state.players[PlayerId::TWO].board[2] =
            Some(monster("D", MonsterClass::AllRounder, 5, 3, 6));
        state.players[PlayerId::TWO].selected_actions[0] = Some(ActionKind::Defend);
        state.players[PlayerId::TWO].selected_actions[2] = Some(ActionKind::AttackVertical);
        state
    };

    let mut first = build();
    let mut second = build();
    assert_eq!(resolve_battle(&mut first), resolve_battle(&mut second));
    for player in PlayerId::both() {
        assert_eq!(first.player(player), second.player(player));
    }
}
