//! Battle resolution engine.
//!
//! `resolve_battle` is one pure synchronous pass over the match state:
//!
//! 1. Activate placed spells (player-major, position-ascending).
//! 2. Collect selected actions from occupied slots.
//! 3. Sort into resolution order (pump, defend, attack; stats break ties).
//! 4. Resolve each action in order against the *live* board, so a monster
//!    destroyed early in the pass cannot act later in it.
//!
//! The pass returns a [`BattleReport`]; pacing its playback is the
//! presentation layer's business.

pub mod damage;
pub mod order;
pub mod report;
pub mod spells;

use log::debug;

use crate::actions::{ActionCategory, ActionKind};
use crate::core::Lane;
use crate::state::MatchState;

pub use damage::strike_damage;
pub use order::{collect_actions, sort_actions, BattleAction};
pub use report::{ActionRecord, AttackOutcome, BattleReport, SpellRecord, StatLine};
pub use spells::activate_spells;

/// Resolve the battle phase in one deterministic pass.
pub fn resolve_battle(state: &mut MatchState) -> BattleReport {
    let spells = activate_spells(state);

    let mut queue = collect_actions(state);
    sort_actions(&mut queue);

    let mut actions = Vec::with_capacity(queue.len());
    for queued in &queue {
        actions.push(resolve_action(state, queued));
    }

    BattleReport {
        turn: state.turn,
        spells,
        actions,
    }
}

fn resolve_action(state: &mut MatchState, queued: &BattleAction) -> ActionRecord {
    match queued.action.category() {
        ActionCategory::Pump => resolve_pump(state, queued),
        ActionCategory::Defend => ActionRecord::Defend {
            player: queued.player,
            lane: queued.lane,
            monster: queued.monster.clone(),
        },
        ActionCategory::Attack => resolve_attack(state, queued),
        ActionCategory::Special => ActionRecord::Attack {
            player: queued.player,
            lane: queued.lane,
            monster: queued.monster.clone(),
            action: queued.action,
            target_lane: None,
            outcome: AttackOutcome::NoOp,
        },
    }
}

/// Pump stats were applied when the action was selected; resolution only
/// reconstructs the before/after pair for the report.
fn resolve_pump(state: &MatchState, queued: &BattleAction) -> ActionRecord {
    let after = queued.stats;
    let before = match state.player(queued.player).monster(queued.lane) {
        Some(card) => {
            let (attack, defense, speed) = card.pump_deltas();
            StatLine {
                attack: after.attack - attack,
                defense: after.defense - defense,
                speed: after.speed - speed,
            }
        }
        None => after,
    };
    ActionRecord::Pump {
        player: queued.player,
        lane: queued.lane,
        monster: queued.monster.clone(),
        before,
        after,
    }
}

fn resolve_attack(state: &mut MatchState, queued: &BattleAction) -> ActionRecord {
    let record = |target_lane, outcome| ActionRecord::Attack {
        player: queued.player,
        lane: queued.lane,
        monster: queued.monster.clone(),
        action: queued.action,
        target_lane,
        outcome,
    };

    // Re-read the attacker: it may have been destroyed earlier in the pass.
    let attack = match state.player(queued.player).monster(queued.lane) {
        Some(card) if card.name == queued.monster => card.attack,
        _ => {
            debug!(
                "{} in the {} lane left the board before attacking",
                queued.monster, queued.lane
            );
            return record(None, AttackOutcome::Cancelled);
        }
    };

    let Some(target_lane) = queued.action.target_lane(queued.lane) else {
        debug!(
            "{} attacks off the board from the {} lane",
            queued.monster, queued.lane
        );
        return record(None, AttackOutcome::NoOp);
    };

    let foe = state.player_mut(queued.player.opponent());

    if target_lane == Lane::Champion && !champion_lane_open(foe, queued.lane) {
        debug!(
            "{} may not strike the champion lane from the {} lane yet",
            queued.monster, queued.lane
        );
        return record(Some(target_lane), AttackOutcome::NoOp);
    }

    let idx = target_lane.index();
    let outcome = match foe.board[idx].as_mut() {
        Some(defender) => {
            if foe.selected_actions[idx] == Some(ActionKind::Defend) {
                AttackOutcome::Blocked {
                    target: defender.name.clone(),
                }
            } else {
                let damage = strike_damage(attack, defender.attack, defender.defense);
                if damage >= defender.defense {
                    let excess = damage - defender.defense;
                    let destroyed = foe
                        .destroy_monster(target_lane)
                        .unwrap_or_else(|| unreachable!("slot was just occupied"));
                    let lane_health_after = foe.damage_lane(target_lane, excess);
                    AttackOutcome::MonsterDestroyed {
                        target: destroyed.name,
                        damage,
                        excess,
                        lane_health_after,
                    }
                } else {
                    defender.defense -= damage;
                    AttackOutcome::MonsterHit {
                        target: defender.name.clone(),
                        damage,
                        defense_after: defender.defense,
                    }
                }
            }
        }
        None => {
            let lane_health_after = foe.damage_lane(target_lane, attack);
            AttackOutcome::LaneHit {
                damage: attack,
                lane_health_after,
            }
        }
    };

    record(Some(target_lane), outcome)
}

/// May an attacker in `from` strike the opponent's champion lane?
///
/// The champion's column opens only once the attacker's facing side lane
/// is destroyed: a left-lane attacker needs the opponent's left lane at 0,
/// a right-lane attacker the right lane. The center slot itself must be
/// empty (it always is; monsters never occupy it).
fn champion_lane_open(foe: &crate::state::PlayerState, from: Lane) -> bool {
    if foe.board[Lane::Champion.index()].is_some() {
        return false;
    }
    match from {
        Lane::Left => foe.lane_health(Lane::Left) <= 0,
        Lane::Right => foe.lane_health(Lane::Right) <= 0,
        Lane::Champion => {
            foe.lane_health(Lane::Left) <= 0 || foe.lane_health(Lane::Right) <= 0
        }
    }
}
