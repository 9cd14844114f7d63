//! Structured battle reports.
//!
//! Resolution computes the whole battle in one pass and hands the
//! presentation layer a `BattleReport` it can play back at its own pace.
//! Records carry participants, before/after stats and outcomes.

use serde::{Deserialize, Serialize};

use crate::actions::ActionKind;
use crate::catalog::{MonsterCard, SpellEffect};
use crate::core::{Lane, PlayerId};

/// A monster's stats at a point in time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatLine {
    pub attack: i32,
    pub defense: i32,
    pub speed: i32,
}

impl StatLine {
    /// Snapshot a monster's current stats.
    #[must_use]
    pub fn of(card: &MonsterCard) -> Self {
        Self {
            attack: card.attack,
            defense: card.defense,
            speed: card.speed,
        }
    }
}

/// A spell that activated at the start of the battle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellRecord {
    pub player: PlayerId,
    pub lane: Lane,
    pub spell: String,
    pub effect: SpellEffect,
}

/// What an attack did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackOutcome {
    /// The attacker left the board before its action resolved.
    Cancelled,
    /// The attack had no legal target and resolved as a no-op.
    NoOp,
    /// The target was defending; damage was nullified.
    Blocked { target: String },
    /// The target survived the hit.
    MonsterHit {
        target: String,
        damage: i32,
        defense_after: i32,
    },
    /// The target was destroyed; excess damage spilled into its lane.
    MonsterDestroyed {
        target: String,
        damage: i32,
        excess: i32,
        lane_health_after: i32,
    },
    /// The lane was empty; the attack hit lane health directly.
    LaneHit { damage: i32, lane_health_after: i32 },
}

/// One resolved action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionRecord {
    Pump {
        player: PlayerId,
        lane: Lane,
        monster: String,
        before: StatLine,
        after: StatLine,
    },
    Defend {
        player: PlayerId,
        lane: Lane,
        monster: String,
    },
    Attack {
        player: PlayerId,
        lane: Lane,
        monster: String,
        action: ActionKind,
        target_lane: Option<Lane>,
        outcome: AttackOutcome,
    },
}

/// The complete record of one battle phase.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleReport {
    pub turn: u32,
    /// Spell activations, in activation order.
    pub spells: Vec<SpellRecord>,
    /// Resolved actions, in resolution order.
    pub actions: Vec<ActionRecord>,
}
