//! Battle actions and per-monster availability.
//!
//! The action alphabet is closed: every monster attacks vertically, and
//! its class adds at most one or two extras. `available_actions` is the
//! single source of truth for what a monster may do this turn; the
//! command layer and the opponent policy both consult it.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::catalog::{MonsterCard, MonsterClass};
use crate::core::Lane;
use crate::state::PlayerState;

/// An action a monster can take in battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// Attack the facing lane.
    AttackVertical,
    /// Attack one column to the left.
    AttackDiagonalLeft,
    /// Attack one column to the right.
    AttackDiagonalRight,
    /// Defensive stance; nullifies incoming damage this turn.
    Defend,
    /// Raise own stats.
    Pump,
    /// Reserved; resolves as a no-op.
    Special,
}

/// Resolution category. Lower categories resolve first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ActionCategory {
    Pump,
    Defend,
    Attack,
    Special,
}

impl ActionKind {
    /// The resolution category this action sorts under.
    #[must_use]
    pub fn category(self) -> ActionCategory {
        match self {
            ActionKind::Pump => ActionCategory::Pump,
            ActionKind::Defend => ActionCategory::Defend,
            ActionKind::AttackVertical
            | ActionKind::AttackDiagonalLeft
            | ActionKind::AttackDiagonalRight => ActionCategory::Attack,
            ActionKind::Special => ActionCategory::Special,
        }
    }

    /// Is this an attack?
    #[must_use]
    pub fn is_attack(self) -> bool {
        self.category() == ActionCategory::Attack
    }

    /// The opponent column an attack from `from` lands in.
    ///
    /// `None` for non-attacks and for diagonals that leave the board.
    #[must_use]
    pub fn target_lane(self, from: Lane) -> Option<Lane> {
        match self {
            ActionKind::AttackVertical => Some(from),
            ActionKind::AttackDiagonalLeft => from.left(),
            ActionKind::AttackDiagonalRight => from.right(),
            _ => None,
        }
    }
}

/// The actions a monster may select this turn.
///
/// Petrified or frozen monsters have none. Defenders lose `Defend` while
/// on cooldown; diagonals are bounded by the board edge.
#[must_use]
pub fn available_actions(
    card: &MonsterCard,
    lane: Lane,
    player: &PlayerState,
) -> SmallVec<[ActionKind; 4]> {
    let mut actions = SmallVec::new();
    if card.is_disabled() {
        return actions;
    }

    actions.push(ActionKind::AttackVertical);

    match card.class {
        MonsterClass::Defender => {
            if !player.defenders_on_cooldown[lane.index()] {
                actions.push(ActionKind::Defend);
            }
        }
        MonsterClass::Pumper => {
            actions.push(ActionKind::Pump);
        }
        MonsterClass::AllRounder => {
            if lane.left().is_some() {
                actions.push(ActionKind::AttackDiagonalLeft);
            }
            if lane.right().is_some() {
                actions.push(ActionKind::AttackDiagonalRight);
            }
        }
        MonsterClass::PlainAttacker => {}
    }

    actions
}
