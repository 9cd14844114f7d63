//! Card definitions - immutable card templates.
//!
//! Definitions are the catalog side of the definition/instance split:
//! a `MonsterDef` describes a printed card, a `MonsterCard` (see
//! [`crate::catalog::card`]) is a copy of it in play with mutable stats.
//!
//! ## Effect tagging
//!
//! Behavior is carried by closed enums (`BonusStat`, `SpellEffect`,
//! `ChampionAbility`) resolved once when a definition is constructed from
//! display text, so the battle engine dispatches on tags rather than
//! re-scanning strings at resolution time. Text that matches no known
//! effect maps to `SpellEffect::Unknown` and resolves as a logged no-op.

use serde::{Deserialize, Serialize};

/// Behavioral class of a monster, which determines its action set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonsterClass {
    /// May defend (when not on cooldown).
    Defender,
    /// May pump its own stats.
    Pumper,
    /// May attack diagonally.
    AllRounder,
    /// Vertical attacks only.
    PlainAttacker,
}

/// The stat a Pumper's pump favors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BonusStat {
    Attack,
    Defense,
    Speed,
}

impl BonusStat {
    /// Parse the favored stat from pump effect text.
    ///
    /// Returns `None` when the text names no stat; such a Pumper pumps
    /// all three stats evenly.
    #[must_use]
    pub fn parse(text: &str) -> Option<BonusStat> {
        if text.contains("Attack") {
            Some(BonusStat::Attack)
        } else if text.contains("Defense") {
            Some(BonusStat::Defense)
        } else if text.contains("Speed") {
            Some(BonusStat::Speed)
        } else {
            None
        }
    }
}

/// One-shot spell behavior, one variant per spell in the standard pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpellEffect {
    /// +3 attack to the own monster in the spell's lane.
    PowerSurge,
    /// +2 defense to all own monsters.
    HealingWave,
    /// -2 attack (floor 0) to all opponent monsters.
    BlindingFlash,
    /// +3 defense to the own monster in the spell's lane.
    DefensiveBarrier,
    /// +3 speed to the own monster in the spell's lane.
    SpeedBoost,
    /// Opponent may place no spells next turn.
    ManaDrain,
    /// Draw two cards.
    SummonersCall,
    /// +2 attack / -1 defense (floor 1) to the own monster in the lane.
    UnholyFrenzy,
    /// Swap the own left and right monsters.
    Teleport,
    /// -2 speed (floor 1) to all opponent monsters.
    Quicksand,
    /// Petrify the opponent monster in the lane for this turn.
    Petrify,
    /// Destroy the own monster in the lane; its attack hits the facing lane.
    SacrificialRitual,
    /// Swap attack and defense of the own monster in the lane.
    ElementalShift,
    /// Unrecognized effect text; resolves as a logged no-op.
    Unknown,
}

impl SpellEffect {
    /// Resolve a spell name to its effect tag.
    #[must_use]
    pub fn from_name(name: &str) -> SpellEffect {
        match name {
            "Power Surge" => SpellEffect::PowerSurge,
            "Healing Wave" => SpellEffect::HealingWave,
            "Blinding Flash" => SpellEffect::BlindingFlash,
            "Defensive Barrier" => SpellEffect::DefensiveBarrier,
            "Speed Boost" => SpellEffect::SpeedBoost,
            "Mana Drain" => SpellEffect::ManaDrain,
            "Summoner's Call" => SpellEffect::SummonersCall,
            "Unholy Frenzy" => SpellEffect::UnholyFrenzy,
            "Teleport" => SpellEffect::Teleport,
            "Quicksand" => SpellEffect::Quicksand,
            "Petrify" => SpellEffect::Petrify,
            "Sacrificial Ritual" => SpellEffect::SacrificialRitual,
            "Elemental Shift" => SpellEffect::ElementalShift,
            _ => SpellEffect::Unknown,
        }
    }
}

/// A champion's signature ability.
///
/// Only `Freeze` and `Heal` are wired into the rules; the others are
/// catalog markers and activation for them is declined.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChampionAbility {
    Pierce,
    Freeze,
    Splash,
    Heal,
    MultiAttack,
}

/// An immutable monster template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterDef {
    pub name: String,
    pub class: MonsterClass,
    pub attack: i32,
    pub defense: i32,
    pub speed: i32,
    /// Favored pump stat; only meaningful for `MonsterClass::Pumper`.
    pub bonus_stat: Option<BonusStat>,
}

impl MonsterDef {
    /// Create a monster definition.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        class: MonsterClass,
        attack: i32,
        defense: i32,
        speed: i32,
    ) -> Self {
        Self {
            name: name.into(),
            class,
            attack,
            defense,
            speed,
            bonus_stat: None,
        }
    }

    /// Set the favored pump stat.
    #[must_use]
    pub fn with_bonus(mut self, stat: BonusStat) -> Self {
        self.bonus_stat = Some(stat);
        self
    }
}

/// An immutable spell template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellDef {
    pub name: String,
    pub effect: SpellEffect,
}

impl SpellDef {
    /// Create a spell definition, resolving the effect tag from the name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let effect = SpellEffect::from_name(&name);
        Self { name, effect }
    }
}

/// An immutable champion template.
///
/// The champion's defense seeds the center lane's health.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChampionDef {
    pub name: String,
    pub attack: i32,
    pub defense: i32,
    pub speed: i32,
    pub ability: ChampionAbility,
}

impl ChampionDef {
    /// Create a champion definition.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        attack: i32,
        defense: i32,
        speed: i32,
        ability: ChampionAbility,
    ) -> Self {
        Self {
            name: name.into(),
            attack,
            defense,
            speed,
            ability,
        }
    }
}
