//! Runtime card state - copies of definitions in play.
//!
//! A card in play owns its mutable stats; pump actions, spells and champion
//! abilities modify the copy, never the catalog definition.

use serde::{Deserialize, Serialize};

use super::definition::{
    BonusStat, ChampionAbility, ChampionDef, MonsterClass, MonsterDef, SpellDef, SpellEffect,
};

/// Kind of card a hand card or board slot holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Monster,
    Spell,
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardKind::Monster => write!(f, "monster"),
            CardKind::Spell => write!(f, "spell"),
        }
    }
}

/// A monster in play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterCard {
    pub name: String,
    pub class: MonsterClass,
    pub attack: i32,
    pub defense: i32,
    pub speed: i32,
    pub bonus_stat: Option<BonusStat>,
    /// Petrified this turn; no actions until the end phase clears it.
    pub petrified: bool,
    /// Frozen this turn by a champion ability.
    pub frozen: bool,
}

impl MonsterCard {
    /// Instantiate a monster from its definition.
    #[must_use]
    pub fn from_def(def: &MonsterDef) -> Self {
        Self {
            name: def.name.clone(),
            class: def.class,
            attack: def.attack,
            defense: def.defense,
            speed: def.speed,
            bonus_stat: def.bonus_stat,
            petrified: false,
            frozen: false,
        }
    }

    /// Is this monster unable to act this turn?
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.petrified || self.frozen
    }

    /// Per-stat deltas a pump applies: +1 to each stat, +2 to the
    /// favored stat when the card has one.
    #[must_use]
    pub fn pump_deltas(&self) -> (i32, i32, i32) {
        let mut deltas = (1, 1, 1);
        match self.bonus_stat {
            Some(BonusStat::Attack) => deltas.0 = 2,
            Some(BonusStat::Defense) => deltas.1 = 2,
            Some(BonusStat::Speed) => deltas.2 = 2,
            None => {}
        }
        deltas
    }

    /// Apply a pump to this card's stats.
    pub fn apply_pump(&mut self) {
        let (atk, def, spd) = self.pump_deltas();
        self.attack += atk;
        self.defense += def;
        self.speed += spd;
    }

    /// Undo a previously applied pump.
    pub fn revert_pump(&mut self) {
        let (atk, def, spd) = self.pump_deltas();
        self.attack -= atk;
        self.defense -= def;
        self.speed -= spd;
    }
}

/// A spell in hand or placed in a spell slot, waiting for battle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellCard {
    pub name: String,
    pub effect: SpellEffect,
}

impl SpellCard {
    /// Instantiate a spell from its definition.
    #[must_use]
    pub fn from_def(def: &SpellDef) -> Self {
        Self {
            name: def.name.clone(),
            effect: def.effect,
        }
    }
}

/// A player's champion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Champion {
    pub name: String,
    pub attack: i32,
    pub defense: i32,
    pub speed: i32,
    pub ability: ChampionAbility,
}

impl Champion {
    /// Instantiate a champion from its definition.
    #[must_use]
    pub fn from_def(def: &ChampionDef) -> Self {
        Self {
            name: def.name.clone(),
            attack: def.attack,
            defense: def.defense,
            speed: def.speed,
            ability: def.ability,
        }
    }
}

/// A card in a hand or deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandCard {
    Monster(MonsterCard),
    Spell(SpellCard),
}

impl HandCard {
    /// What kind of slot this card goes to.
    #[must_use]
    pub fn kind(&self) -> CardKind {
        match self {
            HandCard::Monster(_) => CardKind::Monster,
            HandCard::Spell(_) => CardKind::Spell,
        }
    }

    /// The card's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            HandCard::Monster(card) => &card.name,
            HandCard::Spell(card) => &card.name,
        }
    }
}
