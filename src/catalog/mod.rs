//! Card catalog - definitions and the standard card pool.
//!
//! A `Catalog` owns every definition a match may deal from and offers
//! name-based lookup. `Catalog::standard()` ships the stock pool of five
//! champions, fourteen monsters and thirteen spells.

pub mod card;
pub mod definition;

use rustc_hash::FxHashMap;
use serde::Serialize;

pub use card::{CardKind, Champion, HandCard, MonsterCard, SpellCard};
pub use definition::{
    BonusStat, ChampionAbility, ChampionDef, MonsterClass, MonsterDef, SpellDef, SpellEffect,
};

/// The pool of card definitions a match deals from.
///
/// Serializable for inspection; reconstructed in code (the name indexes
/// are derived data, not part of the wire shape).
#[derive(Clone, Debug, Default, Serialize)]
pub struct Catalog {
    champions: Vec<ChampionDef>,
    monsters: Vec<MonsterDef>,
    spells: Vec<SpellDef>,
    #[serde(skip)]
    champion_index: FxHashMap<String, usize>,
    #[serde(skip)]
    monster_index: FxHashMap<String, usize>,
    #[serde(skip)]
    spell_index: FxHashMap<String, usize>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard card pool.
    #[must_use]
    pub fn standard() -> Self {
        use ChampionAbility as A;
        use MonsterClass as C;

        let mut catalog = Self::new();

        catalog.add_champion(ChampionDef::new("Invictus", 3, 20, 3, A::Pierce));
        catalog.add_champion(ChampionDef::new("Frost Sentinel", 4, 18, 4, A::Freeze));
        catalog.add_champion(ChampionDef::new("Flamewarden", 6, 15, 5, A::Splash));
        catalog.add_champion(ChampionDef::new("Ethereal Wisper", 3, 25, 2, A::Heal));
        catalog.add_champion(ChampionDef::new("Stormbringer", 7, 14, 6, A::MultiAttack));

        catalog.add_monster(MonsterDef::new("Iron Guardian", C::Defender, 3, 8, 2));
        catalog.add_monster(
            MonsterDef::new("Arcane Pumper", C::Pumper, 2, 6, 4).with_bonus(BonusStat::Attack),
        );
        catalog.add_monster(MonsterDef::new("Swift Striker", C::AllRounder, 4, 4, 8));
        catalog.add_monster(MonsterDef::new("Earthen Bulwark", C::Defender, 2, 10, 3));
        catalog.add_monster(
            MonsterDef::new("Windcharger", C::Pumper, 3, 5, 7).with_bonus(BonusStat::Speed),
        );
        catalog.add_monster(MonsterDef::new("Shadow Hunter", C::AllRounder, 5, 3, 6));
        catalog.add_monster(MonsterDef::new("Aquatic Golem", C::Defender, 4, 8, 2));
        catalog.add_monster(
            MonsterDef::new("Pyro Fiend", C::Pumper, 6, 4, 4).with_bonus(BonusStat::Defense),
        );
        catalog.add_monster(MonsterDef::new("Lightning Bolt", C::AllRounder, 7, 2, 9));
        catalog.add_monster(MonsterDef::new("Noble Knight", C::Defender, 4, 7, 3));
        catalog.add_monster(MonsterDef::new("Mystic Channel", C::Pumper, 3, 5, 5));
        catalog.add_monster(MonsterDef::new("Warped Archer", C::AllRounder, 5, 4, 7));
        catalog.add_monster(MonsterDef::new("Stone Protector", C::Defender, 3, 9, 2));
        catalog.add_monster(MonsterDef::new("Life Leech", C::Pumper, 2, 6, 6));

        catalog.add_spell(SpellDef::new("Power Surge"));
        catalog.add_spell(SpellDef::new("Healing Wave"));
        catalog.add_spell(SpellDef::new("Blinding Flash"));
        catalog.add_spell(SpellDef::new("Defensive Barrier"));
        catalog.add_spell(SpellDef::new("Speed Boost"));
        catalog.add_spell(SpellDef::new("Mana Drain"));
        catalog.add_spell(SpellDef::new("Summoner's Call"));
        catalog.add_spell(SpellDef::new("Unholy Frenzy"));
        catalog.add_spell(SpellDef::new("Teleport"));
        catalog.add_spell(SpellDef::new("Quicksand"));
        catalog.add_spell(SpellDef::new("Petrify"));
        catalog.add_spell(SpellDef::new("Sacrificial Ritual"));
        catalog.add_spell(SpellDef::new("Elemental Shift"));

        catalog
    }

    /// Register a champion definition.
    pub fn add_champion(&mut self, def: ChampionDef) {
        self.champion_index
            .insert(def.name.clone(), self.champions.len());
        self.champions.push(def);
    }

    /// Register a monster definition.
    pub fn add_monster(&mut self, def: MonsterDef) {
        self.monster_index
            .insert(def.name.clone(), self.monsters.len());
        self.monsters.push(def);
    }

    /// Register a spell definition.
    pub fn add_spell(&mut self, def: SpellDef) {
        self.spell_index.insert(def.name.clone(), self.spells.len());
        self.spells.push(def);
    }

    /// All champion definitions.
    #[must_use]
    pub fn champions(&self) -> &[ChampionDef] {
        &self.champions
    }

    /// All monster definitions.
    #[must_use]
    pub fn monsters(&self) -> &[MonsterDef] {
        &self.monsters
    }

    /// All spell definitions.
    #[must_use]
    pub fn spells(&self) -> &[SpellDef] {
        &self.spells
    }

    /// Look up a champion by name.
    #[must_use]
    pub fn champion(&self, name: &str) -> Option<&ChampionDef> {
        self.champion_index.get(name).map(|&i| &self.champions[i])
    }

    /// Look up a monster by name.
    #[must_use]
    pub fn monster(&self, name: &str) -> Option<&MonsterDef> {
        self.monster_index.get(name).map(|&i| &self.monsters[i])
    }

    /// Look up a spell by name.
    #[must_use]
    pub fn spell(&self, name: &str) -> Option<&SpellDef> {
        self.spell_index.get(name).map(|&i| &self.spells[i])
    }
}
