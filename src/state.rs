//! Match state - the single mutable owner of everything in a duel.
//!
//! ## Board shape
//!
//! Per player: a deck (drawn from the end), a hand, an append-only
//! graveyard, and three parallel slot rows of length 3 (monsters, spells,
//! selected actions) where index 1 is the champion's column and stays
//! empty. Lane health is `[left, center, right]`; side lanes start at 5,
//! the center lane at the champion's defense. Lane health clamps at 0 and
//! never recovers (the Heal champion ability on the center lane is the one
//! defined exception).
//!
//! ## Mutation discipline
//!
//! All mutation flows through [`crate::flow::MatchController`]; this
//! module only offers the state types and their local bookkeeping.

use im::Vector;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::actions::ActionKind;
use crate::catalog::{Catalog, Champion, HandCard, MonsterCard, SpellCard};
use crate::core::{GameRng, Lane, PlayerId, PlayerPair};

/// Starting health of each side lane.
pub const SIDE_LANE_HEALTH: i32 = 5;

/// Phase of the turn cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Setup,
    Draw,
    Strategy,
    Battle,
    End,
    GameOver,
}

/// Everything one player owns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub champion: Champion,
    /// Draw pile; cards are drawn from the end.
    pub deck: Vec<HandCard>,
    pub hand: Vec<HandCard>,
    /// Destroyed monsters, in destruction order.
    pub graveyard: Vector<MonsterCard>,
    /// Monster slots; index 1 stays empty.
    pub board: [Option<MonsterCard>; 3],
    /// Spell slots; index 1 stays empty.
    pub spells: [Option<SpellCard>; 3],
    /// Action selected for the monster in each slot this turn.
    pub selected_actions: [Option<ActionKind>; 3],
    /// Slots whose defender defended last turn and must rest this turn.
    pub defenders_on_cooldown: [bool; 3],
    /// Slots whose monster has survived a battle and is locked in place.
    pub monsters_have_fought: [bool; 3],
    /// Lane health `[left, center, right]`.
    pub lanes: [i32; 3],
    /// Spell placement is locked for the current turn.
    pub spells_locked: bool,
    /// A Mana Drain resolved this battle; the lock arms at the end phase.
    pub spell_lock_pending: bool,
    /// The champion's ability was activated this turn.
    pub ability_used: bool,
}

impl PlayerState {
    /// Create a fresh player state around a champion.
    #[must_use]
    pub fn new(champion: Champion) -> Self {
        let center_health = champion.defense;
        Self {
            champion,
            deck: Vec::new(),
            hand: Vec::new(),
            graveyard: Vector::new(),
            board: [None, None, None],
            spells: [None, None, None],
            selected_actions: [None, None, None],
            defenders_on_cooldown: [false; 3],
            monsters_have_fought: [false; 3],
            lanes: [SIDE_LANE_HEALTH, center_health, SIDE_LANE_HEALTH],
            spells_locked: false,
            spell_lock_pending: false,
            ability_used: false,
        }
    }

    /// The monster in a lane, if any.
    #[must_use]
    pub fn monster(&self, lane: Lane) -> Option<&MonsterCard> {
        self.board[lane.index()].as_ref()
    }

    /// A lane's current health.
    #[must_use]
    pub fn lane_health(&self, lane: Lane) -> i32 {
        self.lanes[lane.index()]
    }

    /// Is this player's center lane destroyed?
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.lanes[Lane::Champion.index()] <= 0
    }

    /// Draw one card from the deck into the hand.
    ///
    /// An empty deck is not fatal; the draw simply yields nothing.
    pub fn draw_card(&mut self) -> bool {
        match self.deck.pop() {
            Some(card) => {
                self.hand.push(card);
                true
            }
            None => {
                warn!("deck is empty, draw skipped");
                false
            }
        }
    }

    /// Move the monster in a lane to the graveyard.
    ///
    /// Clears the slot's per-slot flags so an empty slot never carries a
    /// fought lock or a cooldown.
    pub fn destroy_monster(&mut self, lane: Lane) -> Option<MonsterCard> {
        let idx = lane.index();
        let card = self.board[idx].take()?;
        self.selected_actions[idx] = None;
        self.monsters_have_fought[idx] = false;
        self.defenders_on_cooldown[idx] = false;
        self.graveyard.push_back(card.clone());
        Some(card)
    }

    /// Apply direct damage to a lane, clamping at 0.
    pub fn damage_lane(&mut self, lane: Lane, amount: i32) -> i32 {
        let idx = lane.index();
        self.lanes[idx] = (self.lanes[idx] - amount).max(0);
        self.lanes[idx]
    }
}

/// Complete state of one match.
#[derive(Clone, Debug)]
pub struct MatchState {
    pub players: PlayerPair<PlayerState>,
    pub phase: Phase,
    /// 1-based turn counter.
    pub turn: u32,
    pub rng: GameRng,
    pub winner: Option<PlayerId>,
}

impl MatchState {
    /// Deal a new match from a catalog.
    ///
    /// Each player gets a random champion, five random monsters in hand
    /// and ten random spells as the deck. The state starts in `Setup`;
    /// the controller advances it into the first turn.
    #[must_use]
    pub fn deal(seed: u64, catalog: &Catalog) -> Self {
        let mut rng = GameRng::new(seed);
        let players = PlayerPair::new(|_| Self::deal_player(&mut rng, catalog));
        Self {
            players,
            phase: Phase::Setup,
            turn: 1,
            rng,
            winner: None,
        }
    }

    fn deal_player(rng: &mut GameRng, catalog: &Catalog) -> PlayerState {
        let champion_idx = rng.gen_range_usize(0..catalog.champions().len());
        let champion = Champion::from_def(&catalog.champions()[champion_idx]);
        let mut player = PlayerState::new(champion);

        let mut monster_indices: Vec<usize> = (0..catalog.monsters().len()).collect();
        rng.shuffle(&mut monster_indices);
        for &i in monster_indices.iter().take(5) {
            player
                .hand
                .push(HandCard::Monster(MonsterCard::from_def(
                    &catalog.monsters()[i],
                )));
        }

        let mut spell_indices: Vec<usize> = (0..catalog.spells().len()).collect();
        rng.shuffle(&mut spell_indices);
        for &i in spell_indices.iter().take(10) {
            player
                .deck
                .push(HandCard::Spell(SpellCard::from_def(&catalog.spells()[i])));
        }

        player
    }

    /// One player's state.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &PlayerState {
        &self.players[id]
    }

    /// One player's state, mutably.
    pub fn player_mut(&mut self, id: PlayerId) -> &mut PlayerState {
        &mut self.players[id]
    }
}
