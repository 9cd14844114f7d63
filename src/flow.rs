//! Match controller - the phase machine and command surface.
//!
//! ## Turn cycle
//!
//! `Setup → Draw → Strategy → Battle → End → Draw → …`, with `End →
//! GameOver` once a center lane falls. Draw and End are bookkeeping
//! phases that advance on their own; Strategy waits for player commands
//! and a countdown, Battle waits for the host to acknowledge the report.
//!
//! ## Timing
//!
//! The engine owns no wall clock. The host calls [`MatchController::tick`]
//! once per second during Strategy; reaching zero and a manual
//! [`MatchController::advance_phase`] trigger the same transition, guarded
//! so a late tick after a manual advance is a safe no-op.
//!
//! ## Ownership
//!
//! The controller is the single owner of the mutable [`MatchState`]; both
//! players' commands are serialized through it, and their strategy inputs
//! are consumed atomically at the Strategy→Battle transition.

use crate::actions::{available_actions, ActionKind};
use crate::battle::resolve_battle;
use crate::catalog::{CardKind, Catalog, ChampionAbility, HandCard};
use crate::core::{Lane, PlayerId};
use crate::error::CommandError;
use crate::events::{EventSink, GameEvent};
use crate::state::{MatchState, Phase};

/// Default strategy-phase countdown, in whole seconds.
pub const STRATEGY_SECONDS: u32 = 45;

/// Drives one match from deal to game over.
#[derive(Debug)]
pub struct MatchController<S: EventSink> {
    pub(crate) state: MatchState,
    sink: S,
    countdown: Option<u32>,
    strategy_seconds: u32,
}

impl<S: EventSink> MatchController<S> {
    /// Deal a new match. The match sits in `Setup` until [`Self::start`].
    #[must_use]
    pub fn new(seed: u64, catalog: &Catalog, sink: S) -> Self {
        Self {
            state: MatchState::deal(seed, catalog),
            sink,
            countdown: None,
            strategy_seconds: STRATEGY_SECONDS,
        }
    }

    /// Override the strategy countdown length.
    #[must_use]
    pub fn with_strategy_seconds(mut self, seconds: u32) -> Self {
        self.strategy_seconds = seconds;
        self
    }

    /// Drive an existing state, e.g. a restored snapshot or a crafted
    /// scenario. No countdown is running until the next strategy entry.
    #[must_use]
    pub fn from_state(state: MatchState, sink: S) -> Self {
        Self {
            state,
            sink,
            countdown: None,
            strategy_seconds: STRATEGY_SECONDS,
        }
    }

    /// Begin the first turn.
    pub fn start(&mut self) -> Result<(), CommandError> {
        if self.state.phase != Phase::Setup {
            return Err(CommandError::OutOfPhase(self.state.phase));
        }
        // The turn counter starts at 1 and only increments on later turns.
        self.enter_draw();
        Ok(())
    }

    /// The full match state, read-only.
    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Current 1-based turn.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.state.turn
    }

    /// The winner, once the match is over.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.state.winner
    }

    /// Seconds left on the strategy countdown, if one is running.
    #[must_use]
    pub fn countdown(&self) -> Option<u32> {
        self.countdown
    }

    /// The event sink.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Place a card from hand into a slot row.
    ///
    /// Strategy phase only. Monsters may replace a monster that has not
    /// fought (the displaced card returns to hand); spells may replace a
    /// placed spell, but not while a Mana Drain lock is active.
    pub fn place_card(
        &mut self,
        player: PlayerId,
        hand_index: usize,
        slot: CardKind,
        lane: Lane,
    ) -> Result<(), CommandError> {
        self.require_strategy()?;
        if !lane.is_side() {
            return Err(CommandError::ChampionLane);
        }

        let side = &self.state.players[player];
        let card = side
            .hand
            .get(hand_index)
            .ok_or(CommandError::BadHandIndex(hand_index))?;
        if card.kind() != slot {
            return Err(CommandError::SlotKindMismatch);
        }

        let idx = lane.index();
        match slot {
            CardKind::Monster => {
                if side.board[idx].is_some() && side.monsters_have_fought[idx] {
                    return Err(CommandError::ReplacementLocked(lane));
                }
            }
            CardKind::Spell => {
                if side.spells_locked {
                    return Err(CommandError::SpellsLocked);
                }
            }
        }

        let side = &mut self.state.players[player];
        let card = side.hand.remove(hand_index);
        match card {
            HandCard::Monster(monster) => {
                if let Some(mut displaced) = side.board[idx].replace(monster) {
                    // A displaced monster takes its unresolved pump back
                    // to hand and sheds this turn's flags.
                    if side.selected_actions[idx] == Some(ActionKind::Pump) {
                        displaced.revert_pump();
                    }
                    displaced.petrified = false;
                    displaced.frozen = false;
                    side.hand.push(HandCard::Monster(displaced));
                }
                side.selected_actions[idx] = None;
                side.defenders_on_cooldown[idx] = false;
            }
            HandCard::Spell(spell) => {
                if let Some(displaced) = side.spells[idx].replace(spell) {
                    side.hand.push(HandCard::Spell(displaced));
                }
            }
        }

        self.sink.emit(GameEvent::CardPlaced {
            player,
            kind: slot,
            lane,
        });
        Ok(())
    }

    /// Select (or re-select) the action a monster takes this turn.
    ///
    /// Last write wins. Selecting `Pump` applies the stat bonus
    /// immediately; switching away from `Pump` takes it back.
    pub fn select_action(
        &mut self,
        player: PlayerId,
        lane: Lane,
        action: ActionKind,
    ) -> Result<(), CommandError> {
        self.require_strategy()?;

        let side = &self.state.players[player];
        let Some(card) = side.monster(lane) else {
            return Err(CommandError::EmptySlot(lane));
        };
        if !available_actions(card, lane, side).contains(&action) {
            return Err(CommandError::IllegalAction(lane));
        }

        let side = &mut self.state.players[player];
        let idx = lane.index();
        let previous = side.selected_actions[idx];
        let card = side.board[idx]
            .as_mut()
            .unwrap_or_else(|| unreachable!("slot occupancy checked above"));

        if previous == Some(ActionKind::Pump) && action != ActionKind::Pump {
            card.revert_pump();
        }
        if action == ActionKind::Pump && previous != Some(ActionKind::Pump) {
            card.apply_pump();
        }
        side.selected_actions[idx] = Some(action);
        Ok(())
    }

    /// Activate the player's champion ability, at most once per turn.
    ///
    /// Freeze disables an opponent monster for the turn; Heal restores
    /// an own monster's defense, or the center lane when targeting it.
    /// Other abilities are not wired and are declined.
    pub fn activate_champion_ability(
        &mut self,
        player: PlayerId,
        lane: Lane,
    ) -> Result<(), CommandError> {
        self.require_strategy()?;
        if self.state.players[player].ability_used {
            return Err(CommandError::AbilityUnavailable);
        }

        match self.state.players[player].champion.ability {
            ChampionAbility::Freeze => {
                let foe = &mut self.state.players[player.opponent()];
                let idx = lane.index();
                let Some(card) = foe.board[idx].as_mut() else {
                    return Err(CommandError::EmptySlot(lane));
                };
                card.frozen = true;
                if foe.selected_actions[idx] == Some(ActionKind::Pump) {
                    card.revert_pump();
                }
                foe.selected_actions[idx] = None;
            }
            ChampionAbility::Heal => {
                let side = &mut self.state.players[player];
                if lane == Lane::Champion {
                    side.lanes[lane.index()] += 3;
                } else {
                    let Some(card) = side.board[lane.index()].as_mut() else {
                        return Err(CommandError::EmptySlot(lane));
                    };
                    card.defense += 3;
                }
            }
            _ => return Err(CommandError::AbilityUnavailable),
        }

        self.state.players[player].ability_used = true;
        Ok(())
    }

    /// Advance one second of strategy countdown.
    ///
    /// Outside the strategy phase this is a no-op.
    pub fn tick(&mut self) {
        if self.state.phase != Phase::Strategy {
            return;
        }
        if let Some(remaining) = self.countdown {
            let remaining = remaining.saturating_sub(1);
            self.countdown = Some(remaining);
            if remaining == 0 {
                self.enter_battle();
            }
        }
    }

    /// Force the next phase transition.
    pub fn advance_phase(&mut self) -> Result<(), CommandError> {
        match self.state.phase {
            Phase::Strategy => {
                self.enter_battle();
                Ok(())
            }
            Phase::Battle => {
                self.enter_end();
                Ok(())
            }
            Phase::GameOver => Err(CommandError::MatchOver),
            phase => Err(CommandError::OutOfPhase(phase)),
        }
    }

    fn require_strategy(&self) -> Result<(), CommandError> {
        if self.state.winner.is_some() {
            return Err(CommandError::MatchOver);
        }
        if self.state.phase != Phase::Strategy {
            return Err(CommandError::OutOfPhase(self.state.phase));
        }
        Ok(())
    }

    fn emit_phase(&mut self) {
        self.sink.emit(GameEvent::PhaseChanged {
            phase: self.state.phase,
            turn: self.state.turn,
            winner: self.state.winner,
        });
    }

    fn enter_draw(&mut self) {
        self.state.phase = Phase::Draw;
        self.emit_phase();
        for player in PlayerId::both() {
            self.state.players[player].draw_card();
        }
        self.enter_strategy();
    }

    fn enter_strategy(&mut self) {
        self.state.phase = Phase::Strategy;
        for player in PlayerId::both() {
            let side = &mut self.state.players[player];
            side.selected_actions = [None, None, None];
            side.ability_used = false;
        }
        self.countdown = Some(self.strategy_seconds);
        self.emit_phase();
    }

    fn enter_battle(&mut self) {
        // Idempotent: a late tick after a manual advance lands here again.
        if self.state.phase != Phase::Strategy {
            return;
        }
        self.state.phase = Phase::Battle;
        self.countdown = None;
        self.emit_phase();
        let report = resolve_battle(&mut self.state);
        self.sink.emit(GameEvent::BattleResolved(report));
    }

    fn enter_end(&mut self) {
        self.state.phase = Phase::End;
        self.emit_phase();

        for player in PlayerId::both() {
            let side = &mut self.state.players[player];
            for idx in 0..3 {
                side.defenders_on_cooldown[idx] = side.board[idx].is_some()
                    && side.selected_actions[idx] == Some(ActionKind::Defend);
                if let Some(card) = side.board[idx].as_mut() {
                    side.monsters_have_fought[idx] = true;
                    card.petrified = false;
                    card.frozen = false;
                }
            }
            side.spells_locked = side.spell_lock_pending;
            side.spell_lock_pending = false;
        }

        for player in PlayerId::both() {
            if self.state.players[player].is_defeated() {
                self.state.winner = Some(player.opponent());
                break;
            }
        }

        if self.state.winner.is_some() {
            self.state.phase = Phase::GameOver;
            self.emit_phase();
        } else {
            self.state.turn += 1;
            self.enter_draw();
        }
    }
}
