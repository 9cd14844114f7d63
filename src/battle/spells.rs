//! Spell activation - the opening pass of battle resolution.
//!
//! Spells fire before any action is collected, player-major (first
//! player's slots, then the second's) and position-ascending within a
//! player. Each spell is one-shot: its slot is cleared on activation.

use log::debug;

use crate::actions::ActionKind;
use crate::catalog::{SpellCard, SpellEffect};
use crate::core::{Lane, PlayerId};
use crate::state::MatchState;

use super::report::SpellRecord;

/// Activate and clear every placed spell, in activation order.
pub fn activate_spells(state: &mut MatchState) -> Vec<SpellRecord> {
    let mut records = Vec::new();
    for player in PlayerId::both() {
        for lane in Lane::SIDES {
            let Some(spell) = state.players[player].spells[lane.index()].take() else {
                continue;
            };
            apply_spell(state, player, lane, &spell);
            records.push(SpellRecord {
                player,
                lane,
                spell: spell.name,
                effect: spell.effect,
            });
        }
    }
    records
}

fn apply_spell(state: &mut MatchState, player: PlayerId, lane: Lane, spell: &SpellCard) {
    let idx = lane.index();
    let (own, foe) = state.players.split_mut(player);

    match spell.effect {
        SpellEffect::PowerSurge => {
            if let Some(card) = own.board[idx].as_mut() {
                card.attack += 3;
            }
        }
        SpellEffect::HealingWave => {
            for card in own.board.iter_mut().flatten() {
                card.defense += 2;
            }
        }
        SpellEffect::BlindingFlash => {
            for card in foe.board.iter_mut().flatten() {
                card.attack = (card.attack - 2).max(0);
            }
        }
        SpellEffect::DefensiveBarrier => {
            if let Some(card) = own.board[idx].as_mut() {
                card.defense += 3;
            }
        }
        SpellEffect::SpeedBoost => {
            if let Some(card) = own.board[idx].as_mut() {
                card.speed += 3;
            }
        }
        SpellEffect::ManaDrain => {
            foe.spell_lock_pending = true;
        }
        SpellEffect::SummonersCall => {
            own.draw_card();
            own.draw_card();
        }
        SpellEffect::UnholyFrenzy => {
            if let Some(card) = own.board[idx].as_mut() {
                card.attack += 2;
                card.defense = (card.defense - 1).max(1);
            }
        }
        SpellEffect::Teleport => {
            // Only swaps when both side slots are occupied.
            if own.board[0].is_some() && own.board[2].is_some() {
                own.board.swap(0, 2);
            }
        }
        SpellEffect::Quicksand => {
            for card in foe.board.iter_mut().flatten() {
                card.speed = (card.speed - 2).max(1);
            }
        }
        SpellEffect::Petrify => {
            if let Some(card) = foe.board[idx].as_mut() {
                card.petrified = true;
                // Cancel the victim's action; an already-applied pump
                // is taken back with it.
                if foe.selected_actions[idx] == Some(ActionKind::Pump) {
                    card.revert_pump();
                }
                foe.selected_actions[idx] = None;
            }
        }
        SpellEffect::SacrificialRitual => {
            if let Some(card) = own.destroy_monster(lane) {
                foe.damage_lane(lane, card.attack);
            }
        }
        SpellEffect::ElementalShift => {
            if let Some(card) = own.board[idx].as_mut() {
                std::mem::swap(&mut card.attack, &mut card.defense);
            }
        }
        SpellEffect::Unknown => {
            debug!("spell '{}' has no known effect, skipped", spell.name);
        }
    }
}
