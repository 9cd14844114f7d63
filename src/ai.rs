//! Built-in opponent policy.
//!
//! A deliberately simple, deterministic-given-the-seed opponent: fill the
//! board greedily, then pick each monster's action by a fixed preference
//! order, falling back to a uniform random legal action. It issues the
//! same public commands a human player would, so everything it does is
//! validated by the command layer.

use log::debug;

use crate::actions::{available_actions, ActionKind};
use crate::catalog::CardKind;
use crate::core::{Lane, PlayerId};
use crate::events::EventSink;
use crate::flow::MatchController;

impl<S: EventSink> MatchController<S> {
    /// Run the opponent policy for one strategy phase.
    ///
    /// Outside the strategy phase this does nothing.
    pub fn run_opponent(&mut self, player: PlayerId) {
        if self.phase() != crate::state::Phase::Strategy {
            return;
        }
        self.opponent_place_cards(player);
        self.opponent_pick_actions(player);
    }

    /// Fill empty side slots from hand: monsters first, then spells.
    fn opponent_place_cards(&mut self, player: PlayerId) {
        for lane in Lane::SIDES {
            if self.state.players[player].board[lane.index()].is_some() {
                continue;
            }
            let monster_at = self.state.players[player]
                .hand
                .iter()
                .position(|c| c.kind() == CardKind::Monster);
            if let Some(hand_index) = monster_at {
                if let Err(err) = self.place_card(player, hand_index, CardKind::Monster, lane) {
                    debug!("opponent monster placement declined: {err}");
                }
            }
        }

        for lane in Lane::SIDES {
            if self.state.players[player].spells[lane.index()].is_some()
                || self.state.players[player].spells_locked
            {
                continue;
            }
            let spell_at = self.state.players[player]
                .hand
                .iter()
                .position(|c| c.kind() == CardKind::Spell);
            if let Some(hand_index) = spell_at {
                if let Err(err) = self.place_card(player, hand_index, CardKind::Spell, lane) {
                    debug!("opponent spell placement declined: {err}");
                }
            }
        }
    }

    /// Choose an action per occupied slot by fixed preference, with a
    /// random fallback among whatever is legal.
    fn opponent_pick_actions(&mut self, player: PlayerId) {
        for lane in Lane::SIDES {
            let side = &self.state.players[player];
            let Some(card) = side.monster(lane) else {
                continue;
            };
            let legal = available_actions(card, lane, side);
            if legal.is_empty() {
                continue;
            }

            let foe = &self.state.players[player.opponent()];
            let opposed = foe.board[lane.index()].is_some();
            let diagonal = [
                ActionKind::AttackDiagonalLeft,
                ActionKind::AttackDiagonalRight,
            ]
            .into_iter()
            .find(|action| {
                legal.contains(action)
                    && action
                        .target_lane(lane)
                        .is_some_and(|target| foe.board[target.index()].is_some())
            });

            let choice = if opposed && legal.contains(&ActionKind::AttackVertical) {
                ActionKind::AttackVertical
            } else if let Some(action) = diagonal {
                action
            } else if legal.contains(&ActionKind::AttackVertical) {
                ActionKind::AttackVertical
            } else if legal.contains(&ActionKind::Defend) {
                ActionKind::Defend
            } else if legal.contains(&ActionKind::Pump) {
                ActionKind::Pump
            } else {
                match self.state.rng.choose(&legal) {
                    Some(action) => *action,
                    None => continue,
                }
            };

            if let Err(err) = self.select_action(player, lane, choice) {
                debug!("opponent action selection declined: {err}");
            }
        }
    }
}
