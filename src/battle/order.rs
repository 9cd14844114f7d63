//! Action collection and deterministic ordering.
//!
//! After spells resolve, every occupied slot with a selected action
//! contributes one queued action. The queue sorts by category (pumps,
//! then defends, then attacks), and within a category by the snapshot
//! stats taken at collection time: speed descending, then attack, then
//! defense. The sort is stable, so full ties keep collection order
//! (first player before second, left lane before right).

use crate::actions::ActionKind;
use crate::core::{Lane, PlayerId};
use crate::state::MatchState;

use super::report::StatLine;

/// A queued action with the stat snapshot it sorts by.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BattleAction {
    pub player: PlayerId,
    pub lane: Lane,
    pub action: ActionKind,
    pub monster: String,
    pub stats: StatLine,
}

/// Collect every selected action from both boards.
#[must_use]
pub fn collect_actions(state: &MatchState) -> Vec<BattleAction> {
    let mut queue = Vec::new();
    for player in PlayerId::both() {
        let side = state.player(player);
        for lane in Lane::ALL {
            let idx = lane.index();
            let (Some(card), Some(action)) = (&side.board[idx], side.selected_actions[idx])
            else {
                continue;
            };
            if card.is_disabled() {
                continue;
            }
            queue.push(BattleAction {
                player,
                lane,
                action,
                monster: card.name.clone(),
                stats: StatLine::of(card),
            });
        }
    }
    queue
}

/// Sort a queue into resolution order.
pub fn sort_actions(queue: &mut [BattleAction]) {
    queue.sort_by(|a, b| {
        a.action
            .category()
            .cmp(&b.action.category())
            .then(b.stats.speed.cmp(&a.stats.speed))
            .then(b.stats.attack.cmp(&a.stats.attack))
            .then(b.stats.defense.cmp(&a.stats.defense))
    });
}
