//! Command error taxonomy.
//!
//! Every inbound command returns `Result<(), CommandError>`; a declined
//! command leaves the match state unchanged. Illegal *targets* discovered
//! during battle resolution are not errors - they resolve as recorded
//! no-ops (see [`crate::battle`]).

use thiserror::Error;

use crate::core::Lane;
use crate::state::Phase;

/// Reason a command was declined.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The command is not valid in the current phase.
    #[error("command not valid during the {0:?} phase")]
    OutOfPhase(Phase),

    /// Cards cannot be placed in the champion's column.
    #[error("the center column is reserved for the champion")]
    ChampionLane,

    /// The card's kind does not match the targeted slot row.
    #[error("card kind does not match the targeted slot")]
    SlotKindMismatch,

    /// A monster that has fought cannot be replaced.
    #[error("monster in the {0} lane has fought and cannot be replaced")]
    ReplacementLocked(Lane),

    /// Spell placement is locked this turn (Mana Drain).
    #[error("spell placement is locked this turn")]
    SpellsLocked,

    /// The hand index does not name a card.
    #[error("no card at hand index {0}")]
    BadHandIndex(usize),

    /// The targeted slot holds no card.
    #[error("no monster in the {0} lane")]
    EmptySlot(Lane),

    /// The action is not available to the targeted monster.
    #[error("action is not available to the monster in the {0} lane")]
    IllegalAction(Lane),

    /// The champion's ability cannot be activated.
    #[error("champion ability is not available")]
    AbilityUnavailable,

    /// The match is already over.
    #[error("the match is over")]
    MatchOver,
}
