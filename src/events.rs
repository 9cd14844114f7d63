//! Outbound event boundary.
//!
//! The engine announces what happened through an [`EventSink`]; it never
//! renders, schedules or animates. Events are `Serialize`, so any framing
//! (in-process channel, websocket, test capture) works on top.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::battle::BattleReport;
use crate::catalog::CardKind;
use crate::core::{Lane, PlayerId};
use crate::state::Phase;

/// Something the engine wants the outside world to know.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The match moved to a new phase. Entering `Phase::GameOver` carries
    /// the winner.
    PhaseChanged {
        phase: Phase,
        turn: u32,
        winner: Option<PlayerId>,
    },
    /// A card landed in a slot.
    CardPlaced {
        player: PlayerId,
        kind: CardKind,
        lane: Lane,
    },
    /// The battle phase resolved.
    BattleResolved(BattleReport),
}

/// Receiver for engine events.
pub trait EventSink {
    fn emit(&mut self, event: GameEvent);
}

/// Sink that discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: GameEvent) {}
}

/// Sink that records every event, in order.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vector<GameEvent>,
}

impl EventLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> &Vector<GameEvent> {
        &self.events
    }

    /// Iterate the phase changes in the log.
    pub fn phases(&self) -> impl Iterator<Item = Phase> + '_ {
        self.events.iter().filter_map(|event| match event {
            GameEvent::PhaseChanged { phase, .. } => Some(*phase),
            _ => None,
        })
    }
}

impl EventSink for EventLog {
    fn emit(&mut self, event: GameEvent) {
        self.events.push_back(event);
    }
}
