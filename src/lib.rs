//! # triduel
//!
//! Rules engine for a two-player, simultaneous-turn tactical card game on
//! a three-lane board: a champion holds the center column, monsters and
//! spells fight over the sides.
//!
//! ## Architecture
//!
//! - [`core`] - players, board geometry, deterministic RNG
//! - [`catalog`] - card definitions, runtime cards, the standard pool
//! - [`state`] - the single mutable owner of a match
//! - [`actions`] - the action alphabet and per-monster availability
//! - [`battle`] - the deterministic battle resolution engine
//! - [`flow`] - the phase machine and command surface
//! - [`ai`] - the built-in opponent policy
//! - [`events`] - outbound event boundary
//!
//! ## Example
//!
//! ```
//! use triduel::catalog::Catalog;
//! use triduel::events::EventLog;
//! use triduel::flow::MatchController;
//! use triduel::core::PlayerId;
//!
//! let catalog = Catalog::standard();
//! let mut duel = MatchController::new(42, &catalog, EventLog::new());
//! duel.start().unwrap();
//!
//! // Let the built-in policy play both sides for one turn.
//! duel.run_opponent(PlayerId::ONE);
//! duel.run_opponent(PlayerId::TWO);
//! duel.advance_phase().unwrap(); // resolve the battle
//! duel.advance_phase().unwrap(); // end phase, next turn
//! assert_eq!(duel.turn(), 2);
//! ```

pub mod actions;
pub mod ai;
pub mod battle;
pub mod catalog;
pub mod core;
pub mod error;
pub mod events;
pub mod flow;
pub mod state;

pub use actions::{available_actions, ActionCategory, ActionKind};
pub use battle::{resolve_battle, BattleReport};
pub use catalog::Catalog;
pub use core::{GameRng, Lane, PlayerId, PlayerPair};
pub use error::CommandError;
pub use events::{EventLog, EventSink, GameEvent, NullSink};
pub use flow::{MatchController, STRATEGY_SECONDS};
pub use state::{MatchState, Phase, PlayerState};
