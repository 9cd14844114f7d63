//! Core building blocks: players, board geometry, deterministic RNG.

pub mod lane;
pub mod player;
pub mod rng;

pub use lane::Lane;
pub use player::{PlayerId, PlayerPair};
pub use rng::GameRng;
