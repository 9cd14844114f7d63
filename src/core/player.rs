//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe identifier for the two sides of a match.
//!
//! ## PlayerPair
//!
//! Fixed two-slot per-player storage indexed by `PlayerId`. The engine is
//! strictly a two-party simulation, so the container is an array rather
//! than a growable map.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players in a match.
///
/// Indices are 0-based: `PlayerId::ONE` is 0, `PlayerId::TWO` is 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The first player.
    pub const ONE: PlayerId = PlayerId(0);
    /// The second player.
    pub const TWO: PlayerId = PlayerId(1);

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other side of the table.
    #[must_use]
    pub const fn opponent(self) -> PlayerId {
        PlayerId(1 - self.0)
    }

    /// Iterate both players in deterministic order.
    pub fn both() -> impl Iterator<Item = PlayerId> {
        [PlayerId::ONE, PlayerId::TWO].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Per-player data with O(1) access, one entry per side.
///
/// ## Example
///
/// ```
/// use triduel::core::{PlayerId, PlayerPair};
///
/// let mut life: PlayerPair<i32> = PlayerPair::with_value(20);
/// life[PlayerId::TWO] = 15;
/// assert_eq!(life[PlayerId::ONE], 20);
/// assert_eq!(life[PlayerId::TWO], 15);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    data: [T; 2],
}

impl<T> PlayerPair<T> {
    /// Create a pair with values from a factory function.
    pub fn new(factory: impl FnMut(PlayerId) -> T) -> Self {
        let mut factory = factory;
        Self {
            data: [factory(PlayerId::ONE), factory(PlayerId::TWO)],
        }
    }

    /// Create a pair with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: [value.clone(), value],
        }
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Borrow one side mutably together with its opponent.
    ///
    /// Needed when a single resolution step touches both sides, e.g. a
    /// spell that buffs its caster while debuffing the other player.
    pub fn split_mut(&mut self, player: PlayerId) -> (&mut T, &mut T) {
        let (left, right) = self.data.split_at_mut(1);
        match player {
            PlayerId::ONE => (&mut left[0], &mut right[0]),
            _ => (&mut right[0], &mut left[0]),
        }
    }

    /// Iterate over `(PlayerId, &T)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::both().zip(self.data.iter())
    }
}

impl<T> Index<PlayerId> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerPair<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
