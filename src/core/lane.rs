//! Board geometry - the three lanes of the duel board.
//!
//! Each side of the board is a row of three columns. The center column is
//! reserved for the champion; monsters and spells occupy the two side
//! columns. Lane health is tracked per column and the center column's
//! health is the champion's life total.

use serde::{Deserialize, Serialize};

/// A column of the three-lane board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lane {
    /// Left side column (index 0).
    Left,
    /// Center column (index 1), reserved for the champion.
    Champion,
    /// Right side column (index 2).
    Right,
}

impl Lane {
    /// All lanes in board order.
    pub const ALL: [Lane; 3] = [Lane::Left, Lane::Champion, Lane::Right];

    /// The two side columns, in board order.
    pub const SIDES: [Lane; 2] = [Lane::Left, Lane::Right];

    /// Get the 0-based column index.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Lane::Left => 0,
            Lane::Champion => 1,
            Lane::Right => 2,
        }
    }

    /// Get the lane for a column index, if in bounds.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Lane> {
        match index {
            0 => Some(Lane::Left),
            1 => Some(Lane::Champion),
            2 => Some(Lane::Right),
            _ => None,
        }
    }

    /// Is this one of the side columns?
    #[must_use]
    pub const fn is_side(self) -> bool {
        !matches!(self, Lane::Champion)
    }

    /// The column one step to the left, if any.
    #[must_use]
    pub const fn left(self) -> Option<Lane> {
        match self {
            Lane::Left => None,
            Lane::Champion => Some(Lane::Left),
            Lane::Right => Some(Lane::Champion),
        }
    }

    /// The column one step to the right, if any.
    #[must_use]
    pub const fn right(self) -> Option<Lane> {
        match self {
            Lane::Left => Some(Lane::Champion),
            Lane::Champion => Some(Lane::Right),
            Lane::Right => None,
        }
    }
}

impl std::fmt::Display for Lane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Lane::Left => "left",
            Lane::Champion => "center",
            Lane::Right => "right",
        };
        write!(f, "{name}")
    }
}
