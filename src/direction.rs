//! 8-way compass directions on the pixel grid.
//!
//! Directions carry an ordinal 1..=8 assigned clockwise starting at north
//! (`N = 1`, `NE = 2`, …, `NW = 8`) and `None = 0`. `next`/`previous` cycle over
//! the ordinals with wrap-around and leave `None` fixed.
//!
//! Offsets follow image coordinates: `y` grows downward, so north is `(0, -1)`.
use serde::{Deserialize, Serialize};

#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
    #[default]
    None,
}

impl Direction {
    /// The eight compass directions in clockwise order starting at north.
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];

    /// Clockwise ordinal, 1..=8, or 0 for `None`.
    pub const fn ordinal(self) -> u8 {
        match self {
            Direction::N => 1,
            Direction::NE => 2,
            Direction::E => 3,
            Direction::SE => 4,
            Direction::S => 5,
            Direction::SW => 6,
            Direction::W => 7,
            Direction::NW => 8,
            Direction::None => 0,
        }
    }

    /// Inverse of [`Direction::ordinal`]; anything outside 1..=8 maps to `None`.
    pub const fn from_ordinal(ordinal: u8) -> Direction {
        match ordinal {
            1..=8 => Self::ALL[(ordinal - 1) as usize],
            _ => Direction::None,
        }
    }

    /// Unit step `(dx, dy)` for this direction.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::N => (0, -1),
            Direction::NE => (1, -1),
            Direction::E => (1, 0),
            Direction::SE => (1, 1),
            Direction::S => (0, 1),
            Direction::SW => (-1, 1),
            Direction::W => (-1, 0),
            Direction::NW => (-1, -1),
            Direction::None => (0, 0),
        }
    }

    /// Clockwise neighbor (`NW` wraps to `N`).
    pub const fn next(self) -> Direction {
        match self.ordinal() {
            0 => Direction::None,
            8 => Direction::N,
            n => Direction::from_ordinal(n + 1),
        }
    }

    /// Counter-clockwise neighbor (`N` wraps to `NW`).
    pub const fn previous(self) -> Direction {
        match self.ordinal() {
            0 => Direction::None,
            1 => Direction::NW,
            n => Direction::from_ordinal(n - 1),
        }
    }

    pub const fn is_none(self) -> bool {
        matches!(self, Direction::None)
    }
}
