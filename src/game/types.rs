//! Type definitions for board coordinates and piece colors
//!
//! Coordinates are signed so that ray walking can step off the grid and be
//! rejected by a bounds check instead of wrapping around. Square ordering is
//! rank-major, which keeps legal-destination sets in a stable reading order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Side a piece belongs to
///
/// White always moves first and the two colors strictly alternate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PieceColor {
    #[default]
    White,
    Black,
}

impl PieceColor {
    /// The other side
    pub fn opposite(self) -> Self {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }
}

impl fmt::Display for PieceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceColor::White => write!(f, "white"),
            PieceColor::Black => write!(f, "black"),
        }
    }
}

/// Board square position (rank, file)
///
/// Rank is the row index, file is the column index, both zero-based.
/// A `Square` may point outside the board; the board decides whether it is
/// in range.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Square {
    pub rank: i32,
    pub file: i32,
}

impl Square {
    pub const fn new(rank: i32, file: i32) -> Self {
        Square { rank, file }
    }

    /// Square reached by stepping `distance` times along `(rank_step, file_step)`
    pub fn offset(self, rank_step: i32, file_step: i32, distance: i32) -> Self {
        Square {
            rank: self.rank + rank_step * distance,
            file: self.file + file_step * distance,
        }
    }

    /// The square one step short of `self` when arriving from `origin`
    ///
    /// Computed independently per axis: each coordinate that changed between
    /// `origin` and `self` is pulled back by one towards `origin`, an
    /// unchanged coordinate stays put. For knight-shaped moves the result is
    /// not necessarily on any straight path between the two squares.
    pub fn one_short_from(self, origin: Square) -> Self {
        Square {
            rank: self.rank - (self.rank - origin.rank).signum(),
            file: self.file - (self.file - origin.file).signum(),
        }
    }
}

impl From<(i32, i32)> for Square {
    fn from((rank, file): (i32, i32)) -> Self {
        Square::new(rank, file)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.rank, self.file)
    }
}
