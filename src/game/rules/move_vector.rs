//! Declarative movement rules
//!
//! A [`MoveVector`] describes one family of moves: a base step, how far it
//! may be repeated, what the destination square may hold, and how the base
//! step is reflected into concrete directions.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

/// Max distance for sliding pieces; walking always stops at the board edge
pub const UNBOUNDED: u32 = u32::MAX;

/// How a vector's base step is expanded into concrete directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Multiplicity {
    /// `(r, f)` only
    Single,
    /// `(-r, f)` only; used for black pawns moving down the board
    MirroredRank,
    /// `(r, f)`, `(-r, -f)`, `(f, r)`, `(-f, -r)`: four quarter turns of an orthogonal step
    Orthogonal,
    /// `(r, f)`, `(r, -f)`, `(-r, f)`, `(-r, -f)`: four reflections of a diagonal step
    Diagonal,
}

impl Multiplicity {
    pub fn directions(self, rank_step: i32, file_step: i32) -> SmallVec<[(i32, i32); 4]> {
        let (r, f) = (rank_step, file_step);
        match self {
            Multiplicity::Single => smallvec![(r, f)],
            Multiplicity::MirroredRank => smallvec![(-r, f)],
            Multiplicity::Orthogonal => smallvec![(r, f), (-r, -f), (f, r), (-f, -r)],
            Multiplicity::Diagonal => smallvec![(r, f), (r, -f), (-r, f), (-r, -f)],
        }
    }
}

/// One family of potential moves for a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveVector {
    pub rank_step: i32,
    pub file_step: i32,
    pub max_distance: u32,
    /// Destination may hold a piece (which is then captured)
    pub can_capture: bool,
    /// Destination may be empty
    pub can_be_empty: bool,
    /// Pieces between origin and destination do not block
    pub can_jump_over: bool,
    /// Same-color pieces (other than the king) may be captured
    pub can_capture_own_piece: bool,
    /// Only usable while the piece is still in its initial-move state
    pub initial_move_only: bool,
    pub multiplicity: Multiplicity,
}

impl MoveVector {
    /// A single-direction vector that may move to empty squares and capture
    pub fn new(rank_step: i32, file_step: i32, max_distance: u32) -> Self {
        MoveVector {
            rank_step,
            file_step,
            max_distance,
            can_capture: true,
            can_be_empty: true,
            can_jump_over: false,
            can_capture_own_piece: false,
            initial_move_only: false,
            multiplicity: Multiplicity::Single,
        }
    }

    pub fn with_multiplicity(mut self, multiplicity: Multiplicity) -> Self {
        self.multiplicity = multiplicity;
        self
    }

    /// Destination must be empty
    pub fn non_capturing(mut self) -> Self {
        self.can_capture = false;
        self
    }

    /// Destination must hold a piece
    pub fn capture_only(mut self) -> Self {
        self.can_be_empty = false;
        self
    }

    pub fn jumping(mut self) -> Self {
        self.can_jump_over = true;
        self
    }

    pub fn initial_only(mut self) -> Self {
        self.initial_move_only = true;
        self
    }

    pub fn with_own_capture(mut self, allowed: bool) -> Self {
        self.can_capture_own_piece = allowed;
        self
    }

    /// Concrete `(rank_step, file_step)` directions this vector walks
    pub fn directions(&self) -> SmallVec<[(i32, i32); 4]> {
        self.multiplicity.directions(self.rank_step, self.file_step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orthogonal_covers_four_rook_directions() {
        let dirs = MoveVector::new(1, 0, UNBOUNDED)
            .with_multiplicity(Multiplicity::Orthogonal)
            .directions();
        assert_eq!(dirs.as_slice(), &[(1, 0), (-1, 0), (0, 1), (0, -1)]);
    }

    #[test]
    fn test_diagonal_reflects_knight_step() {
        let dirs = MoveVector::new(1, 2, 1)
            .with_multiplicity(Multiplicity::Diagonal)
            .directions();
        assert_eq!(dirs.as_slice(), &[(1, 2), (1, -2), (-1, 2), (-1, -2)]);
    }

    #[test]
    fn test_mirrored_rank_flips_forward() {
        let dirs = MoveVector::new(1, -1, 1)
            .with_multiplicity(Multiplicity::MirroredRank)
            .directions();
        assert_eq!(dirs.as_slice(), &[(-1, -1)]);
    }

    #[test]
    fn test_builder_flags() {
        let v = MoveVector::new(2, 0, 1).non_capturing().initial_only();
        assert!(!v.can_capture);
        assert!(v.can_be_empty);
        assert!(v.initial_move_only);
        assert!(!v.can_jump_over);
        assert_eq!(v.multiplicity, Multiplicity::Single);
    }
}
