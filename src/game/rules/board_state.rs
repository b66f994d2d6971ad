//! Board state representation for move validation
//!
//! The move generator only needs to know the grid size and what stands on
//! each square, so it works against this trait rather than a concrete board.

use super::piece::Piece;
use crate::game::types::Square;

/// Read-only view of piece placement
pub trait BoardState {
    fn rank_size(&self) -> usize;

    fn file_size(&self) -> usize;

    /// Piece on `square`, `None` if empty or off the board
    fn piece_at(&self, square: Square) -> Option<&Piece>;

    fn in_bounds(&self, square: Square) -> bool {
        square.rank >= 0
            && square.file >= 0
            && (square.rank as usize) < self.rank_size()
            && (square.file as usize) < self.file_size()
    }

    fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Every occupied square with its piece, in rank-major order
    fn occupied_squares(&self) -> Vec<(Square, &Piece)> {
        let mut occupied = Vec::new();
        for rank in 0..self.rank_size() as i32 {
            for file in 0..self.file_size() as i32 {
                let square = Square::new(rank, file);
                if let Some(piece) = self.piece_at(square) {
                    occupied.push((square, piece));
                }
            }
        }
        occupied
    }
}
