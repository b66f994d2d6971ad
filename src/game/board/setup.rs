//! Starting layouts
//!
//! Data-driven piece setup: the back rank is a table of (file, piece type)
//! pairs counted from either edge, placed for white on rank 0 and mirrored
//! for black on the last rank. Pieces are placed without recomputing legal
//! destinations; the caller recomputes once at the end.

use super::Board;
use crate::game::rules::{Piece, PieceType};
use crate::game::types::{PieceColor, Square};
use tracing::debug;

/// Which edge a back-rank file is counted from
#[derive(Clone, Copy)]
enum Edge {
    Left,
    Right,
}

/// Back-rank layout; the king goes last so it wins on narrow boards where
/// two entries share a file
const BACK_RANK: [(Edge, i32, PieceType); 8] = [
    (Edge::Left, 0, PieceType::Rook),
    (Edge::Right, 0, PieceType::Rook),
    (Edge::Left, 1, PieceType::Knight),
    (Edge::Right, 1, PieceType::Knight),
    (Edge::Left, 2, PieceType::Bishop),
    (Edge::Right, 2, PieceType::Bishop),
    (Edge::Left, 3, PieceType::Queen),
    (Edge::Left, 4, PieceType::King),
];

impl Board {
    pub(super) fn set_up_standard(&mut self) {
        self.set_up_pawns();
        self.set_up_back_ranks();
    }

    /// Standard layout with a Mimic on file 1 and a Bastion on file N-2 in
    /// each side's pawn rank
    pub(super) fn set_up_custom(&mut self) {
        let (second, second_last) = self.pawn_ranks();
        let near_right = self.file_size as i32 - 2;

        self.set_up_pawns();
        self.place_initial(PieceType::Mimic, PieceColor::White, second, 1);
        self.place_initial(PieceType::Mimic, PieceColor::Black, second_last, 1);
        self.place_initial(PieceType::Bastion, PieceColor::White, second, near_right);
        self.place_initial(PieceType::Bastion, PieceColor::Black, second_last, near_right);
        self.set_up_back_ranks();
    }

    fn set_up_pawns(&mut self) {
        debug!("[BOARD] Setting up pawns");
        let (white_rank, black_rank) = self.pawn_ranks();
        for file in 0..self.file_size as i32 {
            self.place_initial(PieceType::Pawn, PieceColor::White, white_rank, file);
            self.place_initial(PieceType::Pawn, PieceColor::Black, black_rank, file);
        }
    }

    fn set_up_back_ranks(&mut self) {
        debug!("[BOARD] Setting up back ranks");
        let last_rank = self.rank_size as i32 - 1;
        let last_file = self.file_size as i32 - 1;

        for (edge, offset, piece_type) in BACK_RANK {
            let file = match edge {
                Edge::Left => offset,
                Edge::Right => last_file - offset,
            };
            self.place_initial(piece_type, PieceColor::White, 0, file);
            self.place_initial(piece_type, PieceColor::Black, last_rank, file);
        }
    }

    fn pawn_ranks(&self) -> (i32, i32) {
        (1, self.rank_size as i32 - 2)
    }

    fn place_initial(&mut self, piece_type: PieceType, color: PieceColor, rank: i32, file: i32) {
        self.put_piece(Square::new(rank, file), Piece::new(piece_type, color));
    }
}
