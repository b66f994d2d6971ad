//! Ray-casting move generation
//!
//! Turns a piece's move vectors plus the current occupancy into concrete
//! destination squares. Everything here is a pure function of a
//! [`BoardState`]; filtering out moves that leave the mover's own king
//! capturable needs a hypothetical board mutation and is done by the board.
//!
//! For each active vector and each direction it expands to, squares are
//! visited at distance 1, 2, ... up to the vector's max distance:
//!
//! - leaving the grid ends the direction
//! - an empty square the vector may not land on, or an occupied square it
//!   may not capture, is skipped
//! - a same-color piece is skipped unless the vector allows own-capture, and
//!   the own king is never a target
//! - for non-jumping vectors, any piece strictly between origin and target
//!   ends the direction

use super::board_state::BoardState;
use super::move_vector::MoveVector;
use super::piece::Piece;
use crate::game::types::{PieceColor, Square};
use std::collections::BTreeSet;

/// Squares a single vector reaches from `origin`
pub fn vector_targets<B: BoardState + ?Sized>(
    board: &B,
    origin: Square,
    piece: &Piece,
    vector: &MoveVector,
) -> Vec<Square> {
    let span = board.rank_size().max(board.file_size()) as u32;
    let limit = vector.max_distance.min(span) as i32;
    let mut targets = Vec::new();

    for (rank_step, file_step) in vector.directions() {
        if rank_step == 0 && file_step == 0 {
            continue;
        }

        for distance in 1..=limit {
            let target = origin.offset(rank_step, file_step, distance);
            if !board.in_bounds(target) {
                break;
            }

            match board.piece_at(target) {
                None if !vector.can_be_empty => continue,
                Some(_) if !vector.can_capture => continue,
                Some(occupant)
                    if occupant.color() == piece.color()
                        && !(vector.can_capture_own_piece && !occupant.is_king()) =>
                {
                    continue
                }
                _ => {}
            }

            if !vector.can_jump_over && obstacle_between(board, origin, target) {
                break;
            }

            targets.push(target);
        }
    }

    targets
}

/// Every square the piece on `origin` can reach, ignoring self-check
pub fn reachable_squares<B: BoardState + ?Sized>(
    board: &B,
    origin: Square,
    piece: &Piece,
) -> BTreeSet<Square> {
    piece
        .active_move_vectors()
        .flat_map(|vector| vector_targets(board, origin, piece, vector))
        .collect()
}

/// Whether the piece on `origin` could capture the king of `king_color`
pub fn attacks_king<B: BoardState + ?Sized>(
    board: &B,
    origin: Square,
    piece: &Piece,
    king_color: PieceColor,
) -> bool {
    piece.active_move_vectors().any(|vector| {
        vector_targets(board, origin, piece, vector)
            .into_iter()
            .any(|target| {
                board
                    .piece_at(target)
                    .is_some_and(|p| p.is_king() && p.color() == king_color)
            })
    })
}

/// Whether any piece of the other side could capture the king of `king_color`
pub fn is_king_capturable<B: BoardState + ?Sized>(board: &B, king_color: PieceColor) -> bool {
    board
        .occupied_squares()
        .into_iter()
        .filter(|(_, piece)| piece.color() != king_color)
        .any(|(square, piece)| attacks_king(board, square, piece, king_color))
}

/// Whether a piece stands strictly between `from` and `to`
///
/// Steps one square at a time, moving each axis towards the target until
/// that axis matches. Straight and diagonal lines give the usual path.
pub fn obstacle_between<B: BoardState + ?Sized>(board: &B, from: Square, to: Square) -> bool {
    let mut current = from;
    loop {
        current.rank += (to.rank - current.rank).signum();
        current.file += (to.file - current.file).signum();
        if current == to {
            return false;
        }
        if !board.is_empty(current) {
            return true;
        }
    }
}
