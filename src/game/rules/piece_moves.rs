//! Chess piece movement rules
//!
//! The fixed starting move-vector table for every piece type. Vectors are
//! written from white's point of view; black pawns mirror the rank step.

use super::move_vector::{MoveVector, Multiplicity, UNBOUNDED};
use super::piece::PieceType;
use crate::game::types::PieceColor;

/// Starting move vectors for a piece of the given type and color
pub fn initial_move_vectors(piece_type: PieceType, color: PieceColor) -> Vec<MoveVector> {
    match piece_type {
        PieceType::Pawn => pawn_vectors(color),
        PieceType::Rook => vec![orthogonal(1, 0, UNBOUNDED)],
        PieceType::Bishop => vec![diagonal(1, 1, UNBOUNDED)],
        PieceType::Queen => vec![orthogonal(0, 1, UNBOUNDED), diagonal(1, 1, UNBOUNDED)],
        PieceType::Knight => vec![diagonal(1, 2, 1).jumping(), diagonal(2, 1, 1).jumping()],
        PieceType::King | PieceType::Bastion => king_vectors(),
        PieceType::Mimic => king_vectors()
            .into_iter()
            .map(|v| v.with_own_capture(true))
            .collect(),
    }
}

fn pawn_vectors(color: PieceColor) -> Vec<MoveVector> {
    let forward = match color {
        PieceColor::White => Multiplicity::Single,
        PieceColor::Black => Multiplicity::MirroredRank,
    };

    vec![
        MoveVector::new(1, 0, 1).non_capturing(),
        MoveVector::new(1, 1, 1).capture_only(),
        MoveVector::new(1, -1, 1).capture_only(),
        MoveVector::new(2, 0, 1).non_capturing().initial_only(),
    ]
    .into_iter()
    .map(|v| v.with_multiplicity(forward))
    .collect()
}

fn king_vectors() -> Vec<MoveVector> {
    vec![orthogonal(0, 1, 1), diagonal(1, 1, 1)]
}

fn orthogonal(rank_step: i32, file_step: i32, max_distance: u32) -> MoveVector {
    MoveVector::new(rank_step, file_step, max_distance).with_multiplicity(Multiplicity::Orthogonal)
}

fn diagonal(rank_step: i32, file_step: i32, max_distance: u32) -> MoveVector {
    MoveVector::new(rank_step, file_step, max_distance).with_multiplicity(Multiplicity::Diagonal)
}
