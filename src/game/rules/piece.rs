//! Pieces and their variant-specific state
//!
//! Every piece is the same struct: a color, a [`PieceType`] tag, its current
//! move-vector set and a small [`PieceExtra`] payload for the counters only
//! some variants carry. Behavior that differs per variant is selected by
//! matching on the tag.

use super::move_vector::MoveVector;
use super::piece_moves::initial_move_vectors;
use crate::game::types::PieceColor;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU32, Ordering};

/// Hits a fresh Bastion can take; the hit that arrives at 1 captures it
pub const BASTION_ENDURANCE: u8 = 3;

/// Identity of a piece, stable for its whole lifetime (including time spent
/// captured inside a history record)
pub type PieceId = u32;

static NEXT_PIECE_ID: AtomicU32 = AtomicU32::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PieceType {
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn,
    /// Moves like a king; absorbs hits until its endurance runs out
    Bastion,
    /// Moves like a king; may capture its own side and inherits the
    /// movement of everything it captures
    Mimic,
}

impl PieceType {
    /// Letter used in board diagrams
    pub fn symbol(self) -> char {
        match self {
            PieceType::King => 'K',
            PieceType::Queen => 'Q',
            PieceType::Bishop => 'B',
            PieceType::Knight => 'N',
            PieceType::Rook => 'R',
            PieceType::Pawn => 'P',
            PieceType::Bastion => 'T',
            PieceType::Mimic => 'M',
        }
    }

    /// Attacks on a Bastion by this type leave the attacker on its origin
    /// square instead of one square short of the target
    pub fn is_jumper(self) -> bool {
        matches!(self, PieceType::Knight)
    }
}

/// Counters carried by some variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceExtra {
    None,
    /// Committed moves; the initial double step returns when this is back to 0
    MoveCount(u32),
    /// Remaining hits
    Endurance(u8),
}

/// Capability to take over another piece's movement rules on capture
pub trait MovementChanging {
    /// Whether captures by this piece absorb the captured piece's vectors
    fn absorbs_movement(&self) -> bool;

    /// Merge `captured` into this piece's move vectors. Returns false (and
    /// changes nothing) for pieces that do not absorb movement.
    fn absorb_move_vectors(&mut self, captured: &[MoveVector]) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    id: PieceId,
    color: PieceColor,
    piece_type: PieceType,
    move_vectors: Vec<MoveVector>,
    has_initial_move_rule: bool,
    in_initial_move_state: bool,
    extra: PieceExtra,
}

impl Piece {
    pub fn new(piece_type: PieceType, color: PieceColor) -> Self {
        let has_initial_move_rule = piece_type == PieceType::Pawn;
        let extra = match piece_type {
            PieceType::Pawn => PieceExtra::MoveCount(0),
            PieceType::Bastion => PieceExtra::Endurance(BASTION_ENDURANCE),
            _ => PieceExtra::None,
        };

        Piece {
            id: NEXT_PIECE_ID.fetch_add(1, Ordering::Relaxed),
            color,
            piece_type,
            move_vectors: initial_move_vectors(piece_type, color),
            has_initial_move_rule,
            in_initial_move_state: has_initial_move_rule,
            extra,
        }
    }

    pub fn id(&self) -> PieceId {
        self.id
    }

    pub fn color(&self) -> PieceColor {
        self.color
    }

    pub fn piece_type(&self) -> PieceType {
        self.piece_type
    }

    pub fn move_vectors(&self) -> &[MoveVector] {
        &self.move_vectors
    }

    pub fn has_initial_move_rule(&self) -> bool {
        self.has_initial_move_rule
    }

    pub fn is_in_initial_move_state(&self) -> bool {
        self.in_initial_move_state
    }

    pub fn extra(&self) -> PieceExtra {
        self.extra
    }

    /// Committed move count, for pieces that track one
    pub fn move_count(&self) -> Option<u32> {
        match self.extra {
            PieceExtra::MoveCount(count) => Some(count),
            _ => None,
        }
    }

    /// Remaining hits, for pieces that absorb them
    pub fn endurance(&self) -> Option<u8> {
        match self.extra {
            PieceExtra::Endurance(remaining) => Some(remaining),
            _ => None,
        }
    }

    pub fn is_king(&self) -> bool {
        self.piece_type == PieceType::King
    }

    /// Vectors usable right now: initial-only vectors drop out once the
    /// piece has left its initial-move state
    pub fn active_move_vectors(&self) -> impl Iterator<Item = &MoveVector> {
        let initial = self.in_initial_move_state;
        self.move_vectors
            .iter()
            .filter(move |v| initial || !v.initial_move_only)
    }

    /// Whether a hit now would be absorbed rather than capture the piece
    pub fn absorbs_hit(&self) -> bool {
        self.endurance().is_some_and(|remaining| remaining > 1)
    }

    /// Bookkeeping for a committed (or redone) move by this piece
    pub(crate) fn record_move(&mut self) {
        if let PieceExtra::MoveCount(count) = &mut self.extra {
            *count += 1;
        }
        self.in_initial_move_state = false;
    }

    /// Reverse of [`Piece::record_move`] on undo
    pub(crate) fn revert_move(&mut self) {
        if let PieceExtra::MoveCount(count) = &mut self.extra {
            *count = count.saturating_sub(1);
            if *count == 0 {
                self.in_initial_move_state = true;
            }
        }
    }

    /// Take one hit; returns the endurance left
    pub(crate) fn take_hit(&mut self) -> Option<u8> {
        match &mut self.extra {
            PieceExtra::Endurance(remaining) => {
                *remaining = remaining.saturating_sub(1);
                Some(*remaining)
            }
            _ => None,
        }
    }

    pub(crate) fn set_move_vectors(&mut self, move_vectors: Vec<MoveVector>) {
        self.move_vectors = move_vectors;
    }
}

impl MovementChanging for Piece {
    fn absorbs_movement(&self) -> bool {
        self.piece_type == PieceType::Mimic
    }

    fn absorb_move_vectors(&mut self, captured: &[MoveVector]) -> bool {
        if !self.absorbs_movement() {
            return false;
        }

        // Own-capture is re-enabled on everything, so duplicates only show
        // up after the flag is applied
        for vector in captured {
            let vector = vector.with_own_capture(true);
            if !self.move_vectors.contains(&vector) {
                self.move_vectors.push(vector);
            }
        }
        for vector in &mut self.move_vectors {
            vector.can_capture_own_piece = true;
        }
        true
    }
}
