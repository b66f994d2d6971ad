//! A single board square

use crate::game::rules::Piece;
use crate::game::types::Square;
use std::collections::BTreeSet;

/// Square contents plus the cached legal destinations of its piece
///
/// The destination set is derived data. The board rebuilds every cell's set
/// after each mutation; nothing patches it in place.
#[derive(Debug, Clone, Default)]
pub struct Cell {
    piece: Option<Piece>,
    legal_destinations: BTreeSet<Square>,
}

impl Cell {
    pub fn piece(&self) -> Option<&Piece> {
        self.piece.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.piece.is_none()
    }

    pub fn legal_destinations(&self) -> &BTreeSet<Square> {
        &self.legal_destinations
    }

    pub(crate) fn take_piece(&mut self) -> Option<Piece> {
        self.piece.take()
    }

    /// Put `piece` here, handing back whatever stood here before
    pub(crate) fn replace_piece(&mut self, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(&mut self.piece, piece)
    }

    pub(crate) fn set_legal_destinations(&mut self, destinations: BTreeSet<Square>) {
        self.legal_destinations = destinations;
    }
}
