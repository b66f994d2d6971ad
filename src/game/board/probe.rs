//! Scoped hypothetical moves
//!
//! Self-check filtering asks "if this piece stood there instead, could the
//! opponent take my king?". [`HypotheticalMove`] relocates the piece for the
//! duration of that question and puts both squares back when it is dropped,
//! whichever way the caller leaves the scope. Cached legal destinations are
//! not touched.

use super::Board;
use crate::game::rules::Piece;
use crate::game::types::Square;
use std::ops::Deref;

pub(crate) struct HypotheticalMove<'a> {
    board: &'a mut Board,
    from: Square,
    to: Square,
    displaced: Option<Piece>,
}

impl<'a> HypotheticalMove<'a> {
    /// Move whatever is on `from` onto `to`. Both squares must be on the board.
    pub(crate) fn apply(board: &'a mut Board, from: Square, to: Square) -> Self {
        let mover = board.cell_mut(from).and_then(|cell| cell.take_piece());
        let displaced = board
            .cell_mut(to)
            .and_then(|cell| cell.replace_piece(mover));

        HypotheticalMove {
            board,
            from,
            to,
            displaced,
        }
    }
}

impl Deref for HypotheticalMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl Drop for HypotheticalMove<'_> {
    fn drop(&mut self) {
        let displaced = self.displaced.take();
        let mover = self
            .board
            .cell_mut(self.to)
            .and_then(|cell| cell.replace_piece(displaced));
        if let Some(cell) = self.board.cell_mut(self.from) {
            cell.replace_piece(mover);
        }
    }
}
