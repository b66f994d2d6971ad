//! Move history tracking
//!
//! Keeps two stacks of [`Movement`] records: moves that have been played
//! (`done`) and moves that have been taken back (`undone`). Undo moves the
//! top record from `done` to `undone`, redo moves it back. Committing a new
//! move discards `undone`, since the redo line no longer follows from the
//! position.
//!
//! A record owns the piece it captured. While the record sits on `done` the
//! captured piece lives inside it; undo puts that same piece back on the
//! board, and redo takes it off again.

use crate::game::rules::{MoveVector, Piece};
use crate::game::types::Square;
use tracing::debug;

/// One committed move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movement {
    pub from: Square,
    pub to: Square,
    /// Piece removed from `to`, held here so undo can restore it
    pub captured: Option<Piece>,
    /// Mover's vectors before it absorbed the captured piece's movement
    pub prior_move_vectors: Option<Vec<MoveVector>>,
}

impl Movement {
    pub fn new(from: Square, to: Square, captured: Option<Piece>) -> Self {
        Movement {
            from,
            to,
            captured,
            prior_move_vectors: None,
        }
    }

    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

/// Done and undone move stacks
#[derive(Debug, Default, Clone)]
pub struct MoveHistory {
    done: Vec<Movement>,
    undone: Vec<Movement>,
}

impl MoveHistory {
    /// Record a newly committed move, invalidating the redo line
    pub fn record(&mut self, movement: Movement) {
        self.clear_undone();
        self.done.push(movement);
    }

    /// Drop the redo line without recording anything
    pub fn clear_undone(&mut self) {
        if !self.undone.is_empty() {
            debug!(
                "[HISTORY] Discarding {} undone move(s) after new move",
                self.undone.len()
            );
            self.undone.clear();
        }
    }

    pub fn pop_done(&mut self) -> Option<Movement> {
        self.done.pop()
    }

    pub fn push_done(&mut self, movement: Movement) {
        self.done.push(movement);
    }

    pub fn pop_undone(&mut self) -> Option<Movement> {
        self.undone.pop()
    }

    pub fn push_undone(&mut self, movement: Movement) {
        self.undone.push(movement);
    }

    /// Most recent committed move, if any
    pub fn last_move(&self) -> Option<&Movement> {
        self.done.last()
    }

    /// Number of moves that can be undone
    pub fn len(&self) -> usize {
        self.done.len()
    }

    pub fn is_empty(&self) -> bool {
        self.done.is_empty()
    }

    /// Number of moves that can be redone
    pub fn undone_len(&self) -> usize {
        self.undone.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.done.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    pub fn clear(&mut self) {
        self.done.clear();
        self.undone.clear();
    }

    /// Committed moves, oldest first
    pub fn iter(&self) -> std::slice::Iter<'_, Movement> {
        self.done.iter()
    }
}
