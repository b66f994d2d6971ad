//! The stateful board
//!
//! [`Board`] owns the grid, whose turn it is, the check flag and the move
//! history. It is the only type the outside world drives: callers ask it to
//! commit, undo or redo moves and query the results, and never touch cells
//! directly.
//!
//! # Legal destinations
//!
//! Every occupied cell caches the squares its piece may move to. After any
//! mutation (commit, undo, redo, editing the position) the whole cache is
//! thrown away and rebuilt from the pure generator in
//! [`crate::game::rules::move_gen`], then filtered: for pieces of the side
//! to move, a destination is dropped if making that move would leave their
//! own king capturable. That last test relocates the piece through a scoped
//! `HypotheticalMove` guard which restores the board when dropped.
//!
//! The check flag is rebuilt alongside the cache: it is set when any legal
//! destination holds the opposing king.
//!
//! # Special captures
//!
//! - Hitting a Bastion that still has more than one point of endurance
//!   costs it one point and leaves it standing. The attacker stops one
//!   square short of it (per axis), or stays home if it is a Knight. Such a
//!   hit is not recorded in the history and cannot be undone.
//! - A Mimic that captures anything merges the victim's move vectors into
//!   its own. Undo restores the Mimic's previous vectors.

mod cell;
mod probe;
mod setup;


pub use cell::Cell;

use crate::game::config::{BoardConfig, SetupMode};
use crate::game::error::GameResult;
use crate::game::resources::history::{MoveHistory, Movement};
use crate::game::rules::{move_gen, BoardState, MoveVector, MovementChanging, Piece};
use crate::game::types::{PieceColor, Square};
use probe::HypotheticalMove;
use std::collections::BTreeSet;
use std::fmt;
use tracing::{debug, info, warn};

/// Side length used by [`Board::new`]
pub const DEFAULT_BOARD_SIZE: usize = 8;

#[derive(Debug, Clone)]
pub struct Board {
    rank_size: usize,
    file_size: usize,
    cells: Vec<Cell>,
    current_turn_color: PieceColor,
    is_check: bool,
    history: MoveHistory,
}

impl Board {
    /// 8x8 board with the given layout, white to move
    pub fn new(mode: SetupMode) -> Self {
        let mut board = Self::with_size(DEFAULT_BOARD_SIZE, DEFAULT_BOARD_SIZE);
        board.populate(mode);
        board
    }

    /// Board from a numeric mode: 0 standard, 1 empty, 2 custom
    pub fn from_mode_index(mode: u8) -> GameResult<Self> {
        Ok(Self::new(SetupMode::try_from(mode)?))
    }

    /// Empty board of arbitrary size, white to move
    pub fn with_size(rank_size: usize, file_size: usize) -> Self {
        Board {
            rank_size,
            file_size,
            cells: vec![Cell::default(); rank_size * file_size],
            current_turn_color: PieceColor::White,
            is_check: false,
            history: MoveHistory::default(),
        }
    }

    /// Validated board from a [`BoardConfig`]
    pub fn from_config(config: &BoardConfig) -> GameResult<Self> {
        config.validate()?;
        let mut board = Self::with_size(config.rank_size, config.file_size);
        board.populate(config.setup);
        Ok(board)
    }

    fn populate(&mut self, mode: SetupMode) {
        match mode {
            SetupMode::Standard => {
                info!("[BOARD] Default {}x{} board", self.rank_size, self.file_size);
                self.set_up_standard();
            }
            SetupMode::Empty => {
                info!("[BOARD] Empty {}x{} board", self.rank_size, self.file_size);
            }
            SetupMode::Custom => {
                info!("[BOARD] Custom {}x{} board", self.rank_size, self.file_size);
                self.set_up_custom();
            }
        }
        self.recompute_legal_destinations();
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn rank_size(&self) -> usize {
        self.rank_size
    }

    pub fn file_size(&self) -> usize {
        self.file_size
    }

    pub fn current_turn_color(&self) -> PieceColor {
        self.current_turn_color
    }

    /// Whether some piece currently has the opposing king among its legal
    /// destinations
    pub fn is_check(&self) -> bool {
        self.is_check
    }

    /// No piece of the side to move has anywhere to go
    pub fn is_end_game(&self) -> bool {
        !self.cells.iter().any(|cell| {
            cell.piece()
                .is_some_and(|piece| piece.color() == self.current_turn_color)
                && !cell.legal_destinations().is_empty()
        })
    }

    pub fn is_checkmate(&self) -> bool {
        self.is_end_game() && self.is_check
    }

    pub fn is_stalemate(&self) -> bool {
        self.is_end_game() && !self.is_check
    }

    /// Whether the piece on (rank, file) belongs to the side to move and has
    /// somewhere to go
    pub fn can_move(&self, rank: i32, file: i32) -> bool {
        self.cell(Square::new(rank, file)).is_some_and(|cell| {
            cell.piece()
                .is_some_and(|piece| piece.color() == self.current_turn_color)
                && !cell.legal_destinations().is_empty()
        })
    }

    /// Cached legal destinations of the piece on (rank, file); empty for
    /// empty or off-board squares
    pub fn legal_destinations(&self, rank: i32, file: i32) -> BTreeSet<Square> {
        self.cell(Square::new(rank, file))
            .map(|cell| cell.legal_destinations().clone())
            .unwrap_or_default()
    }

    pub fn piece(&self, rank: i32, file: i32) -> Option<&Piece> {
        self.cell(Square::new(rank, file)).and_then(Cell::piece)
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub(crate) fn cell(&self, square: Square) -> Option<&Cell> {
        let index = self.index(square)?;
        Some(&self.cells[index])
    }

    pub(crate) fn cell_mut(&mut self, square: Square) -> Option<&mut Cell> {
        let index = self.index(square)?;
        Some(&mut self.cells[index])
    }

    fn index(&self, square: Square) -> Option<usize> {
        self.in_bounds(square)
            .then(|| square.rank as usize * self.file_size + square.file as usize)
    }

    // ------------------------------------------------------------------
    // Position editing
    // ------------------------------------------------------------------

    /// Put `piece` on (rank, file), replacing any occupant. Returns false
    /// for off-board squares.
    pub fn place_piece(&mut self, piece: Piece, rank: i32, file: i32) -> bool {
        let square = Square::new(rank, file);
        if !self.in_bounds(square) {
            debug!("[BOARD] Cannot place a piece off the board at {}", square);
            return false;
        }
        self.put_piece(square, piece);
        self.recompute_legal_destinations();
        true
    }

    /// Lift the piece off (rank, file)
    pub fn remove_piece(&mut self, rank: i32, file: i32) -> Option<Piece> {
        let removed = self.take_piece(Square::new(rank, file));
        if removed.is_some() {
            self.recompute_legal_destinations();
        }
        removed
    }

    /// Hand the move to `color` without playing a move
    pub fn set_current_turn_color(&mut self, color: PieceColor) {
        self.current_turn_color = color;
        self.recompute_legal_destinations();
    }

    fn take_piece(&mut self, square: Square) -> Option<Piece> {
        self.cell_mut(square).and_then(|cell| cell.take_piece())
    }

    /// Returns the piece that was standing on `square`
    fn put_piece(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        self.cell_mut(square)
            .and_then(|cell| cell.replace_piece(Some(piece)))
    }

    // ------------------------------------------------------------------
    // Moves
    // ------------------------------------------------------------------

    /// Commit a move for the side to move
    ///
    /// Returns false and changes nothing if a square is off the board, the
    /// game is over, the origin is empty or holds an opponent's piece, or
    /// the destination is not in the origin's legal set.
    pub fn attempt_move(&mut self, from_rank: i32, from_file: i32, to_rank: i32, to_file: i32) -> bool {
        let from = Square::new(from_rank, from_file);
        let to = Square::new(to_rank, to_file);

        if !self.in_bounds(from) || !self.in_bounds(to) {
            debug!("[BOARD] Rejected {} -> {}: off the board", from, to);
            return false;
        }
        if self.is_end_game() {
            debug!("[BOARD] Rejected {} -> {}: the game is over", from, to);
            return false;
        }

        let Some(cell) = self.cell(from) else {
            return false;
        };
        let Some(piece) = cell.piece() else {
            debug!("[BOARD] Rejected {} -> {}: no piece on origin", from, to);
            return false;
        };
        if piece.color() != self.current_turn_color {
            debug!(
                "[BOARD] Rejected {} -> {}: {} cannot move a {} piece",
                from,
                to,
                self.current_turn_color,
                piece.color()
            );
            return false;
        }
        if !cell.legal_destinations().contains(&to) {
            debug!("[BOARD] Rejected {} -> {}: not a legal destination", from, to);
            return false;
        }

        let Some(mut mover) = self.take_piece(from) else {
            return false;
        };
        mover.record_move();

        match self.take_piece(to) {
            Some(mut bastion) if bastion.absorbs_hit() => {
                let remaining = bastion.take_hit();
                info!(
                    "[BOARD] {:?} on {} absorbed a hit from {}, endurance left {:?}",
                    bastion.piece_type(),
                    to,
                    from,
                    remaining
                );
                self.put_piece(to, bastion);
                // Not recorded, but the redo line is still gone
                self.history.clear_undone();

                let landing = if mover.piece_type().is_jumper() {
                    from
                } else {
                    to.one_short_from(from)
                };
                if let Some(overwritten) = self.put_piece(landing, mover) {
                    warn!(
                        "[BOARD] Attacker landed on occupied {} and removed a {:?}",
                        landing,
                        overwritten.piece_type()
                    );
                }
                self.finish_turn();
                true
            }
            captured => {
                let mut movement = Movement::new(from, to, None);
                if let Some(victim) = &captured {
                    info!(
                        "[BOARD] {:?} on {} captured {} {:?} on {}",
                        mover.piece_type(),
                        from,
                        victim.color(),
                        victim.piece_type(),
                        to
                    );
                    movement.prior_move_vectors = absorb_capture(&mut mover, victim);
                } else {
                    info!("[BOARD] {:?} moved {} -> {}", mover.piece_type(), from, to);
                }
                movement.captured = captured;

                self.put_piece(to, mover);
                self.history.record(movement);
                self.finish_turn();
                true
            }
        }
    }

    /// Take back the most recent recorded move
    pub fn undo_movement(&mut self) -> bool {
        let Some(mut movement) = self.history.pop_done() else {
            debug!("[HISTORY] Nothing to undo");
            return false;
        };
        let Some(mut mover) = self.take_piece(movement.to) else {
            warn!("[HISTORY] No piece on {} to take back", movement.to);
            self.history.push_done(movement);
            return false;
        };

        if let Some(captured) = movement.captured.take() {
            self.put_piece(movement.to, captured);
        }
        mover.revert_move();
        if let Some(prior) = &movement.prior_move_vectors {
            mover.set_move_vectors(prior.clone());
        }
        self.put_piece(movement.from, mover);

        debug!("[HISTORY] Undid {} -> {}", movement.from, movement.to);
        self.history.push_undone(movement);
        self.finish_turn();
        true
    }

    /// Replay the most recently undone move
    pub fn redo_movement(&mut self) -> bool {
        let Some(mut movement) = self.history.pop_undone() else {
            debug!("[HISTORY] Nothing to redo");
            return false;
        };
        let Some(mut mover) = self.take_piece(movement.from) else {
            warn!("[HISTORY] No piece on {} to replay", movement.from);
            self.history.push_undone(movement);
            return false;
        };

        movement.captured = self.take_piece(movement.to);
        mover.record_move();
        movement.prior_move_vectors = movement
            .captured
            .as_ref()
            .and_then(|victim| absorb_capture(&mut mover, victim));
        self.put_piece(movement.to, mover);

        debug!("[HISTORY] Redid {} -> {}", movement.from, movement.to);
        self.history.push_done(movement);
        self.finish_turn();
        true
    }

    fn finish_turn(&mut self) {
        self.current_turn_color = self.current_turn_color.opposite();
        self.recompute_legal_destinations();
    }

    // ------------------------------------------------------------------
    // Legal move cache
    // ------------------------------------------------------------------

    /// Rebuild every cell's legal destinations and the check flag from the
    /// current placement
    pub fn recompute_legal_destinations(&mut self) {
        self.is_check = false;

        let occupied: Vec<Square> = self
            .occupied_squares()
            .into_iter()
            .map(|(square, _)| square)
            .collect();

        for cell in &mut self.cells {
            cell.set_legal_destinations(BTreeSet::new());
        }
        let pieces = occupied.len();
        for origin in occupied {
            let destinations = self.filtered_destinations(origin);
            if let Some(cell) = self.cell_mut(origin) {
                cell.set_legal_destinations(destinations);
            }
        }
        debug!(
            "[MOVE_GEN] Recomputed destinations for {} pieces, {} to move, check: {}",
            pieces, self.current_turn_color, self.is_check
        );
    }

    fn filtered_destinations(&mut self, origin: Square) -> BTreeSet<Square> {
        let Some(piece) = self.cell(origin).and_then(Cell::piece) else {
            return BTreeSet::new();
        };
        let color = piece.color();
        let candidates = move_gen::reachable_squares(&*self, origin, piece);

        let mut legal = BTreeSet::new();
        for target in candidates {
            if color == self.current_turn_color && self.leaves_king_capturable(origin, target) {
                continue;
            }
            if self
                .cell(target)
                .and_then(Cell::piece)
                .is_some_and(|p| p.is_king() && p.color() != color)
            {
                self.is_check = true;
            }
            legal.insert(target);
        }
        legal
    }

    /// Whether moving `from` -> `to` would let the opponent take the king of
    /// the side to move
    fn leaves_king_capturable(&mut self, from: Square, to: Square) -> bool {
        let king_color = self.current_turn_color;
        let probe = HypotheticalMove::apply(self, from, to);
        move_gen::is_king_capturable(&*probe, king_color)
    }
}

/// Let a movement-inheriting capturer take over the victim's vectors.
/// Returns the capturer's vectors from before the merge when it did.
fn absorb_capture(mover: &mut Piece, victim: &Piece) -> Option<Vec<MoveVector>> {
    if !mover.absorbs_movement() {
        return None;
    }
    let prior = mover.move_vectors().to_vec();
    mover.absorb_move_vectors(victim.move_vectors());
    info!(
        "[BOARD] {:?} absorbed the movement of a {:?}, now {} vectors",
        mover.piece_type(),
        victim.piece_type(),
        mover.move_vectors().len()
    );
    Some(prior)
}

impl BoardState for Board {
    fn rank_size(&self) -> usize {
        self.rank_size
    }

    fn file_size(&self) -> usize {
        self.file_size
    }

    fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.cell(square).and_then(Cell::piece)
    }
}

/// ASCII diagram, highest rank on top; white uppercase, black lowercase
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..self.rank_size as i32).rev() {
            write!(f, "{:>2} |", rank)?;
            for file in 0..self.file_size as i32 {
                let symbol = match self.piece(rank, file) {
                    Some(piece) => match piece.color() {
                        PieceColor::White => piece.piece_type().symbol(),
                        PieceColor::Black => piece.piece_type().symbol().to_ascii_lowercase(),
                    },
                    None => '.',
                };
                write!(f, " {}", symbol)?;
            }
            writeln!(f)?;
        }
        write!(f, "    ")?;
        for file in 0..self.file_size {
            write!(f, " {}", file % 10)?;
        }
        writeln!(f)
    }
}
