//! Chess rules module - Pure game logic
//!
//! Implements piece movement and attack detection as pure functions over a
//! read-only [`BoardState`], so the rules can be tested without a full board
//! and reused by the board's hypothetical-move checks.
//!
//! # Module Structure
//!
//! - `move_vector` - Declarative movement rule and its direction expansion
//! - `piece_moves` - Starting move-vector table for each piece type
//! - `piece` - Piece value, variant counters, move absorption capability
//! - `board_state` - Read-only occupancy trait the generator works against
//! - `move_gen` - Ray casting, obstacle and king-attack detection

pub mod board_state;
pub mod move_gen;
pub mod move_vector;
pub mod piece;
pub mod piece_moves;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use board_state::BoardState;
pub use move_gen::{is_king_capturable, reachable_squares};
pub use move_vector::{MoveVector, Multiplicity, UNBOUNDED};
pub use piece::{MovementChanging, Piece, PieceExtra, PieceId, PieceType, BASTION_ENDURANCE};
pub use piece_moves::initial_move_vectors;
