//! Variant chess game logic
//!
//! A rectangular board holding standard chess pieces plus two variants: the
//! Bastion, which survives several hits, and the Mimic, which takes over the
//! movement of whatever it captures. The board caches each piece's legal
//! destinations and keeps an undo/redo history.
//!
//! # Module Organization
//!
//! - `types` - Colors and board coordinates
//! - `rules` - Move vectors, pieces and the pure move generator
//! - `board` - The stateful board: setup, move commit, legality cache
//! - `resources` - Move history
//! - `config` - Board dimensions and setup layout, loadable from JSON
//! - `error` - Error type for construction and configuration

pub mod board;
pub mod config;
pub mod error;
pub mod resources;
pub mod rules;
pub mod types;

pub use board::{Board, Cell, DEFAULT_BOARD_SIZE};
pub use config::{BoardConfig, SetupMode};
pub use error::{GameError, GameResult};
pub use resources::{MoveHistory, Movement};
pub use rules::{MoveVector, Multiplicity, Piece, PieceExtra, PieceId, PieceType};
pub use types::{PieceColor, Square};
