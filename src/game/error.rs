//! Error types for game module
//!
//! Invalid game actions (illegal moves, out-of-range queries, undo with an
//! empty history) are not errors: they return `false`/empty and leave the
//! board untouched. The errors here cover board construction and
//! configuration loading only.

use crate::game::config::SetupMode;

/// Errors that can occur while configuring or building a board
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// Setup mode index outside 0..=2
    #[error("Unknown setup mode: {mode} (expected 0, 1 or 2)")]
    UnknownSetupMode { mode: u8 },

    /// Zero-sized or oversized grid
    #[error("Invalid board dimensions {rank_size}x{file_size} (each side must be 1..={max})")]
    InvalidDimensions {
        rank_size: usize,
        file_size: usize,
        max: usize,
    },

    /// Grid too small to hold the pieces the setup places
    #[error(
        "Board of {rank_size}x{file_size} is too small for the {setup:?} setup (needs at least {min_ranks}x{min_files})"
    )]
    BoardTooSmall {
        rank_size: usize,
        file_size: usize,
        setup: SetupMode,
        min_ranks: usize,
        min_files: usize,
    },

    /// Config file I/O error
    #[error("Config I/O error: {0}")]
    ConfigIo(#[from] std::io::Error),

    /// Config deserialization error
    #[error("Config serialization error: {0}")]
    ConfigSerialization(#[from] serde_json::Error),
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
