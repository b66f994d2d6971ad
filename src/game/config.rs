//! Board configuration
//!
//! [`BoardConfig`] describes the grid size and the initial piece layout.
//! It can be built in code or loaded from JSON, e.g.
//!
//! ```json
//! { "rank_size": 10, "file_size": 8, "setup": "custom" }
//! ```
//!
//! Missing fields fall back to the defaults (8x8, standard setup).

use crate::game::error::{GameError, GameResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// Largest rank or file count accepted from a config
pub const MAX_DIMENSION: usize = 64;

/// Initial piece layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetupMode {
    /// Pawns on ranks 1 and N-2, rook/knight/bishop/queen/king on the back ranks
    #[default]
    Standard,
    /// No pieces at all; positions are built with `Board::place_piece`
    Empty,
    /// Standard layout with a Mimic and a Bastion replacing two pawns per side
    Custom,
}

impl SetupMode {
    /// Smallest (ranks, files) grid the layout fits on
    pub fn min_dimensions(self) -> (usize, usize) {
        match self {
            // Back rank reaches file 4; pawns need their own ranks
            SetupMode::Standard | SetupMode::Custom => (4, 5),
            SetupMode::Empty => (1, 1),
        }
    }
}

impl TryFrom<u8> for SetupMode {
    type Error = GameError;

    fn try_from(mode: u8) -> GameResult<Self> {
        match mode {
            0 => Ok(SetupMode::Standard),
            1 => Ok(SetupMode::Empty),
            2 => Ok(SetupMode::Custom),
            _ => Err(GameError::UnknownSetupMode { mode }),
        }
    }
}

/// Grid size and layout for a new board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rank_size: usize,
    pub file_size: usize,
    pub setup: SetupMode,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rank_size: 8,
            file_size: 8,
            setup: SetupMode::Standard,
        }
    }
}

impl BoardConfig {
    pub fn new(rank_size: usize, file_size: usize, setup: SetupMode) -> Self {
        BoardConfig {
            rank_size,
            file_size,
            setup,
        }
    }

    /// Parse and validate a config from a JSON string
    pub fn from_json(contents: &str) -> GameResult<Self> {
        let config: BoardConfig = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file
    pub fn load(path: impl AsRef<Path>) -> GameResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let config = Self::from_json(&contents)?;
        info!(
            "[CONFIG] Loaded board config from {:?}: {}x{} {:?}",
            path, config.rank_size, config.file_size, config.setup
        );
        Ok(config)
    }

    /// Check the grid is usable and large enough for the chosen setup
    pub fn validate(&self) -> GameResult<()> {
        let in_range = |n: usize| (1..=MAX_DIMENSION).contains(&n);
        if !in_range(self.rank_size) || !in_range(self.file_size) {
            return Err(GameError::InvalidDimensions {
                rank_size: self.rank_size,
                file_size: self.file_size,
                max: MAX_DIMENSION,
            });
        }

        let (min_ranks, min_files) = self.setup.min_dimensions();
        if self.rank_size < min_ranks || self.file_size < min_files {
            return Err(GameError::BoardTooSmall {
                rank_size: self.rank_size,
                file_size: self.file_size,
                setup: self.setup,
                min_ranks,
                min_files,
            });
        }

        Ok(())
    }
}
