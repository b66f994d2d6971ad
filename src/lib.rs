pub mod game;

pub use game::{Board, BoardConfig, GameError, GameResult, Piece, PieceColor, PieceType, SetupMode, Square};
