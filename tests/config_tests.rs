//! Board Configuration Integration Tests
//!
//! Loading JSON configs from disk and building boards from them.

use assert_matches::assert_matches;
use std::fs;
use std::path::PathBuf;
use variant_chess::{Board, BoardConfig, GameError, PieceType, SetupMode};

fn write_config(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("variant_chess_{}_{}.json", name, std::process::id()));
    fs::write(&path, contents).expect("temp config should be writable");
    path
}

#[test]
fn test_load_config_and_build_board() {
    let path = write_config("custom", r#"{ "rank_size": 10, "file_size": 7, "setup": "custom" }"#);
    let config = BoardConfig::load(&path).expect("config should load");
    fs::remove_file(&path).ok();

    let board = Board::from_config(&config).expect("board should build");
    assert_eq!(board.rank_size(), 10);
    assert_eq!(board.file_size(), 7);
    assert_eq!(board.piece(8, 1).map(|p| p.piece_type()), Some(PieceType::Mimic));
    assert_eq!(board.piece(1, 5).map(|p| p.piece_type()), Some(PieceType::Bastion));
    assert_eq!(board.piece(9, 6).map(|p| p.piece_type()), Some(PieceType::Rook));
    assert!(!board.is_end_game());
}

#[test]
fn test_missing_config_file() {
    let path = std::env::temp_dir().join("variant_chess_does_not_exist.json");
    assert_matches!(BoardConfig::load(&path), Err(GameError::ConfigIo(_)));
}

#[test]
fn test_board_rejects_invalid_config() {
    let config = BoardConfig::new(3, 8, SetupMode::Standard);
    assert_matches!(
        Board::from_config(&config),
        Err(GameError::BoardTooSmall { .. })
    );
    assert_matches!(
        Board::from_mode_index(9),
        Err(GameError::UnknownSetupMode { mode: 9 })
    );
}

#[test]
fn test_empty_config_means_standard_board() {
    let board = Board::from_config(&BoardConfig::from_json("{}").expect("defaults")).expect("board");
    assert_eq!(board.to_string(), Board::new(SetupMode::Standard).to_string());
}
