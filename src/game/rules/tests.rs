//! Move generation test suite
//!
//! Exercises the pure generator against a minimal [`BoardState`] backed by a
//! map, so every rule can be checked without building a full board or
//! running the self-check filter.
//!
//! # Test Organization
//!
//! - `test_board_state_*` - BoardState default methods
//! - `test_pawn_*` - Forward, double step, diagonal capture, mirroring
//! - `test_knight_*` - Jumping movement
//! - `test_bishop_*` / `test_rook_*` / `test_queen_*` - Sliding and blocking
//! - `test_king_*` - Single steps
//! - `test_mimic_*` - Own-capture rules
//! - `test_obstacle_*` - Path checks
//! - `test_king_capture_*` - Attack detection

use super::move_gen::{attacks_king, obstacle_between, vector_targets};
use super::*;
use crate::game::types::{PieceColor, Square};
use std::collections::{BTreeSet, HashMap};

struct TestBoard {
    rank_size: usize,
    file_size: usize,
    pieces: HashMap<Square, Piece>,
}

impl BoardState for TestBoard {
    fn rank_size(&self) -> usize {
        self.rank_size
    }

    fn file_size(&self) -> usize {
        self.file_size
    }

    fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.pieces.get(&square)
    }
}

/// 8x8 board from (piece type, color, (rank, file)) tuples
fn create_test_board(pieces: &[(PieceType, PieceColor, (i32, i32))]) -> TestBoard {
    create_sized_board(8, 8, pieces)
}

fn create_sized_board(
    rank_size: usize,
    file_size: usize,
    pieces: &[(PieceType, PieceColor, (i32, i32))],
) -> TestBoard {
    TestBoard {
        rank_size,
        file_size,
        pieces: pieces
            .iter()
            .map(|&(piece_type, color, (rank, file))| {
                (Square::new(rank, file), Piece::new(piece_type, color))
            })
            .collect(),
    }
}

fn moves_from(board: &TestBoard, rank: i32, file: i32) -> BTreeSet<Square> {
    let origin = Square::new(rank, file);
    let piece = board.piece_at(origin).expect("test square must hold a piece");
    reachable_squares(board, origin, piece)
}

fn squares(list: &[(i32, i32)]) -> BTreeSet<Square> {
    list.iter().map(|&square| Square::from(square)).collect()
}

// ============================================================================
// Board State Tests
// ============================================================================

#[test]
fn test_board_state_bounds_and_emptiness() {
    let board = create_sized_board(4, 6, &[(PieceType::Rook, PieceColor::White, (3, 5))]);

    assert!(board.in_bounds(Square::new(0, 0)));
    assert!(board.in_bounds(Square::new(3, 5)));
    assert!(!board.in_bounds(Square::new(4, 0)));
    assert!(!board.in_bounds(Square::new(0, 6)));
    assert!(!board.in_bounds(Square::new(-1, 2)));

    assert!(board.is_empty(Square::new(0, 0)));
    assert!(!board.is_empty(Square::new(3, 5)));
}

#[test]
fn test_board_state_occupied_squares_rank_major() {
    let board = create_test_board(&[
        (PieceType::King, PieceColor::Black, (7, 0)),
        (PieceType::Rook, PieceColor::White, (0, 7)),
        (PieceType::Pawn, PieceColor::White, (0, 2)),
    ]);

    let order: Vec<Square> = board.occupied_squares().into_iter().map(|(s, _)| s).collect();
    assert_eq!(
        order,
        vec![Square::new(0, 2), Square::new(0, 7), Square::new(7, 0)]
    );
}

// ============================================================================
// Pawn Movement Tests
// ============================================================================

#[test]
fn test_pawn_forward_and_double_step() {
    //! White pawns advance towards higher ranks, black towards lower ranks;
    //! both may step twice from their initial state
    let board = create_test_board(&[
        (PieceType::Pawn, PieceColor::White, (1, 4)),
        (PieceType::Pawn, PieceColor::Black, (6, 4)),
    ]);

    assert_eq!(moves_from(&board, 1, 4), squares(&[(2, 4), (3, 4)]));
    assert_eq!(moves_from(&board, 6, 4), squares(&[(5, 4), (4, 4)]));
}

#[test]
fn test_pawn_double_step_gone_after_first_move() {
    let mut board = create_test_board(&[(PieceType::Pawn, PieceColor::White, (2, 4))]);
    if let Some(pawn) = board.pieces.get_mut(&Square::new(2, 4)) {
        pawn.record_move();
    }

    assert_eq!(moves_from(&board, 2, 4), squares(&[(3, 4)]));
}

#[test]
fn test_pawn_blocked_by_piece() {
    let board = create_test_board(&[
        (PieceType::Pawn, PieceColor::White, (1, 4)),
        (PieceType::Knight, PieceColor::Black, (2, 4)),
    ]);

    assert!(moves_from(&board, 1, 4).is_empty(), "Cannot capture or jump straight ahead");
}

#[test]
fn test_pawn_diagonal_capture() {
    let board = create_test_board(&[
        (PieceType::Pawn, PieceColor::White, (3, 3)),
        (PieceType::Rook, PieceColor::Black, (4, 2)),
        (PieceType::Rook, PieceColor::White, (4, 4)),
        (PieceType::Pawn, PieceColor::Black, (5, 5)),
        (PieceType::Bishop, PieceColor::White, (4, 6)),
    ]);

    // Double step is still available, the own rook on (4, 4) is not a target
    assert_eq!(moves_from(&board, 3, 3), squares(&[(4, 2), (4, 3), (5, 3)]));
    // Black captures downwards, on both diagonals
    assert_eq!(
        moves_from(&board, 5, 5),
        squares(&[(4, 4), (4, 5), (3, 5), (4, 6)])
    );
}

// ============================================================================
// Knight Movement Tests
// ============================================================================

#[test]
fn test_knight_l_shaped_movement() {
    let board = create_test_board(&[
        (PieceType::Knight, PieceColor::White, (3, 3)),
        (PieceType::Knight, PieceColor::White, (0, 0)),
    ]);

    assert_eq!(
        moves_from(&board, 3, 3),
        squares(&[(4, 5), (4, 1), (2, 5), (2, 1), (5, 4), (5, 2), (1, 4), (1, 2)])
    );
    assert_eq!(moves_from(&board, 0, 0), squares(&[(1, 2), (2, 1)]));
}

#[test]
fn test_knight_can_jump_over_pieces() {
    //! Own pawns fill every square a knight on (0, 1) could step through,
    //! and the one on (1, 3) is also a knight target it may not take
    let mut pieces = vec![(PieceType::Knight, PieceColor::White, (0, 1))];
    for file in 0..4 {
        pieces.push((PieceType::Pawn, PieceColor::White, (1, file)));
    }
    let board = create_test_board(&pieces);

    assert_eq!(moves_from(&board, 0, 1), squares(&[(2, 0), (2, 2)]));
}

// ============================================================================
// Sliding Piece Tests
// ============================================================================

#[test]
fn test_bishop_blocked_by_own_piece() {
    let board = create_test_board(&[
        (PieceType::Bishop, PieceColor::White, (0, 2)),
        (PieceType::Pawn, PieceColor::White, (1, 3)),
    ]);

    assert_eq!(moves_from(&board, 0, 2), squares(&[(1, 1), (2, 0)]));
}

#[test]
fn test_rook_stops_at_capture() {
    let board = create_test_board(&[
        (PieceType::Rook, PieceColor::White, (3, 3)),
        (PieceType::Pawn, PieceColor::Black, (3, 5)),
        (PieceType::Pawn, PieceColor::White, (1, 3)),
    ]);

    let moves = moves_from(&board, 3, 3);
    assert!(moves.contains(&Square::new(3, 4)));
    assert!(moves.contains(&Square::new(3, 5)));
    assert!(!moves.contains(&Square::new(3, 6)));
    assert!(moves.contains(&Square::new(2, 3)));
    assert!(!moves.contains(&Square::new(1, 3)));
    assert!(!moves.contains(&Square::new(0, 3)));
    assert_eq!(moves.len(), 2 + 3 + 1 + 4);
}

#[test]
fn test_rook_unbounded_clamped_to_board() {
    let board = create_sized_board(20, 3, &[(PieceType::Rook, PieceColor::White, (0, 0))]);

    let moves = moves_from(&board, 0, 0);
    assert_eq!(moves.len(), 19 + 2);
    assert!(moves.contains(&Square::new(19, 0)));
}

#[test]
fn test_queen_open_board() {
    let board = create_test_board(&[(PieceType::Queen, PieceColor::White, (3, 3))]);

    assert_eq!(moves_from(&board, 3, 3).len(), 27);
}

#[test]
fn test_king_single_square_movement() {
    let board = create_test_board(&[
        (PieceType::King, PieceColor::White, (3, 3)),
        (PieceType::King, PieceColor::Black, (7, 7)),
    ]);

    assert_eq!(moves_from(&board, 3, 3).len(), 8);
    assert_eq!(moves_from(&board, 7, 7), squares(&[(6, 6), (6, 7), (7, 6)]));
}

#[test]
fn test_bastion_moves_like_king() {
    let board = create_test_board(&[(PieceType::Bastion, PieceColor::Black, (0, 0))]);

    assert_eq!(moves_from(&board, 0, 0), squares(&[(0, 1), (1, 0), (1, 1)]));
}

// ============================================================================
// Mimic Tests
// ============================================================================

#[test]
fn test_mimic_captures_own_pieces_but_not_own_king() {
    let board = create_test_board(&[
        (PieceType::Mimic, PieceColor::White, (3, 3)),
        (PieceType::Rook, PieceColor::White, (4, 3)),
        (PieceType::King, PieceColor::White, (2, 3)),
        (PieceType::Pawn, PieceColor::Black, (3, 4)),
    ]);

    let moves = moves_from(&board, 3, 3);
    assert!(moves.contains(&Square::new(4, 3)));
    assert!(moves.contains(&Square::new(3, 4)));
    assert!(!moves.contains(&Square::new(2, 3)));
    assert_eq!(moves.len(), 7);
}

#[test]
fn test_mimic_absorbed_vectors_extend_reach() {
    let mut board = create_test_board(&[(PieceType::Mimic, PieceColor::Black, (0, 0))]);
    let rook = Piece::new(PieceType::Rook, PieceColor::White);
    if let Some(mimic) = board.pieces.get_mut(&Square::new(0, 0)) {
        assert!(mimic.absorb_move_vectors(rook.move_vectors()));
    }

    let moves = moves_from(&board, 0, 0);
    assert!(moves.contains(&Square::new(7, 0)));
    assert!(moves.contains(&Square::new(0, 7)));
    assert!(moves.contains(&Square::new(1, 1)));
    assert!(!moves.contains(&Square::new(2, 2)));
}

// ============================================================================
// Path And Attack Tests
// ============================================================================

#[test]
fn test_obstacle_straight_and_diagonal() {
    let board = create_test_board(&[
        (PieceType::Pawn, PieceColor::White, (2, 2)),
        (PieceType::Pawn, PieceColor::White, (0, 3)),
    ]);

    assert!(obstacle_between(&board, Square::new(0, 0), Square::new(4, 4)));
    assert!(!obstacle_between(&board, Square::new(0, 0), Square::new(2, 2)));
    assert!(obstacle_between(&board, Square::new(0, 0), Square::new(0, 5)));
    assert!(!obstacle_between(&board, Square::new(0, 0), Square::new(0, 3)));
    assert!(!obstacle_between(&board, Square::new(5, 5), Square::new(5, 6)));
}

#[test]
fn test_obstacle_off_line_target_terminates() {
    //! Off-line targets are walked diagonally first, then straight
    let board = create_test_board(&[(PieceType::Pawn, PieceColor::Black, (1, 1))]);

    assert!(obstacle_between(&board, Square::new(0, 0), Square::new(2, 1)));
    assert!(!obstacle_between(&board, Square::new(3, 0), Square::new(1, 1)));
    assert!(!obstacle_between(&board, Square::new(7, 7), Square::new(4, 6)));
}

#[test]
fn test_vector_targets_respects_empty_rule() {
    let board = create_test_board(&[
        (PieceType::Pawn, PieceColor::White, (1, 1)),
        (PieceType::Pawn, PieceColor::Black, (2, 2)),
    ]);
    let origin = Square::new(1, 1);
    let pawn = board.piece_at(origin).expect("pawn placed");
    let capture = MoveVector::new(1, 1, 1).capture_only();

    assert_eq!(
        vector_targets(&board, origin, pawn, &capture),
        vec![Square::new(2, 2)]
    );
}

#[test]
fn test_king_capture_detected_along_open_file() {
    let mut board = create_test_board(&[
        (PieceType::King, PieceColor::White, (0, 4)),
        (PieceType::Rook, PieceColor::Black, (7, 4)),
        (PieceType::King, PieceColor::Black, (7, 7)),
    ]);

    assert!(is_king_capturable(&board, PieceColor::White));
    assert!(!is_king_capturable(&board, PieceColor::Black));
    let rook = board.piece_at(Square::new(7, 4)).expect("rook placed");
    assert!(attacks_king(&board, Square::new(7, 4), rook, PieceColor::White));

    board.pieces.insert(
        Square::new(3, 4),
        Piece::new(PieceType::Pawn, PieceColor::White),
    );
    assert!(!is_king_capturable(&board, PieceColor::White));
}

#[test]
fn test_king_capture_without_king() {
    let board = create_test_board(&[(PieceType::Queen, PieceColor::Black, (4, 4))]);

    assert!(!is_king_capturable(&board, PieceColor::White));
}

#[test]
fn test_king_capture_by_pawn_only_diagonally() {
    let board = create_test_board(&[
        (PieceType::King, PieceColor::Black, (4, 4)),
        (PieceType::Pawn, PieceColor::White, (3, 4)),
    ]);
    assert!(!is_king_capturable(&board, PieceColor::Black));

    let board = create_test_board(&[
        (PieceType::King, PieceColor::Black, (4, 4)),
        (PieceType::Pawn, PieceColor::White, (3, 3)),
    ]);
    assert!(is_king_capturable(&board, PieceColor::Black));
}
