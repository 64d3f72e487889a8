//! Checkmate and stalemate detection tests.

use crate::board::{Board, BoardBuilder, Color, PieceKind, Square};

#[test]
fn test_initial_position_is_not_terminal() {
    let mut board = Board::new();
    assert!(!board.is_checkmate());
    assert!(!board.is_stalemate());
}

#[test]
fn test_fools_mate() {
    let mut board = Board::new();
    for (from, to) in [
        (Square(6, 5), Square(5, 5)), // f3
        (Square(1, 4), Square(3, 4)), // e5
        (Square(6, 6), Square(4, 6)), // g4
        (Square(0, 3), Square(4, 7)), // Qh4#
    ] {
        assert!(board.apply(from, to).is_some());
    }
    assert!(board.is_in_check(Color::White));
    assert!(board.is_checkmate());
    assert!(!board.is_stalemate());
}

#[test]
fn test_back_rank_mate() {
    let mut board = BoardBuilder::new()
        .piece(Square(0, 6), Color::Black, PieceKind::King)
        .piece(Square(1, 5), Color::Black, PieceKind::Pawn)
        .piece(Square(1, 6), Color::Black, PieceKind::Pawn)
        .piece(Square(1, 7), Color::Black, PieceKind::Pawn)
        .piece(Square(0, 0), Color::White, PieceKind::Rook)
        .piece(Square(7, 4), Color::White, PieceKind::King)
        .side_to_move(Color::Black)
        .build();
    assert!(board.is_checkmate());
}

#[test]
fn test_check_with_an_escape_is_not_mate() {
    // The queen gives contact check but stands undefended; the king just
    // takes it.
    let mut board = BoardBuilder::new()
        .piece(Square(7, 4), Color::White, PieceKind::King)
        .piece(Square(6, 4), Color::Black, PieceKind::Queen)
        .piece(Square(0, 4), Color::Black, PieceKind::King)
        .build();
    assert!(board.is_in_check(Color::White));
    assert!(!board.is_checkmate());
    let moves = board.legal_destinations(Square(7, 4));
    assert!(moves.contains(&Square(6, 4)));
}

#[test]
fn test_check_blockable_is_not_mate() {
    let mut board = BoardBuilder::new()
        .piece(Square(7, 4), Color::White, PieceKind::King)
        .piece(Square(7, 0), Color::Black, PieceKind::Rook)
        .piece(Square(6, 7), Color::Black, PieceKind::Rook)
        .piece(Square(5, 2), Color::White, PieceKind::Rook)
        .piece(Square(0, 4), Color::Black, PieceKind::King)
        .build();
    assert!(board.is_in_check(Color::White));
    assert!(!board.is_checkmate());
    // The only reply is interposing on the back rank.
    let moves = board.legal_destinations(Square(5, 2));
    assert!(moves.contains(&Square(7, 2)));
}

#[test]
fn test_corner_stalemate() {
    let mut board = BoardBuilder::new()
        .piece(Square(0, 0), Color::Black, PieceKind::King)
        .piece(Square(2, 1), Color::White, PieceKind::King)
        .piece(Square(1, 2), Color::White, PieceKind::Queen)
        .side_to_move(Color::Black)
        .build();
    assert!(!board.is_in_check(Color::Black));
    assert!(board.is_stalemate());
    assert!(!board.is_checkmate());
}

#[test]
fn test_stalemate_requires_no_moves_anywhere() {
    // Same cage, but a free pawn still has a move, so no stalemate.
    let mut board = BoardBuilder::new()
        .piece(Square(0, 0), Color::Black, PieceKind::King)
        .piece(Square(2, 1), Color::White, PieceKind::King)
        .piece(Square(1, 2), Color::White, PieceKind::Queen)
        .piece(Square(3, 7), Color::Black, PieceKind::Pawn)
        .side_to_move(Color::Black)
        .build();
    assert!(!board.is_stalemate());
}
