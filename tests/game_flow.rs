//! End-to-end game flow through the public API.

use netchess::{parse_square, Board, Color, Game, PieceKind, Square};

fn play(game: &mut Game, from: &str, to: &str) {
    let from = parse_square(from).unwrap();
    let to = parse_square(to).unwrap();
    game.select(from);
    assert!(
        game.attempt_move(to).is_some(),
        "move should be legal in this script"
    );
}

#[test]
fn scholars_mate() {
    let mut game = Game::new();
    play(&mut game, "e2", "e4");
    play(&mut game, "e7", "e5");
    play(&mut game, "f1", "c4");
    play(&mut game, "b8", "c6");
    play(&mut game, "d1", "h5");
    play(&mut game, "g8", "f6");
    play(&mut game, "h5", "f7");

    assert!(game.is_checkmate());
    assert!(game.is_game_over());
    assert_eq!(game.winner(), Some(Color::White));
    assert_eq!(game.history().len(), 7);
}

#[test]
fn selection_drives_the_move_cycle() {
    let mut game = Game::new();

    // Nothing selected yet, so a move attempt is a no-op.
    assert!(game.attempt_move(Square(4, 4)).is_none());

    // Selecting an empty square or the opponent's piece offers nothing.
    assert!(game.select(Square(4, 4)).is_empty());
    assert!(game.select(Square(1, 4)).is_empty());

    // Selecting an own piece offers its legal moves; reselecting another
    // piece replaces the offer.
    assert_eq!(game.select(Square(6, 4)).len(), 2);
    assert_eq!(game.select(Square(7, 1)).len(), 2);
    assert_eq!(game.selected(), Some(Square(7, 1)));

    assert!(game.attempt_move(Square(5, 2)).is_some());
    assert_eq!(game.side_to_move(), Color::Black);
}

#[test]
fn captures_show_up_in_history() {
    let mut game = Game::new();
    play(&mut game, "e2", "e4");
    play(&mut game, "d7", "d5");
    play(&mut game, "e4", "d5");

    let record = game.history().last().unwrap();
    assert_eq!(record.captured.map(|p| p.kind), Some(PieceKind::Pawn));
    assert_eq!(record.captured.map(|p| p.color), Some(Color::Black));
}

#[test]
fn reset_returns_to_the_initial_position() {
    let mut game = Game::new();
    play(&mut game, "e2", "e4");
    play(&mut game, "e7", "e5");
    game.reset();

    assert_eq!(game.board(), &Board::new());
    assert!(game.history().is_empty());
    assert!(!game.is_game_over());
    assert_eq!(game.select(Square(6, 4)).len(), 2);
}

#[test]
fn finished_game_refuses_further_play() {
    let mut game = Game::new();
    play(&mut game, "f2", "f3");
    play(&mut game, "e7", "e5");
    play(&mut game, "g2", "g4");
    play(&mut game, "d8", "h4");
    assert!(game.is_game_over());

    assert!(game.select(Square(6, 0)).is_empty());
    assert!(game.attempt_move(Square(5, 0)).is_none());
}
