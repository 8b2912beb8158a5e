//! Make/undo move tests.

use crate::board::{Color, GameState, Move, MoveError, Piece, Square};

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

fn find_move(game: &mut GameState, notation: &str) -> Move {
    game.legal_moves()
        .into_iter()
        .find(|m| m.notation() == notation)
        .unwrap_or_else(|| panic!("Expected move {notation} not found"))
}

#[test]
fn test_make_move_updates_board_turn_and_log() {
    let mut game = GameState::new();
    let mv = find_move(&mut game, "e2e4");
    game.make_move(mv).unwrap();

    assert_eq!(game.piece_at(sq("e2")), None);
    assert_eq!(game.piece_at(sq("e4")), Some((Color::White, Piece::Pawn)));
    assert_eq!(game.side_to_move(), Color::Black);
    assert_eq!(game.move_log(), &[mv]);
}

#[test]
fn test_undo_restores_capture() {
    let mut game = GameState::new();
    for notation in ["e2e4", "d7d5", "e4d5"] {
        game.play(notation).unwrap();
    }
    let before_capture = GameState::from_fen("rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w");

    let undone = game.undo_move().unwrap();
    assert_eq!(undone.notation(), "e4d5");
    assert_eq!(undone.captured(), Some((Color::Black, Piece::Pawn)));
    assert_eq!(game.grid(), before_capture.grid());
    assert_eq!(game.side_to_move(), Color::White);
}

#[test]
fn test_undo_all_returns_to_start() {
    let mut game = GameState::new();
    for notation in ["g1f3", "b8c6", "f3g5", "c6d4", "g5f7", "e8f7"] {
        game.play(notation).unwrap();
    }
    assert_eq!(game.move_log().len(), 6);
    while game.undo_move().is_some() {}
    assert_eq!(*game.grid(), *GameState::new().grid());
    assert_eq!(game.side_to_move(), Color::White);
    assert_eq!(game.king_square(Color::Black), sq("e8"));
}

#[test]
fn test_king_square_follows_king() {
    let mut game = GameState::new();
    game.play("e2e4").unwrap();
    game.play("e7e5").unwrap();
    game.play("e1e2").unwrap();
    assert_eq!(game.king_square(Color::White), sq("e2"));
    game.play("e8e7").unwrap();
    assert_eq!(game.king_square(Color::Black), sq("e7"));

    game.undo_move();
    assert_eq!(game.king_square(Color::Black), sq("e8"));
    game.undo_move();
    assert_eq!(game.king_square(Color::White), sq("e1"));
}

#[test]
fn test_undo_on_empty_log_is_noop() {
    let mut game = GameState::new();
    assert_eq!(game.undo_move(), None);
    assert_eq!(game.side_to_move(), Color::White);
    assert_eq!(game.to_fen(), GameState::new().to_fen());
}

#[test]
fn test_make_move_from_empty_square_is_rejected() {
    let mut game = GameState::new();
    let mv = Move::new(sq("e4"), sq("e5"), game.grid());
    assert_eq!(
        game.make_move(mv),
        Err(MoveError::EmptySource { square: sq("e4") })
    );
    assert!(game.move_log().is_empty());
    assert_eq!(game.side_to_move(), Color::White);
}

#[test]
fn test_make_move_rejects_move_from_other_board() {
    let mut game = GameState::new();
    let built_on_empty = Move::new(sq("e2"), sq("e4"), &crate::board::Grid::empty());
    assert_eq!(
        game.make_move(built_on_empty),
        Err(MoveError::Stale {
            notation: "e2e4".to_string()
        })
    );
    assert_eq!(game.piece_at(sq("e2")), Some((Color::White, Piece::Pawn)));
    assert!(game.move_log().is_empty());

    // Target square filled since the move was built.
    let early = Move::new(sq("g1"), sq("f3"), game.grid());
    game.play("e2e4").unwrap();
    game.play("g8f6").unwrap();
    game.play("f1e2").unwrap();
    game.play("f6g4").unwrap();
    game.play("e2f3").unwrap();
    game.play("g4f6").unwrap();
    assert!(matches!(game.make_move(early), Err(MoveError::Stale { .. })));
    assert_eq!(game.piece_at(sq("f3")), Some((Color::White, Piece::Bishop)));
}

#[test]
fn test_make_move_is_unchecked() {
    // Moving Black's pawn on White's turn is applied as asked.
    let mut game = GameState::new();
    let mv = Move::new(sq("e7"), sq("e5"), game.grid());
    game.make_move(mv).unwrap();
    assert_eq!(game.piece_at(sq("e5")), Some((Color::Black, Piece::Pawn)));
    assert_eq!(game.side_to_move(), Color::Black);
}

#[test]
fn test_try_make_move_rejects_illegal() {
    let mut game = GameState::new();
    let mv = Move::new(sq("e2"), sq("e5"), game.grid());
    assert_eq!(
        game.try_make_move(mv),
        Err(MoveError::Illegal {
            notation: "e2e5".to_string()
        })
    );
    assert!(game.move_log().is_empty());
}

#[test]
fn test_try_make_move_uses_current_occupants() {
    // Built against the starting grid, so nothing is frozen as captured.
    let stale = Move::new(sq("e4"), sq("d5"), &crate::board::STARTING_GRID);
    let mut game = GameState::new();
    for notation in ["e2e4", "d7d5"] {
        game.play(notation).unwrap();
    }
    let applied = game.try_make_move(stale).unwrap();
    assert_eq!(applied.captured(), Some((Color::Black, Piece::Pawn)));

    game.undo_move();
    assert_eq!(game.piece_at(sq("d5")), Some((Color::Black, Piece::Pawn)));
}

#[test]
fn test_legal_moves_stable_after_make_undo() {
    let mut game = GameState::new();
    let initial: Vec<String> = game.legal_moves().iter().map(Move::notation).collect();

    for mv in game.legal_moves() {
        game.make_move(mv).unwrap();
        game.undo_move();
    }

    let after: Vec<String> = game.legal_moves().iter().map(Move::notation).collect();
    assert_eq!(initial, after);
}

#[test]
fn test_play_reports_parse_errors() {
    let mut game = GameState::new();
    assert_eq!(game.play("e2"), Err(MoveError::InvalidLength { len: 2 }));
    assert_eq!(
        game.play("z2e4"),
        Err(MoveError::InvalidSquare {
            notation: "z2e4".to_string()
        })
    );
}
