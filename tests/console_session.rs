use std::io::Cursor;

use chess_core::console::{parse_console_command, run_console, Flow, Session};

fn run(script: &str) -> (Session, String) {
    let mut out = Vec::new();
    let session = run_console(Cursor::new(script), &mut out).unwrap();
    (session, String::from_utf8(out).unwrap())
}

#[test]
fn plays_moves_and_prints_board() {
    let (session, output) = run("e2e4\nmove e7e5\n");
    assert!(output.contains("played e2e4"));
    assert!(output.contains("played e7e5"));
    assert!(output.contains("White to move"));
    assert_eq!(session.game().move_log().len(), 2);
}

#[test]
fn reports_errors_and_keeps_going() {
    let (session, output) = run("e2e5\ne4e5\nzz\nundo\n");
    assert!(output.contains("error: Illegal move 'e2e5'"));
    assert!(output.contains("error: Illegal move 'e4e5'"));
    assert!(output.contains("unknown command 'zz'"));
    assert!(output.contains("nothing to undo"));
    assert!(session.game().move_log().is_empty());
}

#[test]
fn stops_at_checkmate() {
    let (session, output) = run("f2f3\ne7e5\ng2g4\nd8h4\ne2e4\n");
    assert!(output.contains("checkmate: Black wins"));
    assert!(!output.contains("played e2e4"));
    assert!(session.game().is_checkmate());
}

#[test]
fn stops_at_stalemate_position() {
    let (_, output) = run("position 7k/5Q2/6K1/8/8/8/8/8 b - - 0 1\nmoves\n");
    assert!(output.contains("stalemate"));
}

#[test]
fn announces_check() {
    let (_, output) = run("e2e4\nf7f6\nd1h5\n");
    assert!(output.trim_end().ends_with("check"));
}

#[test]
fn lists_moves_fen_and_perft() {
    let (_, output) = run("moves\nfen\nperft 1\nquit\nmoves\n");
    assert_eq!(output.matches("a2a3").count(), 2);
    assert!(output.contains("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w"));
    assert!(output.contains("total: 20"));
}

#[test]
fn perft_rejects_depth_zero() {
    let (_, output) = run("perft 0\n");
    assert!(output.contains("error: perft depth must be at least 1"));
    assert!(!output.contains("total:"));
}

#[test]
fn undo_and_new_game() {
    let mut session = Session::new();
    let mut out = Vec::new();
    for line in ["d2d4", "undo", "g1f3", "new"] {
        let cmd = parse_console_command(line).unwrap();
        assert_eq!(session.execute(cmd, &mut out).unwrap(), Flow::Continue);
    }
    let output = String::from_utf8(out).unwrap();
    assert!(output.contains("took back d2d4"));
    assert!(session.game().move_log().is_empty());
}
