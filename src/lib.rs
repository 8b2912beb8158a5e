//! Chess position tracking with legal move generation and check, checkmate
//! and stalemate detection.
//!
//! # Example
//! ```
//! use chess_core::new_game;
//!
//! let mut game = new_game();
//! let moves = game.legal_moves();
//! assert_eq!(moves.len(), 20);
//!
//! let e4 = moves.into_iter().find(|m| m.notation() == "e2e4").unwrap();
//! game.make_move(e4).unwrap();
//! assert_eq!(game.legal_moves().len(), 20);
//! ```

#[macro_use]
mod logging;

pub mod board;
pub mod console;
pub mod perft;

pub use board::{
    Color, FenError, GameState, Grid, Move, MoveError, Outcome, Piece, PositionBuilder,
    PositionError, Square, SquareError, STARTING_GRID,
};

/// Standard initial position, White to move.
#[must_use]
pub fn new_game() -> GameState {
    GameState::new()
}
