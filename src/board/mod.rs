//! Board model and game rules.
//!
//! The board is an 8x8 mailbox indexed by (row, col), row 0 being rank 8.
//! `GameState` owns the board together with the side to move, the king
//! squares and the move log, and turns pseudo-legal moves into legal ones.
//!
//! # Example
//! ```
//! use chess_core::board::{Color, GameState};
//!
//! let mut game = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b");
//! assert!(game.legal_moves().is_empty());
//! assert!(game.is_stalemate());
//! assert_eq!(game.side_to_move(), Color::Black);
//! ```

mod builder;
mod error;
mod fen;
mod grid;
mod legality;
mod make_unmake;
mod movegen;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::PositionBuilder;
pub use error::{FenError, MoveError, PositionError, SquareError};
pub use grid::{Grid, STARTING_GRID};
pub use state::{GameState, Outcome};
pub use types::{Color, Move, Piece, Square, BOARD_SIZE};
