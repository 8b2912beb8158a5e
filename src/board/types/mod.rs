//! Core chess types.
//!
//! - `Piece` and `Color` - piece kinds and colors
//! - `Square` - (row, col) board coordinate with algebraic notation
//! - `Move` - a transition frozen against one board snapshot

mod moves;
mod piece;
mod square;

pub use moves::Move;
pub use piece::{Color, Piece};
pub use square::{Square, BOARD_SIZE};
