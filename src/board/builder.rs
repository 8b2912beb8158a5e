//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use chess_core::board::{Color, Piece, PositionBuilder, Square};
//!
//! let sq = |name: &str| name.parse::<Square>().unwrap();
//! let game = PositionBuilder::new()
//!     .piece(sq("e1"), Color::White, Piece::King)
//!     .piece(sq("e8"), Color::Black, Piece::King)
//!     .piece(sq("a2"), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build()
//!     .unwrap();
//! assert_eq!(game.king_square(Color::Black), sq("e8"));
//! ```

use super::error::PositionError;
use super::{Color, GameState, Grid, Piece, Square, STARTING_GRID};

/// A fluent builder for constructing `GameState` positions.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    grid: Grid,
    side_to_move: Color,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            grid: Grid::empty(),
            side_to_move: Color::White,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        PositionBuilder {
            grid: STARTING_GRID,
            side_to_move: Color::White,
        }
    }

    /// Place a piece on the board, replacing whatever was there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.grid.set(square, Some((color, piece)));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.grid.set(square, None);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Build the game. Fails unless each color has exactly one king.
    pub fn build(self) -> Result<GameState, PositionError> {
        GameState::from_grid(self.grid, self.side_to_move)
    }
}
