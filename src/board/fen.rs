//! FEN placement and side-to-move fields.
//!
//! Castling, en passant and the move clocks are outside these rules, so any
//! fields after the side to move are accepted and ignored, and `to_fen`
//! writes only the first two.

use super::error::FenError;
use super::{Color, GameState, Grid, Piece, Square, BOARD_SIZE};

impl GameState {
    /// Parse a position from FEN notation.
    ///
    /// Returns an error if the FEN string is invalid.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 2 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let grid = parse_placement(parts[0])?;
        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        Ok(GameState::from_grid(grid, side_to_move)?)
    }

    /// Parse a position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Placement and side to move, e.g.
    /// `"rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b"`.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let rows: Vec<String> = (0..BOARD_SIZE)
            .map(|row| {
                let mut text = String::new();
                let mut empty = 0;
                for col in 0..BOARD_SIZE {
                    match self.grid.piece_at(Square::new_unchecked(row, col)) {
                        Some((color, piece)) => {
                            if empty > 0 {
                                text.push_str(&empty.to_string());
                                empty = 0;
                            }
                            text.push(piece.to_fen_char(color));
                        }
                        None => empty += 1,
                    }
                }
                if empty > 0 {
                    text.push_str(&empty.to_string());
                }
                text
            })
            .collect();

        format!("{} {}", rows.join("/"), self.side_to_move.to_char())
    }
}

fn parse_placement(placement: &str) -> Result<Grid, FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != BOARD_SIZE {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    let mut grid = Grid::empty();
    // FEN lists rank 8 first, which is row 0.
    for (row, rank_str) in ranks.iter().enumerate() {
        let rank = BOARD_SIZE - row;
        let mut col = 0;
        for c in rank_str.chars() {
            if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                col += skip as usize;
                continue;
            }
            let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
            let color = if c.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            let square = Square::new(row, col).map_err(|_| FenError::WrongFileCount {
                rank,
                files: col + 1,
            })?;
            grid.set(square, Some((color, piece)));
            col += 1;
        }
        if col != BOARD_SIZE {
            return Err(FenError::WrongFileCount { rank, files: col });
        }
    }
    Ok(grid)
}
