//! Piece and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Chess piece kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Piece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Piece {
    /// Parse a piece from a letter (p, n, b, r, q, k), either case.
    #[must_use]
    pub fn from_char(c: char) -> Option<Piece> {
        match c.to_ascii_lowercase() {
            'p' => Some(Piece::Pawn),
            'n' => Some(Piece::Knight),
            'b' => Some(Piece::Bishop),
            'r' => Some(Piece::Rook),
            'q' => Some(Piece::Queen),
            'k' => Some(Piece::King),
            _ => None,
        }
    }

    /// Convert piece to lowercase character
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Piece::Pawn => 'p',
            Piece::Knight => 'n',
            Piece::Bishop => 'b',
            Piece::Rook => 'r',
            Piece::Queen => 'q',
            Piece::King => 'k',
        }
    }

    /// Convert piece to character with case based on color (uppercase for White)
    #[inline]
    #[must_use]
    pub fn to_fen_char(self, color: Color) -> char {
        let c = self.to_char();
        if color == Color::White {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }
}

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors in index order (White=0, Black=1)
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a pawn step (-1 for White, +1 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_direction(self) -> isize {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row the pawns start on (6 for White, 1 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_start_row(self) -> usize {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// FEN side-to-move letter.
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}
