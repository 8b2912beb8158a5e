//! Square types and algebraic notation.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 8;

const FILES: [char; BOARD_SIZE] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

// Indexed by row: row 0 is rank 8.
const RANKS: [char; BOARD_SIZE] = ['8', '7', '6', '5', '4', '3', '2', '1'];

fn file_to_col(file: char) -> Option<usize> {
    FILES.iter().position(|&f| f == file)
}

fn rank_to_row(rank: char) -> Option<usize> {
    RANKS.iter().position(|&r| r == rank)
}

/// A square on the chess board, represented as (row, col).
///
/// Row 0 is rank 8 (Black's back rank) and column 0 is file a, so
/// `e2` is row 6, col 4. A `Square` is always on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "(usize, usize)", into = "(usize, usize)")
)]
pub struct Square(usize, usize);

impl Square {
    /// Create a new square with bounds checking.
    pub fn new(row: usize, col: usize) -> Result<Self, SquareError> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Ok(Square(row, col))
        } else {
            Err(SquareError::OutOfBounds { row, col })
        }
    }

    /// Caller guarantees `row < 8 && col < 8`.
    #[inline]
    pub(crate) const fn new_unchecked(row: usize, col: usize) -> Self {
        Square(row, col)
    }

    /// Row index (0-7, where 0 = rank 8)
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0
    }

    /// Column index (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.1
    }

    /// File letter, 'a'..='h'.
    #[inline]
    #[must_use]
    pub const fn file(self) -> char {
        FILES[self.1]
    }

    /// Rank digit, '1'..='8'.
    #[inline]
    #[must_use]
    pub const fn rank(self) -> char {
        RANKS[self.0]
    }

    /// The square `(row + d_row, col + d_col)`, or `None` off the board.
    #[inline]
    #[must_use]
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        let row = self.0.checked_add_signed(d_row)?;
        let col = self.1.checked_add_signed(d_col)?;
        Square::new(row, col).ok()
    }

    /// Algebraic name of the square, e.g. `"e4"`.
    #[must_use]
    pub fn to_notation(self) -> String {
        self.to_string()
    }

    /// Every square in row-major order (a8, b8, ..., h1).
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square(row, col)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Square::new(row, col)
    }
}

impl From<Square> for (usize, usize) {
    fn from(sq: Square) -> Self {
        (sq.0, sq.1)
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };

        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        let col = file_to_col(file).ok_or_else(invalid)?;
        let row = rank_to_row(rank).ok_or_else(invalid)?;
        Ok(Square(row, col))
    }
}
