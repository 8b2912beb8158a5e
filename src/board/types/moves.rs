//! Move type.

use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece};
use super::square::Square;
use crate::board::error::MoveError;
use crate::board::grid::Grid;

/// A single transition from `start` to `end`.
///
/// The occupants of both squares are frozen when the move is built, so undo
/// never has to look anything up. Equality and hashing only consider the two
/// squares: a `Move` is meaningful against the board it was built from, and
/// comparing moves built from different positions can confuse captures.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    start: Square,
    end: Square,
    moved: Option<(Color, Piece)>,
    captured: Option<(Color, Piece)>,
}

impl Move {
    /// Build a move against `grid`, recording what stands on both squares.
    #[must_use]
    pub fn new(start: Square, end: Square, grid: &Grid) -> Self {
        Move {
            start,
            end,
            moved: grid.piece_at(start),
            captured: grid.piece_at(end),
        }
    }

    /// Parse a 4-character coordinate pair such as `"e2e4"` against `grid`.
    pub fn parse(text: &str, grid: &Grid) -> Result<Self, MoveError> {
        let text = text.trim();
        let len = text.chars().count();
        if len != 4 {
            return Err(MoveError::InvalidLength { len });
        }
        let invalid = || MoveError::InvalidSquare {
            notation: text.to_string(),
        };
        if !text.is_ascii() {
            return Err(invalid());
        }
        let start: Square = text[..2].parse().map_err(|_| invalid())?;
        let end: Square = text[2..].parse().map_err(|_| invalid())?;
        Ok(Move::new(start, end, grid))
    }

    #[inline]
    #[must_use]
    pub const fn start(&self) -> Square {
        self.start
    }

    #[inline]
    #[must_use]
    pub const fn end(&self) -> Square {
        self.end
    }

    /// The piece that stood on `start` when the move was built.
    #[inline]
    #[must_use]
    pub const fn moved(&self) -> Option<(Color, Piece)> {
        self.moved
    }

    /// Whatever stood on `end` when the move was built.
    #[inline]
    #[must_use]
    pub const fn captured(&self) -> Option<(Color, Piece)> {
        self.captured
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Start and end squares in algebraic form, e.g. `"e2e4"`.
    #[must_use]
    pub fn notation(&self) -> String {
        format!("{}{}", self.start, self.end)
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.start, self.end)
    }
}
