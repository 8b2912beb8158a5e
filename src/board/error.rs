//! Error types for board and game operations.

use std::error::Error;
use std::fmt;

use super::{Color, Square};

/// Error type for square construction and parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row or column outside 0-7
    OutOfBounds { row: usize, col: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::OutOfBounds { row, col } => {
                write!(f, "Square ({row}, {col}) out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl Error for SquareError {}

/// Error type for move parsing and application failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Move string must be exactly 4 characters
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// The start square is empty on the current board
    EmptySource { square: Square },
    /// Move is not in the legal move list of the current position
    Illegal { notation: String },
    /// Pieces frozen into the move differ from the current board
    Stale { notation: String },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::InvalidLength { len } => {
                write!(f, "Move must be 4 characters, found {len}")
            }
            MoveError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveError::EmptySource { square } => {
                write!(f, "No piece on {square}")
            }
            MoveError::Illegal { notation } => {
                write!(f, "Illegal move '{notation}'")
            }
            MoveError::Stale { notation } => {
                write!(f, "Move '{notation}' was built against a different board")
            }
        }
    }
}

impl Error for MoveError {}

/// Error type for positions that break the one-king-per-color rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    MissingKing { color: Color },
    ExtraKing { color: Color, square: Square },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::MissingKing { color } => write!(f, "{color} has no king"),
            PositionError::ExtraKing { color, square } => {
                write!(f, "{color} has a second king on {square}")
            }
        }
    }
}

impl Error for PositionError {}

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string has too few parts (needs placement and side to move)
    TooFewParts { found: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Placement does not have exactly 8 ranks
    WrongRankCount { found: usize },
    /// A rank does not describe exactly 8 files
    WrongFileCount { rank: usize, files: usize },
    /// Placement parsed but the kings are wrong
    InvalidPosition(PositionError),
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "FEN must have at least 2 parts, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::WrongRankCount { found } => {
                write!(f, "FEN placement must have 8 ranks, found {found}")
            }
            FenError::WrongFileCount { rank, files } => {
                write!(f, "Rank {rank} describes {files} files, expected 8")
            }
            FenError::InvalidPosition(err) => write!(f, "Invalid position: {err}"),
        }
    }
}

impl Error for FenError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FenError::InvalidPosition(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PositionError> for FenError {
    fn from(err: PositionError) -> Self {
        FenError::InvalidPosition(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_error_out_of_bounds() {
        let err = SquareError::OutOfBounds { row: 9, col: 3 };
        assert!(err.to_string().contains('9'));
        assert!(err.to_string().contains('3'));
    }

    #[test]
    fn test_square_error_invalid_notation() {
        let err = SquareError::InvalidNotation {
            notation: "xyz".to_string(),
        };
        assert!(err.to_string().contains("xyz"));
    }

    #[test]
    fn test_move_error_invalid_length() {
        let err = MoveError::InvalidLength { len: 3 };
        assert!(err.to_string().contains('3'));
    }

    #[test]
    fn test_move_error_empty_source() {
        let err = MoveError::EmptySource {
            square: "e4".parse().unwrap(),
        };
        assert!(err.to_string().contains("e4"));
    }

    #[test]
    fn test_move_error_illegal() {
        let err = MoveError::Illegal {
            notation: "e2e5".to_string(),
        };
        assert!(err.to_string().contains("e2e5"));
    }

    #[test]
    fn test_move_error_stale() {
        let err = MoveError::Stale {
            notation: "e2e4".to_string(),
        };
        assert!(err.to_string().contains("different board"));
    }

    #[test]
    fn test_fen_error_too_few_parts() {
        let err = FenError::TooFewParts { found: 1 };
        assert!(err.to_string().contains('1'));
    }

    #[test]
    fn test_fen_error_invalid_piece() {
        let err = FenError::InvalidPiece { char: 'z' };
        assert!(err.to_string().contains("'z'"));
    }

    #[test]
    fn test_fen_error_wraps_position_error() {
        let err: FenError = PositionError::MissingKing {
            color: Color::Black,
        }
        .into();
        assert!(err.to_string().contains("Black has no king"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_error_clone() {
        let err = FenError::InvalidSideToMove {
            found: "x".to_string(),
        };
        assert_eq!(err.clone(), err);
    }
}
