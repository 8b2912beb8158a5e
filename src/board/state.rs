use super::error::PositionError;
use super::{Color, Grid, Move, Piece, Square, STARTING_GRID};

// e1 and e8, indexed by `Color::index`.
const STARTING_KING_SQUARES: [Square; 2] =
    [Square::new_unchecked(7, 4), Square::new_unchecked(0, 4)];

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Checkmate { winner: Color },
    Stalemate,
}

/// A game in progress: the board, whose turn it is, where the kings are and
/// every move applied so far.
///
/// The only mutations are `make_move` and `undo_move`. The checkmate and
/// stalemate flags describe the position at the last `legal_moves` call.
#[derive(Clone, Debug)]
pub struct GameState {
    pub(crate) grid: Grid,
    pub(crate) side_to_move: Color,
    pub(crate) move_log: Vec<Move>,
    pub(crate) king_squares: [Square; 2],
    pub(crate) is_checkmate: bool,
    pub(crate) is_stalemate: bool,
}

impl GameState {
    /// Standard initial position, White to move.
    #[must_use]
    pub fn new() -> Self {
        GameState {
            grid: STARTING_GRID,
            side_to_move: Color::White,
            move_log: Vec::new(),
            king_squares: STARTING_KING_SQUARES,
            is_checkmate: false,
            is_stalemate: false,
        }
    }

    /// Start a game from an arbitrary board.
    ///
    /// Each color must have exactly one king.
    pub fn from_grid(grid: Grid, side_to_move: Color) -> Result<Self, PositionError> {
        let king_squares = [
            locate_king(&grid, Color::White)?,
            locate_king(&grid, Color::Black)?,
        ];
        Ok(GameState {
            grid,
            side_to_move,
            move_log: Vec::new(),
            king_squares,
            is_checkmate: false,
            is_stalemate: false,
        })
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.grid.piece_at(sq)
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Cached square of `color`'s king.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    /// Applied moves, oldest first.
    #[must_use]
    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.is_checkmate
    }

    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        self.is_stalemate
    }

    /// Result as of the last `legal_moves` call, if the game is over.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        if self.is_checkmate {
            Some(Outcome::Checkmate {
                winner: self.side_to_move.opponent(),
            })
        } else if self.is_stalemate {
            Some(Outcome::Stalemate)
        } else {
            None
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

fn locate_king(grid: &Grid, color: Color) -> Result<Square, PositionError> {
    let mut kings = grid.kings(color);
    let square = kings.next().ok_or(PositionError::MissingKing { color })?;
    if let Some(extra) = kings.next() {
        return Err(PositionError::ExtraKing {
            color,
            square: extra,
        });
    }
    Ok(square)
}
