//! 8x8 mailbox board.

use std::fmt;
use std::ops::Index;

use super::{Color, Piece, Square, BOARD_SIZE};

type Content = Option<(Color, Piece)>;

const fn back_rank(color: Color) -> [Content; BOARD_SIZE] {
    [
        Some((color, Piece::Rook)),
        Some((color, Piece::Knight)),
        Some((color, Piece::Bishop)),
        Some((color, Piece::Queen)),
        Some((color, Piece::King)),
        Some((color, Piece::Bishop)),
        Some((color, Piece::Knight)),
        Some((color, Piece::Rook)),
    ]
}

const EMPTY_ROW: [Content; BOARD_SIZE] = [None; BOARD_SIZE];

/// The standard initial position.
pub const STARTING_GRID: Grid = Grid {
    squares: [
        back_rank(Color::Black),
        [Some((Color::Black, Piece::Pawn)); BOARD_SIZE],
        EMPTY_ROW,
        EMPTY_ROW,
        EMPTY_ROW,
        EMPTY_ROW,
        [Some((Color::White, Piece::Pawn)); BOARD_SIZE],
        back_rank(Color::White),
    ],
};

/// Square contents indexed as `[row][col]`, row 0 being rank 8.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    squares: [[Content; BOARD_SIZE]; BOARD_SIZE],
}

impl Grid {
    /// A board with no pieces.
    #[must_use]
    pub const fn empty() -> Self {
        Grid {
            squares: [EMPTY_ROW; BOARD_SIZE],
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.row()][sq.col()]
    }

    #[inline]
    #[must_use]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    #[inline]
    pub(crate) fn set(&mut self, sq: Square, content: Option<(Color, Piece)>) {
        self.squares[sq.row()][sq.col()] = content;
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        Square::all()
            .filter_map(move |sq| self.piece_at(sq).map(|(color, piece)| (sq, color, piece)))
    }

    /// Squares holding a king of `color`, row-major.
    pub(crate) fn kings(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        self.pieces()
            .filter(move |&(_, c, p)| c == color && p == Piece::King)
            .map(|(sq, _, _)| sq)
    }
}

impl Default for Grid {
    fn default() -> Self {
        STARTING_GRID
    }
}

impl Index<Square> for Grid {
    type Output = Option<(Color, Piece)>;

    fn index(&self, sq: Square) -> &Self::Output {
        &self.squares[sq.row()][sq.col()]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, rank) in self.squares.iter().enumerate() {
            write!(f, "{} ", BOARD_SIZE - row)?;
            for content in rank {
                let c = content.map_or('.', |(color, piece)| piece.to_fen_char(color));
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid")?;
        fmt::Display::fmt(self, f)
    }
}
