//! Pseudo-legal move generation.
//!
//! Every rule here ignores whether the mover's own king is left attacked;
//! `GameState::legal_moves` filters that out. Moves come out in row-major
//! board order, then in each piece's own offset or direction order.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Color, Grid, Move, Piece, Square};

use sliders::SliderType;

impl Grid {
    /// All pseudo-legal moves for `side`.
    #[must_use]
    pub fn pseudo_legal_moves(&self, side: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        for (from, color, piece) in self.pieces() {
            if color == side {
                self.generate_piece_moves(from, side, piece, &mut moves);
            }
        }
        moves
    }

    /// Pseudo-legal moves of the piece on `from`, appended to `moves`.
    pub(crate) fn generate_piece_moves(
        &self,
        from: Square,
        side: Color,
        piece: Piece,
        moves: &mut Vec<Move>,
    ) {
        match piece {
            Piece::Pawn => self.generate_pawn_moves(from, side, moves),
            Piece::Knight => self.generate_knight_moves(from, side, moves),
            Piece::Bishop => self.generate_slider_moves(from, side, SliderType::Bishop, moves),
            Piece::Rook => self.generate_slider_moves(from, side, SliderType::Rook, moves),
            Piece::Queen => self.generate_slider_moves(from, side, SliderType::Queen, moves),
            Piece::King => self.generate_king_moves(from, side, moves),
        }
    }

    /// Single steps by each offset onto empty or enemy squares.
    fn generate_step_moves(
        &self,
        from: Square,
        side: Color,
        offsets: &[(isize, isize)],
        moves: &mut Vec<Move>,
    ) {
        for &(d_row, d_col) in offsets {
            if let Some(to) = from.offset(d_row, d_col) {
                if self.color_at(to) != Some(side) {
                    moves.push(Move::new(from, to, self));
                }
            }
        }
    }
}
