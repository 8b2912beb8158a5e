use super::super::{Color, Grid, Move, Square};

impl Grid {
    /// Pushes and diagonal captures. No en passant and no promotion: a pawn
    /// on the far row simply has no moves.
    pub(crate) fn generate_pawn_moves(&self, from: Square, side: Color, moves: &mut Vec<Move>) {
        let dir = side.pawn_direction();

        if let Some(forward) = from.offset(dir, 0) {
            if self.is_empty(forward) {
                moves.push(Move::new(from, forward, self));
                if from.row() == side.pawn_start_row() {
                    if let Some(double) = forward.offset(dir, 0) {
                        if self.is_empty(double) {
                            moves.push(Move::new(from, double, self));
                        }
                    }
                }
            }
        }

        for d_col in [-1, 1] {
            if let Some(target) = from.offset(dir, d_col) {
                if self.color_at(target) == Some(side.opponent()) {
                    moves.push(Move::new(from, target, self));
                }
            }
        }
    }
}
