use super::super::{Color, Grid, Move, Square};

const KING_OFFSETS: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

impl Grid {
    // No castling.
    pub(crate) fn generate_king_moves(&self, from: Square, side: Color, moves: &mut Vec<Move>) {
        self.generate_step_moves(from, side, &KING_OFFSETS, moves);
    }
}
