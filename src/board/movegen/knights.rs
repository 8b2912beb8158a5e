use super::super::{Color, Grid, Move, Square};

const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
];

impl Grid {
    pub(crate) fn generate_knight_moves(&self, from: Square, side: Color, moves: &mut Vec<Move>) {
        self.generate_step_moves(from, side, &KNIGHT_OFFSETS, moves);
    }
}
