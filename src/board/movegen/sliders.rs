use super::super::{Color, Grid, Move, Square};

const ROOK_DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

type Directions = &'static [(isize, isize)];

const BISHOP_SETS: &[Directions] = &[&BISHOP_DIRECTIONS];
const ROOK_SETS: &[Directions] = &[&ROOK_DIRECTIONS];
const QUEEN_SETS: &[Directions] = &[&ROOK_DIRECTIONS, &BISHOP_DIRECTIONS];

/// Type of sliding piece for move generation
#[derive(Clone, Copy, Debug)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    /// Direction sets walked in order; a queen walks the rook set first.
    fn direction_sets(self) -> &'static [Directions] {
        match self {
            SliderType::Bishop => BISHOP_SETS,
            SliderType::Rook => ROOK_SETS,
            SliderType::Queen => QUEEN_SETS,
        }
    }
}

impl Grid {
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        side: Color,
        slider: SliderType,
        moves: &mut Vec<Move>,
    ) {
        let directions = slider.direction_sets().iter().flat_map(|set| set.iter());
        for &(d_row, d_col) in directions {
            let mut current = from;
            while let Some(to) = current.offset(d_row, d_col) {
                match self.color_at(to) {
                    None => moves.push(Move::new(from, to, self)),
                    Some(color) => {
                        if color != side {
                            moves.push(Move::new(from, to, self));
                        }
                        break;
                    }
                }
                current = to;
            }
        }
    }
}
