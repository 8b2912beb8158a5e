use super::{Color, GameState, Move, Square};

impl GameState {
    /// Whether any pseudo-legal move of `defending`'s opponent ends on `square`.
    #[must_use]
    pub fn under_attack(&self, square: Square, defending: Color) -> bool {
        self.grid
            .pseudo_legal_moves(defending.opponent())
            .iter()
            .any(|mv| mv.end() == square)
    }

    /// Whether the side to move has its king attacked.
    #[must_use]
    pub fn in_check(&self) -> bool {
        let side = self.side_to_move;
        self.under_attack(self.king_square(side), side)
    }

    /// Legal moves for the side to move, in generation order.
    ///
    /// Each pseudo-legal candidate is applied, the mover's king is tested for
    /// attack, and the candidate is taken back. Also refreshes the checkmate
    /// and stalemate flags.
    pub fn legal_moves(&mut self) -> Vec<Move> {
        let mover = self.side_to_move;
        let mut moves = self.grid.pseudo_legal_moves(mover);
        moves.retain(|&mv| !self.exposes_king(mv, mover));

        if moves.is_empty() {
            let check = self.in_check();
            self.is_checkmate = check;
            self.is_stalemate = !check;
            debug_log!(
                "{} has no legal moves: {}",
                mover,
                if check { "checkmate" } else { "stalemate" }
            );
        } else {
            self.is_checkmate = false;
            self.is_stalemate = false;
        }
        moves
    }

    /// Whether `mv` is among the current legal moves.
    pub fn is_legal(&mut self, mv: Move) -> bool {
        self.legal_moves().contains(&mv)
    }

    fn exposes_king(&mut self, mv: Move, mover: Color) -> bool {
        self.push_move(mv);
        let exposed = self.under_attack(self.king_square(mover), mover);
        self.pop_move();
        if exposed {
            trace_log!("{} leaves the {} king attacked", mv, mover);
        }
        exposed
    }
}
