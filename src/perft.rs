//! Perft: leaf counts of the legal move tree, used to validate generation.

use crate::board::{GameState, Move};

impl GameState {
    /// Number of legal move sequences of length `depth`.
    ///
    /// The checkmate and stalemate flags are left as they were.
    pub fn perft(&mut self, depth: usize) -> u64 {
        let flags = (self.is_checkmate, self.is_stalemate);
        let nodes = self.count_nodes(depth);
        (self.is_checkmate, self.is_stalemate) = flags;
        nodes
    }

    /// Perft split by root move, in legal-move order.
    ///
    /// Empty at depth 0, where the only sequence has no root move.
    pub fn perft_divide(&mut self, depth: usize) -> Vec<(Move, u64)> {
        if depth == 0 {
            return Vec::new();
        }
        let flags = (self.is_checkmate, self.is_stalemate);
        let moves = self.legal_moves();
        let mut counts = Vec::with_capacity(moves.len());
        for m in moves {
            self.push_move(m);
            counts.push((m, self.count_nodes(depth - 1)));
            self.pop_move();
        }
        (self.is_checkmate, self.is_stalemate) = flags;
        counts
    }

    fn count_nodes(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for m in moves {
            self.push_move(m);
            nodes += self.count_nodes(depth - 1);
            self.pop_move();
        }

        nodes
    }
}
