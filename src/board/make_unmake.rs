use super::{GameState, Move, MoveError, Piece};

impl GameState {
    /// Apply `mv` without checking that it is legal.
    ///
    /// The move must match the current board: an empty start square gives
    /// `MoveError::EmptySource`, and frozen pieces that differ from what now
    /// stands on either square give `MoveError::Stale`. Either way the game
    /// is left untouched. Submit moves taken from `legal_moves`, or use
    /// `try_make_move`, to stay within the rules.
    pub fn make_move(&mut self, mv: Move) -> Result<(), MoveError> {
        if self.grid.is_empty(mv.start()) {
            return Err(MoveError::EmptySource { square: mv.start() });
        }
        if self.grid.piece_at(mv.start()) != mv.moved()
            || self.grid.piece_at(mv.end()) != mv.captured()
        {
            return Err(MoveError::Stale {
                notation: mv.notation(),
            });
        }
        self.push_move(mv);
        debug_log!("{} played {}", self.side_to_move.opponent(), mv);
        Ok(())
    }

    /// Apply `mv` only if it is one of the current legal moves.
    ///
    /// The move actually applied is the one from the legal list, so pieces
    /// frozen into a stale `mv` are ignored.
    pub fn try_make_move(&mut self, mv: Move) -> Result<Move, MoveError> {
        let legal = self
            .legal_moves()
            .into_iter()
            .find(|candidate| *candidate == mv)
            .ok_or_else(|| MoveError::Illegal {
                notation: mv.notation(),
            })?;
        self.make_move(legal)?;
        Ok(legal)
    }

    /// Parse a coordinate pair such as `"e2e4"` and play it if legal.
    pub fn play(&mut self, notation: &str) -> Result<Move, MoveError> {
        let mv = Move::parse(notation, &self.grid)?;
        self.try_make_move(mv)
    }

    /// Take back the last move. Returns `None` when there is nothing to undo.
    pub fn undo_move(&mut self) -> Option<Move> {
        let mv = self.pop_move()?;
        debug_log!("took back {}", mv);
        Some(mv)
    }

    pub(crate) fn push_move(&mut self, mv: Move) {
        self.grid.set(mv.start(), None);
        self.grid.set(mv.end(), mv.moved());
        if let Some((color, Piece::King)) = mv.moved() {
            self.king_squares[color.index()] = mv.end();
        }
        self.move_log.push(mv);
        self.side_to_move = self.side_to_move.opponent();
    }

    pub(crate) fn pop_move(&mut self) -> Option<Move> {
        let mv = self.move_log.pop()?;
        self.grid.set(mv.start(), mv.moved());
        self.grid.set(mv.end(), mv.captured());
        if let Some((color, Piece::King)) = mv.moved() {
            self.king_squares[color.index()] = mv.start();
        }
        self.side_to_move = self.side_to_move.opponent();
        Some(mv)
    }
}
