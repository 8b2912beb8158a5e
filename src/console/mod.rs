//! Plain-text console front end.
//!
//! Reads one command per line, prints the board after every move and stops
//! once the side to move is checkmated or stalemated.

use std::io::{self, BufRead, Write};

use crate::board::{GameState, Move, Outcome};

pub mod command;

pub use command::{parse_console_command, ConsoleCommand};

const HELP: &str = "\
commands:
  e2e4 | move e2e4   play a move
  undo               take back the last move
  moves              list legal moves
  board | d          show the board
  fen                print the position
  new                start over
  position <fen>     load a position
  perft <depth>      count move sequences
  quit               leave";

/// Whether the console loop keeps reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// A game driven by console commands.
#[derive(Debug, Default)]
pub struct Session {
    game: GameState,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Session::default()
    }

    #[must_use]
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Run one command, writing its response to `out`.
    pub fn execute(&mut self, cmd: ConsoleCommand, out: &mut impl Write) -> io::Result<Flow> {
        match cmd {
            ConsoleCommand::Move(text) => return self.play(&text, out),
            ConsoleCommand::Undo => match self.game.undo_move() {
                Some(mv) => {
                    writeln!(out, "took back {mv}")?;
                    self.game.legal_moves();
                }
                None => writeln!(out, "nothing to undo")?,
            },
            ConsoleCommand::Moves => {
                let moves: Vec<String> =
                    self.game.legal_moves().iter().map(Move::notation).collect();
                writeln!(out, "{}", moves.join(" "))?;
            }
            ConsoleCommand::Board => self.print_board(out)?,
            ConsoleCommand::Fen => writeln!(out, "{}", self.game.to_fen())?,
            ConsoleCommand::NewGame => {
                self.game = GameState::new();
                self.print_board(out)?;
            }
            ConsoleCommand::Position(fen) => match GameState::try_from_fen(&fen) {
                Ok(game) => {
                    self.game = game;
                    self.print_board(out)?;
                    return self.report_status(out);
                }
                Err(err) => writeln!(out, "error: {err}")?,
            },
            ConsoleCommand::Perft(0) => writeln!(out, "error: perft depth must be at least 1")?,
            ConsoleCommand::Perft(depth) => {
                let mut total = 0;
                for (mv, nodes) in self.game.perft_divide(depth) {
                    writeln!(out, "{mv}: {nodes}")?;
                    total += nodes;
                }
                writeln!(out, "total: {total}")?;
            }
            ConsoleCommand::Help => writeln!(out, "{HELP}")?,
            ConsoleCommand::Quit => return Ok(Flow::Stop),
            ConsoleCommand::Unknown(line) => writeln!(out, "unknown command '{line}'")?,
        }
        Ok(Flow::Continue)
    }

    fn play(&mut self, text: &str, out: &mut impl Write) -> io::Result<Flow> {
        match self.game.play(text) {
            Ok(mv) => {
                writeln!(out, "played {mv}")?;
                self.print_board(out)?;
                self.report_status(out)
            }
            Err(err) => {
                writeln!(out, "error: {err}")?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Refresh the terminal flags and announce the result if the game is over.
    fn report_status(&mut self, out: &mut impl Write) -> io::Result<Flow> {
        self.game.legal_moves();
        match self.game.outcome() {
            Some(Outcome::Checkmate { winner }) => {
                writeln!(out, "checkmate: {winner} wins")?;
                Ok(Flow::Stop)
            }
            Some(Outcome::Stalemate) => {
                writeln!(out, "stalemate")?;
                Ok(Flow::Stop)
            }
            None => {
                if self.game.in_check() {
                    writeln!(out, "check")?;
                }
                Ok(Flow::Continue)
            }
        }
    }

    fn print_board(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}", self.game.grid())?;
        writeln!(out, "{} to move", self.game.side_to_move())
    }
}

/// Drive a session from `input` until `quit`, end of input, or game over.
pub fn run_console<R: BufRead, W: Write>(input: R, out: &mut W) -> io::Result<Session> {
    let mut session = Session::new();
    session.print_board(out)?;
    for line in input.lines() {
        let line = line?;
        let Some(cmd) = parse_console_command(&line) else {
            continue;
        };
        if session.execute(cmd, out)? == Flow::Stop {
            break;
        }
        out.flush()?;
    }
    Ok(session)
}

pub fn run_console_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_console(stdin.lock(), &mut stdout)?;
    Ok(())
}
