//! A human player typing moves, one per line.

use std::io::{BufRead, Write};

use crate::agent::Agent;
use crate::coords::parse_move;
use crate::game::{GameState, Move};

/// Reads moves such as `C3`, `pass` or `resign` from `input`.
///
/// Malformed or illegal moves are reported on `output` and asked for again.
/// End of input (or a read error) resigns.
pub struct HumanAgent<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanAgent<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn prompt(&mut self, text: &str) {
        // A broken prompt stream is not worth aborting the game over.
        let _ = write!(self.output, "{text}");
        let _ = self.output.flush();
    }
}

impl<R: BufRead, W: Write> Agent for HumanAgent<R, W> {
    fn select_move(&mut self, game_state: &GameState) -> Move {
        loop {
            self.prompt("-- ");
            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) | Err(_) => return Move::resign(),
                Ok(_) => {}
            }
            if line.trim().is_empty() {
                continue;
            }

            match parse_move(&line) {
                Ok(mv) if game_state.is_valid_move(mv) => return mv,
                Ok(mv) => self.prompt(&format!("illegal move: {mv}\n")),
                Err(e) => self.prompt(&format!("{e}\n")),
            }
        }
    }
}
