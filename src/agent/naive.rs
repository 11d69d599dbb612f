//! Uniformly random player that never fills its own eyes.

use fastrand::Rng;

use crate::agent::Agent;
use crate::agent::helpers::is_point_an_eye;
use crate::game::{GameState, Move};

/// Choose a random valid move that is not one of the mover's own eyes.
///
/// Passes when no such move exists.
pub fn random_move(game_state: &GameState, rng: &mut Rng) -> Move {
    let board = game_state.board();
    let player = game_state.next_player();
    let candidates: Vec<Move> = board
        .points()
        .filter(|&p| !is_point_an_eye(board, p, player))
        .map(Move::play)
        .filter(|&mv| game_state.is_valid_move(mv))
        .collect();

    if candidates.is_empty() {
        return Move::pass_turn();
    }
    candidates[rng.usize(..candidates.len())]
}

/// An agent that plays [`random_move`].
pub struct RandomBot {
    rng: Rng,
}

impl Default for RandomBot {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomBot {
    pub fn new() -> Self {
        Self::with_rng(Rng::new())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(Rng::with_seed(seed))
    }

    pub fn with_rng(rng: Rng) -> Self {
        Self { rng }
    }
}

impl Agent for RandomBot {
    fn select_move(&mut self, game_state: &GameState) -> Move {
        random_move(game_state, &mut self.rng)
    }
}
