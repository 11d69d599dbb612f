//! Monte Carlo playouts (random game simulation).
//!
//! A playout plays random eye-avoiding moves for both sides until the game
//! ends, then reports the winner. Playouts are capped in length; a capped
//! playout is decided by area score on the board it reached.

use fastrand::Rng;
use log::{trace, warn};

use crate::agent::naive::random_move;
use crate::game::GameState;
use crate::types::Player;

/// Play random moves from `game_state` until the game ends or `max_moves`
/// moves have been made, and return the winner.
pub fn simulate_random_game(game_state: &GameState, rng: &mut Rng, max_moves: usize) -> Player {
    let mut game = game_state.clone();
    let mut moves = 0;

    while !game.is_over() {
        if moves >= max_moves {
            let result = game.game_result();
            warn!("playout capped after {moves} moves, scoring by area: {result}");
            return result.winner();
        }
        let mv = random_move(&game, rng);
        game = game.apply_move(mv);
        moves += 1;
    }

    trace!("playout finished after {moves} moves");
    game.winner().unwrap_or_else(|| game.game_result().winner())
}
