//! Running a whole game between two agents.

use log::debug;

use crate::agent::Agent;
use crate::coords::format_move;
use crate::game::{GameState, Move};
use crate::types::Player;

/// Play from `game` until it is over, asking `black` and `white` for moves
/// in turn. `observer` sees each new state together with the move that
/// produced it. Returns the final state.
///
/// Agents are trusted: their moves are applied without a legality check.
pub fn play_game<F>(
    mut game: GameState,
    black: &mut dyn Agent,
    white: &mut dyn Agent,
    mut observer: F,
) -> GameState
where
    F: FnMut(&GameState, &Move),
{
    while !game.is_over() {
        let player = game.next_player();
        let mv = match player {
            Player::Black => black.select_move(&game),
            Player::White => white.select_move(&game),
        };
        debug!("{}", format_move(player, &mv));
        game = game.apply_move(mv);
        observer(&game, &mv);
    }
    game
}
