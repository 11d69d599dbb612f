//! Players: anything that picks a move for a game state.
//!
//! - [`naive`] - Random moves that avoid filling own eyes
//! - [`mcts`] - Monte Carlo Tree Search with UCT
//! - [`human`] - Moves typed on a line-based reader
//! - [`helpers`] - Eye detection

pub mod helpers;
pub mod human;
pub mod mcts;
pub mod naive;

use crate::game::{GameState, Move};

pub use human::HumanAgent;
pub use mcts::{MctsAgent, MctsConfig, SearchResult};
pub use naive::RandomBot;

/// Given a game state, return a move for the player to move.
pub trait Agent {
    fn select_move(&mut self, game_state: &GameState) -> Move;
}
