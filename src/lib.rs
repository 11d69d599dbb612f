//! dlgo-rust: Go rules and a Monte Carlo Tree Search player.
//!
//! ## Modules
//!
//! - [`types`] - Points and players
//! - [`board`] - Stone strings, placement and capture
//! - [`game`] - Moves, game history, suicide and superko rules
//! - [`scoring`] - Area scoring of finished games
//! - [`agent`] - Random, MCTS and human players
//! - [`playout`] - Random game simulation for position evaluation
//! - [`driver`] - Playing a full game between two agents
//! - [`coords`] - Coordinate text such as `D4`
//! - [`constants`] - Default parameters
//!
//! ## Example
//!
//! ```
//! use dlgo_rust::agent::{Agent, MctsAgent, MctsConfig};
//! use dlgo_rust::game::{GameState, Move};
//! use dlgo_rust::coords::point_from_coords;
//!
//! // Create a new game and play a move
//! let game = GameState::new_game(3);
//! let game = game.apply_move(Move::play(point_from_coords("B2").unwrap()));
//!
//! // Run MCTS to find the best response
//! let config = MctsConfig::new(30, 1.4).unwrap();
//! let mut bot = MctsAgent::with_seed(config, 1);
//! let reply = bot.select_move(&game);
//! assert!(game.is_valid_move(reply));
//! ```

pub mod agent;
pub mod board;
pub mod constants;
pub mod coords;
pub mod driver;
pub mod game;
pub mod playout;
pub mod scoring;
pub mod types;
