//! Search behaviour on positions with a known best move.

use dlgo_rust::agent::{Agent, MctsAgent, MctsConfig, RandomBot};
use dlgo_rust::driver::play_game;
use dlgo_rust::game::{GameState, Move};
use dlgo_rust::types::{Player, Point};

/// 3x3, komi 0.5. White fills everything except A1 (Black) and B1; White's
/// group has B1 as its only liberty and White has just passed.
///
/// ```text
///  3  o  o  o
///  2  o  o  o
///  1  x  .  o
/// ```
///
/// Passing ends the game lost, resigning loses, and only B1 (capturing the
/// whole group) can win.
fn capture_or_lose() -> GameState {
    let white = [(2, 1), (2, 2), (2, 3), (3, 1), (3, 2), (3, 3), (1, 3)];
    let mut game = GameState::new_game_with_komi(3, 0.5);
    for (row, col) in white {
        game = game.apply_move(Move::pass_turn());
        game = game.apply_move(Move::play(Point::new(row, col)));
    }
    game = game.apply_move(Move::play(Point::new(1, 1)));
    game = game.apply_move(Move::pass_turn());
    assert_eq!(game.next_player(), Player::Black);
    assert!(!game.is_over());
    game
}

fn capture() -> Move {
    Move::play(Point::new(1, 2))
}

#[test]
fn test_position_has_three_options() {
    let game = capture_or_lose();
    assert_eq!(
        game.legal_moves(),
        vec![capture(), Move::pass_turn(), Move::resign()]
    );
    let after_pass = game.apply_move(Move::pass_turn());
    assert!(after_pass.is_over());
    assert_eq!(after_pass.winner(), Some(Player::White));
}

#[test]
fn test_search_finds_only_winning_move() {
    let game = capture_or_lose();
    for seed in 0..5 {
        let config = MctsConfig::new(60, 1.4).unwrap();
        let result = MctsAgent::with_seed(config, seed).search(&game);
        assert_eq!(result.best_move, capture(), "seed {seed}");
        assert_eq!(result.stats_for_move(Move::pass_turn()).unwrap().win_fraction, 0.0);
        assert_eq!(result.stats_for_move(Move::resign()).unwrap().win_fraction, 0.0);
        assert!(result.win_fraction > 0.0);
    }
}

#[test]
fn test_more_rounds_never_worse() {
    let game = capture_or_lose();
    let hits = |rounds: usize| {
        (0..5)
            .filter(|&seed| {
                let config = MctsConfig::new(rounds, 1.4).unwrap();
                MctsAgent::with_seed(config, seed).select_move(&game) == capture()
            })
            .count()
    };
    let few = hits(3);
    let many = hits(100);
    assert_eq!(many, 5);
    assert!(many >= few);
}

#[test]
fn test_more_rounds_visit_best_move_more() {
    let game = capture_or_lose();
    let visits = |rounds: usize| {
        let config = MctsConfig::new(rounds, 1.4).unwrap();
        let result = MctsAgent::with_seed(config, 3).search(&game);
        result.stats_for_move(capture()).unwrap().num_rollouts
    };
    assert!(visits(100) > visits(10));
}

#[test]
fn test_mcts_bot_finishes_game_against_random() {
    let config = MctsConfig::new(20, 1.4).unwrap();
    let mut black = MctsAgent::with_seed(config, 8);
    let mut white = RandomBot::with_seed(9);
    let end = play_game(GameState::new_game(3), &mut black, &mut white, |g, mv| {
        assert!(g.is_valid_move(*mv));
    });
    assert!(end.is_over());
    assert!(end.winner().is_some());
}
