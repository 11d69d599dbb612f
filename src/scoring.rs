//! Area scoring for finished games.
//!
//! Uses area scoring (Chinese rules):
//! - Stones on the board count for their owner
//! - An empty region bordered by only one colour is that colour's territory
//! - Regions touching both colours (or neither) are neutral
//! - Komi is added to White's total

use std::collections::HashSet;
use std::fmt;

use crate::board::Board;
use crate::types::{Player, Point};

/// Final tally of a game.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GameResult {
    /// Black stones plus black territory.
    pub black: usize,
    /// White stones plus white territory.
    pub white: usize,
    pub komi: f64,
}

impl GameResult {
    /// Black wins only by strictly exceeding White plus komi.
    pub fn winner(&self) -> Player {
        if self.black as f64 > self.white as f64 + self.komi {
            Player::Black
        } else {
            Player::White
        }
    }

    pub fn winning_margin(&self) -> f64 {
        (self.black as f64 - (self.white as f64 + self.komi)).abs()
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{:.1}", self.winner(), self.winning_margin())
    }
}

/// Owner of an empty region, found by flood fill.
fn region_owner(board: &Board, start: Point, visited: &mut HashSet<Point>) -> (usize, Option<Player>) {
    let mut stack = vec![start];
    let mut size = 0;
    let mut borders: HashSet<Player> = HashSet::new();

    while let Some(pt) = stack.pop() {
        if !visited.insert(pt) {
            continue;
        }
        size += 1;
        for n in pt.neighbours() {
            if !board.is_on_grid(n) {
                continue;
            }
            match board.get(n) {
                Some(color) => {
                    borders.insert(color);
                }
                None if !visited.contains(&n) => stack.push(n),
                None => {}
            }
        }
    }

    let owner = if borders.len() == 1 {
        borders.into_iter().next()
    } else {
        None
    };
    (size, owner)
}

/// Score `board` by area with the given komi.
pub fn compute_game_result(board: &Board, komi: f64) -> GameResult {
    let mut counts = [0usize; 2];
    let mut visited: HashSet<Point> = HashSet::new();

    for pt in board.points() {
        match board.get(pt) {
            Some(color) => counts[color.index()] += 1,
            None if visited.contains(&pt) => {}
            None => {
                let (size, owner) = region_owner(board, pt, &mut visited);
                if let Some(color) = owner {
                    counts[color.index()] += size;
                }
            }
        }
    }

    GameResult {
        black: counts[Player::Black.index()],
        white: counts[Player::White.index()],
        komi,
    }
}
