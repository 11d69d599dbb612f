//! Board coordinates and stone colours.

use std::fmt;

/// A stone colour, which is also the player who owns it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// The opponent of this player.
    #[inline]
    pub fn other(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Dense index for per-player tables.
    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Player::Black => 0,
            Player::White => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => write!(f, "B"),
            Player::White => write!(f, "W"),
        }
    }
}

/// A point on the board, 1-indexed from the bottom-left corner.
///
/// Points are plain values: nothing here knows the board size, so
/// neighbours of an edge point may lie off the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

impl Point {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The 4 orthogonal neighbours (below, above, left, right).
    #[inline]
    pub fn neighbours(self) -> impl Iterator<Item = Point> {
        let Point { row, col } = self;
        [
            Point::new(row - 1, col),
            Point::new(row + 1, col),
            Point::new(row, col - 1),
            Point::new(row, col + 1),
        ]
        .into_iter()
    }

    /// The 4 diagonal corners.
    #[inline]
    pub fn corners(self) -> impl Iterator<Item = Point> {
        let Point { row, col } = self;
        [
            Point::new(row - 1, col - 1),
            Point::new(row - 1, col + 1),
            Point::new(row + 1, col - 1),
            Point::new(row + 1, col + 1),
        ]
        .into_iter()
    }
}
