//! Human-readable coordinates.
//!
//! Go coordinates use letters A-T (skipping I) for columns and numbers
//! from 1 for rows, so `C3` is row 3, column 3.

use thiserror::Error;

use crate::constants::COLS;
use crate::game::Move;
use crate::types::{Player, Point};

/// Malformed coordinate text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordError {
    #[error("empty coordinate")]
    Empty,

    #[error("unknown column '{0}'")]
    BadColumn(char),

    #[error("invalid row '{0}'")]
    BadRow(String),
}

/// Parse a coordinate such as `D4` (case-insensitive).
///
/// The result is not bounds-checked against any board.
pub fn point_from_coords(coords: &str) -> Result<Point, CoordError> {
    let coords = coords.trim();
    let mut chars = coords.chars();
    let col_char = chars.next().ok_or(CoordError::Empty)?.to_ascii_uppercase();
    let col = COLS
        .find(col_char)
        .ok_or(CoordError::BadColumn(col_char))? as i32
        + 1;

    let rest = chars.as_str();
    let row: i32 = rest
        .parse()
        .ok()
        .filter(|&r| r >= 1)
        .ok_or_else(|| CoordError::BadRow(rest.to_string()))?;

    Ok(Point::new(row, col))
}

/// Format a point as e.g. `D4`.
///
/// Columns beyond the notation's 19 letters are written as `?`.
pub fn coords_from_point(point: Point) -> String {
    let col = usize::try_from(point.col - 1)
        .ok()
        .and_then(|i| COLS.chars().nth(i))
        .unwrap_or('?');
    format!("{col}{}", point.row)
}

/// Describe a move for display, e.g. `B D4`, `W passes`, `B resigns`.
pub fn format_move(player: Player, mv: &Move) -> String {
    let move_str = match mv {
        Move::Pass => "passes".to_string(),
        Move::Resign => "resigns".to_string(),
        Move::Play(p) => coords_from_point(*p),
    };
    format!("{player} {move_str}")
}

/// Parse a human move: a coordinate, `pass`, or `resign`.
pub fn parse_move(text: &str) -> Result<Move, CoordError> {
    let text = text.trim();
    if text.eq_ignore_ascii_case("pass") {
        Ok(Move::pass_turn())
    } else if text.eq_ignore_ascii_case("resign") {
        Ok(Move::resign())
    } else {
        point_from_coords(text).map(Move::play)
    }
}
