//! Default parameters for games, search, and the command line.
//!
//! The library itself takes every tunable as an argument; these values are
//! what the binary and convenience constructors fall back to.

// =============================================================================
// Board Geometry
// =============================================================================

/// Default board size (NxN) for the command-line games.
pub const DEFAULT_BOARD_SIZE: usize = 5;

/// Column letters. `I` is skipped to avoid confusion with `J`.
pub const COLS: &str = "ABCDEFGHJKLMNOPQRST";

/// Largest board the coordinate notation can name.
pub const MAX_BOARD_SIZE: usize = COLS.len();

// =============================================================================
// Scoring
// =============================================================================

/// Komi (compensation points for White).
pub const DEFAULT_KOMI: f64 = 7.5;

// =============================================================================
// MCTS Parameters
// =============================================================================

/// Default number of search rounds per move.
pub const DEFAULT_NUM_ROUNDS: usize = 500;

/// Default UCT exploration temperature.
pub const DEFAULT_TEMPERATURE: f64 = 1.4;

/// Rollout length cap, as a multiple of the board area.
pub const ROLLOUT_LEN_FACTOR: usize = 3;

/// Maximum rollout length for a board with `num_points` points.
#[inline]
pub const fn max_rollout_moves(num_points: usize) -> usize {
    num_points * ROLLOUT_LEN_FACTOR
}
