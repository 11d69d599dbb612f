//! Moves and the game-state history chain.
//!
//! A [`GameState`] is a snapshot of one position plus a shared link to the
//! state before it. States are never mutated after creation: playing a stone
//! copies the board, while passing or resigning shares it with the parent.

use std::fmt;
use std::rc::Rc;

use crate::board::Board;
use crate::constants::DEFAULT_KOMI;
use crate::scoring::{GameResult, compute_game_result};
use crate::types::{Player, Point};

/// A player's action for one turn.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Play(Point),
    Pass,
    Resign,
}

impl Move {
    #[inline]
    pub fn play(point: Point) -> Self {
        Move::Play(point)
    }

    #[inline]
    pub fn pass_turn() -> Self {
        Move::Pass
    }

    #[inline]
    pub fn resign() -> Self {
        Move::Resign
    }

    #[inline]
    pub fn is_play(&self) -> bool {
        matches!(self, Move::Play(_))
    }

    #[inline]
    pub fn is_pass(&self) -> bool {
        matches!(self, Move::Pass)
    }

    #[inline]
    pub fn is_resign(&self) -> bool {
        matches!(self, Move::Resign)
    }

    /// The target point of a play, `None` for pass and resign.
    #[inline]
    pub fn point(&self) -> Option<Point> {
        match self {
            Move::Play(p) => Some(*p),
            _ => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Play(p) => write!(f, "{}", crate::coords::coords_from_point(*p)),
            Move::Pass => write!(f, "pass"),
            Move::Resign => write!(f, "resign"),
        }
    }
}

/// One position in a game, linked to every position before it.
///
/// Cloning is cheap: the board and the history are shared.
#[derive(Clone, Debug)]
pub struct GameState {
    board: Rc<Board>,
    next_player: Player,
    previous: Option<Rc<GameState>>,
    last_move: Option<Move>,
    komi: f64,
}

impl GameState {
    /// Start an empty `board_size` x `board_size` game with the default komi.
    pub fn new_game(board_size: usize) -> Self {
        Self::new_game_with_komi(board_size, DEFAULT_KOMI)
    }

    pub fn new_game_with_komi(board_size: usize, komi: f64) -> Self {
        Self {
            board: Rc::new(Board::new(board_size, board_size)),
            next_player: Player::Black,
            previous: None,
            last_move: None,
            komi,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn next_player(&self) -> Player {
        self.next_player
    }

    pub fn previous_state(&self) -> Option<&GameState> {
        self.previous.as_deref()
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    pub fn komi(&self) -> f64 {
        self.komi
    }

    /// Number of moves played since the start of the game.
    pub fn move_number(&self) -> usize {
        self.ancestors().count()
    }

    /// Every earlier state, most recent first.
    fn ancestors(&self) -> impl Iterator<Item = &GameState> {
        std::iter::successors(self.previous_state(), |s| s.previous_state())
    }

    /// The state after the player to move plays `mv`.
    ///
    /// No legality check is made; use [`GameState::is_valid_move`] first.
    ///
    /// # Panics
    /// Panics if `mv` plays onto an occupied or off-board point.
    pub fn apply_move(&self, mv: Move) -> GameState {
        let board = match mv {
            Move::Play(point) => {
                let mut next_board = Board::clone(&self.board);
                next_board.place_stone(self.next_player, point);
                Rc::new(next_board)
            }
            Move::Pass | Move::Resign => Rc::clone(&self.board),
        };
        GameState {
            board,
            next_player: self.next_player.other(),
            previous: Some(Rc::new(self.clone())),
            last_move: Some(mv),
            komi: self.komi,
        }
    }

    /// True after a resignation or two passes in a row.
    pub fn is_over(&self) -> bool {
        let Some(last_move) = self.last_move else {
            return false;
        };
        if last_move.is_resign() {
            return true;
        }
        let second_last_move = self.previous_state().and_then(GameState::last_move);
        match second_last_move {
            Some(second_last_move) => last_move.is_pass() && second_last_move.is_pass(),
            None => false,
        }
    }

    fn board_after(&self, player: Player, point: Point) -> Board {
        let mut next_board = Board::clone(&self.board);
        next_board.place_stone(player, point);
        next_board
    }

    /// Would `player` playing `mv` leave its own string without liberties?
    ///
    /// Only plays onto empty points make sense here; pass and resign are
    /// never self-capture.
    pub fn is_move_self_capture(&self, player: Player, mv: Move) -> bool {
        let Move::Play(point) = mv else {
            return false;
        };
        let next_board = self.board_after(player, point);
        next_board
            .get_go_string(point)
            .is_some_and(|s| s.num_liberties() == 0)
    }

    /// Would `player` playing `mv` recreate an earlier (player to move,
    /// board) situation anywhere in this game's history?
    pub fn does_move_violate_ko(&self, player: Player, mv: Move) -> bool {
        let Move::Play(point) = mv else {
            return false;
        };
        let next_board = self.board_after(player, point);
        let next_player = player.other();
        self.ancestors()
            .any(|past| past.next_player == next_player && *past.board == next_board)
    }

    pub fn is_valid_move(&self, mv: Move) -> bool {
        if self.is_over() {
            return false;
        }
        match mv {
            Move::Pass | Move::Resign => true,
            Move::Play(point) => {
                self.board.is_on_grid(point)
                    && self.board.get(point).is_none()
                    && !self.is_move_self_capture(self.next_player, mv)
                    && !self.does_move_violate_ko(self.next_player, mv)
            }
        }
    }

    /// Every valid play in row-major order, then pass and resign.
    /// Empty once the game is over.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_over() {
            return Vec::new();
        }
        let mut moves: Vec<Move> = self
            .board
            .points()
            .map(Move::play)
            .filter(|&mv| self.is_valid_move(mv))
            .collect();
        moves.push(Move::pass_turn());
        moves.push(Move::resign());
        moves
    }

    /// Area-score the current board, whether or not the game is over.
    pub fn game_result(&self) -> GameResult {
        compute_game_result(&self.board, self.komi)
    }

    /// The winner of a finished game, `None` while it is in progress.
    pub fn winner(&self) -> Option<Player> {
        if !self.is_over() {
            return None;
        }
        if self.last_move.is_some_and(|m| m.is_resign()) {
            return Some(self.next_player);
        }
        Some(self.game_result().winner())
    }
}
