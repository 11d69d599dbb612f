//! Monte Carlo Tree Search (MCTS) with UCT selection.
//!
//! Each search builds a fresh tree rooted at the given state and runs a fixed
//! number of rounds. A round:
//! 1. Selection - descend through fully expanded nodes by UCT score
//! 2. Expansion - add one random unvisited move as a new child
//! 3. Simulation - play the child out with random moves
//! 4. Backpropagation - record the winner on every node back to the root
//!
//! Nodes live in an arena and refer to their parent by index, so the tree
//! owns every node exactly once.

use fastrand::Rng;
use log::debug;
use thiserror::Error;

use crate::agent::Agent;
use crate::constants::max_rollout_moves;
use crate::coords::format_move;
use crate::game::{GameState, Move};
use crate::playout::simulate_random_game;
use crate::types::Player;

/// Invalid search parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("number of rounds must be positive")]
    ZeroRounds,

    #[error("temperature must be a positive finite number (got {0})")]
    BadTemperature(f64),
}

/// Search parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct MctsConfig {
    /// Rounds per search.
    pub num_rounds: usize,

    /// UCT exploration constant. Higher values favour rarely visited moves.
    pub temperature: f64,

    /// Playout length cap. `None` uses a multiple of the board area.
    pub max_rollout_moves: Option<usize>,
}

impl MctsConfig {
    pub fn new(num_rounds: usize, temperature: f64) -> Result<Self, ConfigError> {
        if num_rounds == 0 {
            return Err(ConfigError::ZeroRounds);
        }
        if !(temperature.is_finite() && temperature > 0.0) {
            return Err(ConfigError::BadTemperature(temperature));
        }
        Ok(Self {
            num_rounds,
            temperature,
            max_rollout_moves: None,
        })
    }

    /// Set the playout length cap.
    pub fn with_max_rollout_moves(mut self, max_moves: usize) -> Self {
        self.max_rollout_moves = Some(max_moves);
        self
    }
}

/// Statistics for one move considered at the root.
#[derive(Debug, Clone, PartialEq)]
pub struct ChildStats {
    pub mv: Move,
    /// Fraction of playouts won by the player to move at the root.
    pub win_fraction: f64,
    pub num_rollouts: u32,
}

/// Outcome of a search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Move with the highest win fraction, or pass if the root had no children.
    pub best_move: Move,

    /// Win fraction of `best_move` for the player to move (0.0 for a default pass).
    pub win_fraction: f64,

    /// Playouts run through the root.
    pub num_rollouts: u32,

    /// Root children in expansion order.
    pub children: Vec<ChildStats>,
}

impl SearchResult {
    /// Stats for a specific root move.
    pub fn stats_for_move(&self, mv: Move) -> Option<&ChildStats> {
        self.children.iter().find(|c| c.mv == mv)
    }
}

/// Index into the node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct NodeId(usize);

impl NodeId {
    /// The root node is always at index 0.
    const ROOT: NodeId = NodeId(0);
}

/// A node in the search tree.
struct MctsNode {
    game_state: GameState,
    parent: Option<NodeId>,
    /// Move that led here from the parent (None for root).
    mv: Option<Move>,
    win_counts: [u32; 2],
    num_rollouts: u32,
    children: Vec<NodeId>,
    unvisited_moves: Vec<Move>,
}

impl MctsNode {
    fn new(game_state: GameState, parent: Option<NodeId>, mv: Option<Move>) -> Self {
        let unvisited_moves = game_state.legal_moves();
        Self {
            game_state,
            parent,
            mv,
            win_counts: [0; 2],
            num_rollouts: 0,
            children: Vec::new(),
            unvisited_moves,
        }
    }

    fn record_win(&mut self, winner: Player) {
        self.win_counts[winner.index()] += 1;
        self.num_rollouts += 1;
    }

    #[inline]
    fn can_add_child(&self) -> bool {
        !self.unvisited_moves.is_empty()
    }

    #[inline]
    fn is_terminal(&self) -> bool {
        self.game_state.is_over()
    }

    fn winning_frac(&self, player: Player) -> f64 {
        debug_assert!(self.num_rollouts > 0, "win fraction of an unvisited node");
        self.win_counts[player.index()] as f64 / self.num_rollouts as f64
    }
}

/// Arena of search nodes.
struct SearchTree {
    nodes: Vec<MctsNode>,
}

impl SearchTree {
    fn new(root_state: GameState) -> Self {
        Self {
            nodes: vec![MctsNode::new(root_state, None, None)],
        }
    }

    fn get(&self, id: NodeId) -> &MctsNode {
        &self.nodes[id.0]
    }

    fn get_mut(&mut self, id: NodeId) -> &mut MctsNode {
        &mut self.nodes[id.0]
    }

    /// Expand `id` with one of its unvisited moves, chosen uniformly.
    fn add_random_child(&mut self, id: NodeId, rng: &mut Rng) -> NodeId {
        let node = self.get_mut(id);
        let index = rng.usize(..node.unvisited_moves.len());
        let new_move = node.unvisited_moves.swap_remove(index);
        let new_state = node.game_state.apply_move(new_move);

        let child_id = NodeId(self.nodes.len());
        self.nodes.push(MctsNode::new(new_state, Some(id), Some(new_move)));
        self.get_mut(id).children.push(child_id);
        child_id
    }

    /// Record `winner` on `id` and every ancestor up to the root.
    fn backpropagate(&mut self, id: NodeId, winner: Player) {
        let mut current = Some(id);
        while let Some(id) = current {
            let node = self.get_mut(id);
            node.record_win(winner);
            current = node.parent;
        }
    }
}

/// UCT score of a child: exploitation plus scaled exploration.
///
/// `child_rollouts` must be positive.
#[inline]
pub fn uct_score(
    total_rollouts: u32,
    child_rollouts: u32,
    win_fraction: f64,
    temperature: f64,
) -> f64 {
    let exploration_factor = ((total_rollouts as f64).ln() / child_rollouts as f64).sqrt();
    win_fraction + temperature * exploration_factor
}

/// Tree-search agent.
pub struct MctsAgent {
    config: MctsConfig,
    rng: Rng,
}

impl MctsAgent {
    pub fn new(config: MctsConfig) -> Self {
        Self::with_rng(config, Rng::new())
    }

    pub fn with_seed(config: MctsConfig, seed: u64) -> Self {
        Self::with_rng(config, Rng::with_seed(seed))
    }

    pub fn with_rng(config: MctsConfig, rng: Rng) -> Self {
        Self { config, rng }
    }

    /// Run the configured number of rounds from `game_state`.
    pub fn search(&mut self, game_state: &GameState) -> SearchResult {
        let max_moves = self.config.max_rollout_moves.unwrap_or_else(|| {
            let board = game_state.board();
            max_rollout_moves(board.num_rows() * board.num_cols())
        });
        let mut tree = SearchTree::new(game_state.clone());

        for _ in 0..self.config.num_rounds {
            let mut node = NodeId::ROOT;
            while !tree.get(node).can_add_child() && !tree.get(node).is_terminal() {
                match self.select_child(&tree, node) {
                    Some(child) => node = child,
                    None => break,
                }
            }

            if tree.get(node).can_add_child() {
                node = tree.add_random_child(node, &mut self.rng);
            }

            let winner = simulate_random_game(&tree.get(node).game_state, &mut self.rng, max_moves);
            tree.backpropagate(node, winner);
        }

        let player = game_state.next_player();
        let root = tree.get(NodeId::ROOT);
        let children: Vec<ChildStats> = root
            .children
            .iter()
            .map(|&id| {
                let child = tree.get(id);
                ChildStats {
                    mv: child.mv.unwrap_or(Move::Pass),
                    win_fraction: child.winning_frac(player),
                    num_rollouts: child.num_rollouts,
                }
            })
            .collect();

        let mut best_move = Move::pass_turn();
        let mut best_pct: f64 = -1.0;
        for child in &children {
            if child.win_fraction > best_pct {
                best_pct = child.win_fraction;
                best_move = child.mv;
            }
        }

        for child in &children {
            debug!(
                "{} wr={:.3} n={}",
                format_move(player, &child.mv),
                child.win_fraction,
                child.num_rollouts
            );
        }

        SearchResult {
            best_move,
            win_fraction: best_pct.max(0.0),
            num_rollouts: root.num_rollouts,
            children,
        }
    }

    /// Pick the child of `id` with the highest UCT score, judged for the
    /// player to move at `id`. Earlier children win ties.
    fn select_child(&self, tree: &SearchTree, id: NodeId) -> Option<NodeId> {
        let node = tree.get(id);
        let player = node.game_state.next_player();
        let total_rollouts: u32 = node
            .children
            .iter()
            .map(|&c| tree.get(c).num_rollouts)
            .sum();

        let mut best_score = f64::NEG_INFINITY;
        let mut best_child = None;
        for &child_id in &node.children {
            let child = tree.get(child_id);
            let score = uct_score(
                total_rollouts,
                child.num_rollouts,
                child.winning_frac(player),
                self.config.temperature,
            );
            if score > best_score {
                best_score = score;
                best_child = Some(child_id);
            }
        }
        best_child
    }
}

impl Agent for MctsAgent {
    fn select_move(&mut self, game_state: &GameState) -> Move {
        self.search(game_state).best_move
    }
}
