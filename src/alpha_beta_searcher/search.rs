//! Alpha-beta search over Reversi positions.
//!
//! # Core Algorithm
//!
//! Alpha-beta pruning is an optimization of minimax search that maintains a window [alpha, beta]
//! representing the range of scores that matter. Once a node's running value falls outside the
//! window its remaining children are skipped without affecting the result at the root.
//!
//! Moves are searched in generation order (row-major cell scan) with no reordering, no
//! transposition table and no iterative deepening, so the set of visited nodes and the
//! pruning decisions are fully determined by the position and the depth limit.
//!
//! # Trace
//!
//! Every expansion is logged to a [`Trace`]. For each child a node records itself before
//! descending; a terminal child is recorded with its static value when it returns; a node
//! records itself once more when it cuts off or runs out of children. Terminal nodes never
//! record themselves.
//!
//! # Passing
//!
//! A side with no legal placement plays [`Move::Pass`]. The session keeps a single pass counter
//! for the whole search: a node with a legal placement resets it, a node without one increments
//! it, and once the count exceeds [`PASS_LIMIT`] the node is terminal. Nothing restores the
//! counter when a subtree returns, so a sibling visited after a finished pass chain sees the
//! count that chain left behind.

use std::time::{Duration, Instant};

use log::{debug, info, warn};
use thiserror::Error;

use crate::board::{Board, BoardError, Player};
use crate::evaluate;
use crate::move_generator::generate_moves;
use crate::reversi_move::Move;

use super::score::{Score, Window};
use super::trace::{NodeLabel, Trace};

/// A node whose side to move cannot place a piece is terminal once the session's
/// pass counter exceeds this.
pub const PASS_LIMIT: u8 = 2;

pub const DEFAULT_DEPTH_LIMIT: i32 = 4;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Board error: {0}")]
    Board(#[from] BoardError),
    #[error("search exceeded its budget of {budget} nodes")]
    NodeBudgetExhausted { budget: usize },
}

/// Search configuration parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Nodes at this depth or deeper are evaluated statically. Zero or a negative
    /// limit evaluates the root directly.
    pub depth_limit: i32,
    /// Disabling pruning turns the search into exhaustive minimax.
    pub pruning: bool,
    /// Abort with [`SearchError::NodeBudgetExhausted`] after visiting this many nodes.
    pub node_budget: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth_limit: DEFAULT_DEPTH_LIMIT,
            pruning: true,
            node_budget: None,
        }
    }
}

impl SearchConfig {
    pub fn new(depth_limit: i32) -> Self {
        Self {
            depth_limit,
            ..Default::default()
        }
    }

    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    pub fn with_node_budget(mut self, node_budget: Option<usize>) -> Self {
        self.node_budget = node_budget;
        self
    }
}

/// Statistics collected during search.
#[derive(Clone, Debug, Default)]
pub struct SearchStats {
    pub nodes: usize,
    pub evaluations: usize,
    pub cutoffs: usize,
    pub passes: usize,
    pub duration: Duration,
}

#[derive(Clone, Debug)]
pub struct SearchOutcome {
    /// Minimax value of the root from the mover's perspective.
    pub value: Score,
    /// The first root successor whose value equals `value`. When the root itself
    /// is terminal no successor exists and this is the input board.
    pub next_board: Board,
    pub trace: Trace,
    pub stats: SearchStats,
}

/// Searches `board` with `mover` as the maximizing player.
pub fn execute(
    board: &Board,
    mover: Player,
    config: SearchConfig,
) -> Result<SearchOutcome, SearchError> {
    SearchSession::new(mover, config).execute(board)
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Role {
    Max,
    Min,
}

impl Role {
    fn initial_value(self) -> Score {
        match self {
            Role::Max => Score::NegInfinity,
            Role::Min => Score::PosInfinity,
        }
    }

    fn combine(self, value: Score, child: Score) -> Score {
        match self {
            Role::Max => value.max(child),
            Role::Min => value.min(child),
        }
    }

    fn is_cutoff(self, value: Score, window: Window) -> bool {
        match self {
            Role::Max => value >= window.beta,
            Role::Min => value <= window.alpha,
        }
    }

    fn tighten(self, window: Window, value: Score) -> Window {
        match self {
            Role::Max => Window::new(window.alpha.max(value), window.beta),
            Role::Min => Window::new(window.alpha, window.beta.min(value)),
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Visit {
    value: Score,
    terminal: bool,
}

/// What happens at a node after one of its children returns. The sequence is a
/// function of whether the child was terminal and whether its value caused a
/// cutoff; descending into a child is recorded before the child is visited.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum NodeEvent {
    /// Record the terminal child with its static value and the current bounds.
    TerminalReturn,
    /// Tighten alpha (max) or beta (min) with the node's running value.
    BacktrackUpdate,
    /// Record the node with its running value and stop expanding it.
    CutoffReturn,
}

fn events_after_child(child_terminal: bool, cutoff: bool) -> &'static [NodeEvent] {
    match (child_terminal, cutoff) {
        (true, true) => &[NodeEvent::TerminalReturn, NodeEvent::CutoffReturn],
        (true, false) => &[NodeEvent::TerminalReturn, NodeEvent::BacktrackUpdate],
        (false, true) => &[NodeEvent::CutoffReturn],
        (false, false) => &[NodeEvent::BacktrackUpdate],
    }
}

enum Expansion {
    Terminal,
    Moves(Vec<Move>),
}

/// All mutable state of one search invocation.
pub struct SearchSession {
    config: SearchConfig,
    max_player: Player,
    pass_count: u8,
    trace: Trace,
    best_value: Score,
    next_board: Option<Board>,
    stats: SearchStats,
}

impl SearchSession {
    pub fn new(max_player: Player, config: SearchConfig) -> Self {
        Self {
            config,
            max_player,
            pass_count: 0,
            trace: Trace::new(),
            best_value: Score::NegInfinity,
            next_board: None,
            stats: SearchStats::default(),
        }
    }

    pub fn execute(mut self, board: &Board) -> Result<SearchOutcome, SearchError> {
        let start = Instant::now();
        let root = self.max_value(board, Window::full(), 0, NodeLabel::Root)?;
        self.stats.duration = start.elapsed();

        info!(
            "searched {} nodes to depth {} in {:?}: value {}, {} cutoffs, {} evaluations",
            self.stats.nodes,
            self.config.depth_limit,
            self.stats.duration,
            root.value,
            self.stats.cutoffs,
            self.stats.evaluations
        );

        Ok(SearchOutcome {
            value: root.value,
            next_board: self.next_board.unwrap_or(*board),
            trace: self.trace,
            stats: self.stats,
        })
    }

    fn max_value(
        &mut self,
        board: &Board,
        window: Window,
        depth: i32,
        label: NodeLabel,
    ) -> Result<Visit, SearchError> {
        self.visit(Role::Max, board, window, depth, label)
    }

    fn min_value(
        &mut self,
        board: &Board,
        window: Window,
        depth: i32,
        label: NodeLabel,
    ) -> Result<Visit, SearchError> {
        self.visit(Role::Min, board, window, depth, label)
    }

    fn visit(
        &mut self,
        role: Role,
        board: &Board,
        mut window: Window,
        depth: i32,
        label: NodeLabel,
    ) -> Result<Visit, SearchError> {
        self.count_node()?;

        let player = match role {
            Role::Max => self.max_player,
            Role::Min => self.max_player.opposite(),
        };

        let moves = match self.expand(board, player, depth) {
            Expansion::Terminal => {
                self.stats.evaluations += 1;
                let value = Score::Finite(evaluate::score(board, self.max_player));
                return Ok(Visit {
                    value,
                    terminal: true,
                });
            }
            Expansion::Moves(moves) => moves,
        };
        debug!("{} (depth {}, {}): {} moves", label, depth, player, moves.len());

        let mut value = role.initial_value();
        for reversi_move in moves.iter() {
            self.trace.record(label, depth, value, window);

            let child_board = reversi_move.apply(board, player)?;
            let child_label = NodeLabel::from(reversi_move);

            let child = match role {
                Role::Max => self.min_value(&child_board, window, depth + 1, child_label)?,
                Role::Min => self.max_value(&child_board, window, depth + 1, child_label)?,
            };

            if depth == 0 {
                self.consider_root_successor(child.value, &child_board);
            }

            value = role.combine(value, child.value);
            let cutoff = self.config.pruning && role.is_cutoff(value, window);

            for event in events_after_child(child.terminal, cutoff) {
                match event {
                    NodeEvent::TerminalReturn => {
                        self.trace.record(child_label, depth + 1, child.value, window)
                    }
                    NodeEvent::BacktrackUpdate => window = role.tighten(window, value),
                    NodeEvent::CutoffReturn => {
                        self.stats.cutoffs += 1;
                        debug!(
                            "cutoff at {} (depth {}) after {}: {} outside [{}, {}]",
                            label, depth, child_label, value, window.alpha, window.beta
                        );
                        self.trace.record(label, depth, value, window);
                        return Ok(Visit {
                            value,
                            terminal: false,
                        });
                    }
                }
            }
        }

        self.trace.record(label, depth, value, window);
        Ok(Visit {
            value,
            terminal: false,
        })
    }

    /// Terminal test and move expansion. This is the only place the pass counter changes.
    fn expand(&mut self, board: &Board, player: Player, depth: i32) -> Expansion {
        if depth >= self.config.depth_limit {
            return Expansion::Terminal;
        }

        let moves = generate_moves(board, player);
        if !moves.is_empty() {
            self.pass_count = 0;
            return Expansion::Moves(moves);
        }

        self.pass_count = self.pass_count.saturating_add(1);
        if self.pass_count > PASS_LIMIT {
            debug!("{} cannot move after {} passes, game over", player, self.pass_count - 1);
            return Expansion::Terminal;
        }
        self.stats.passes += 1;
        Expansion::Moves(vec![Move::Pass])
    }

    fn count_node(&mut self) -> Result<(), SearchError> {
        self.stats.nodes += 1;
        match self.config.node_budget {
            Some(budget) if self.stats.nodes > budget => {
                warn!("node budget of {} exhausted", budget);
                Err(SearchError::NodeBudgetExhausted { budget })
            }
            _ => Ok(()),
        }
    }

    /// Later successors only replace the recorded one with a strictly better value.
    fn consider_root_successor(&mut self, value: Score, board: &Board) {
        if value > self.best_value {
            self.best_value = value;
            self.next_board = Some(*board);
        }
    }
}
