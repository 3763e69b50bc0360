//! Minimax search with alpha-beta pruning.
//!
//! X maximizes [`utility`], O minimizes it. The search is a plain
//! depth-first recursion: every branch owns its successor board, and the
//! only mutable state is the node counters on [`Search`].

use super::config::SearchConfig;
use super::{Action, Board, Player, Position, player, terminal, utility};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Value of a board together with the action that achieves it.
///
/// `action` is `None` for terminal boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct Evaluation {
    /// Utility from X's point of view.
    value: i32,
    /// Best action found for the side to move.
    action: Option<Action>,
}

/// Counters collected while searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SearchStats {
    /// Boards visited, including the root and terminal leaves.
    nodes: u64,
    /// Branches abandoned because the window closed.
    cutoffs: u64,
}

/// A minimax searcher.
///
/// A `Search` may be reused across boards; its [`SearchStats`] accumulate
/// until [`Search::reset_stats`] is called.
#[derive(Debug, Clone, Default)]
pub struct Search {
    config: SearchConfig,
    stats: SearchStats,
}

impl Search {
    /// Creates a searcher with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Returns the counters accumulated so far.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Clears the counters.
    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }

    /// Returns the optimal action for the side to move.
    ///
    /// Terminal boards have no legal action and yield `None` without
    /// searching.
    #[instrument(level = "debug", skip(self, board), fields(mover = %player(board)))]
    pub fn best_action(&mut self, board: &Board) -> Option<Action> {
        if terminal(board) {
            debug!("Board is terminal, nothing to search");
            return None;
        }
        *self.evaluate(board).action()
    }

    /// Evaluates the board for the side to move using the configured window.
    #[instrument(level = "debug", skip(self, board))]
    pub fn evaluate(&mut self, board: &Board) -> Evaluation {
        let before = self.stats;
        let (alpha, beta) = (*self.config.alpha(), *self.config.beta());

        let evaluation = match player(board) {
            Player::X => self.maximize(board, alpha, beta),
            Player::O => self.minimize(board, alpha, beta),
        };

        debug!(
            value = evaluation.value,
            action = ?evaluation.action,
            nodes = self.stats.nodes - before.nodes,
            cutoffs = self.stats.cutoffs - before.cutoffs,
            "Search complete"
        );
        evaluation
    }

    /// Best value and action for X, searching within `(alpha, beta)`.
    ///
    /// The recorded action only changes when the value strictly improves,
    /// so the first action (in row-major order) reaching the best value is
    /// kept. On a cutoff the cutting action is returned.
    pub fn maximize(&mut self, board: &Board, mut alpha: i32, beta: i32) -> Evaluation {
        self.stats.nodes += 1;
        if terminal(board) {
            return Evaluation::new(utility(board), None);
        }

        let mut value = i32::MIN;
        let mut best = None;
        for (action, child) in successors(board) {
            let reply = self.minimize(&child, alpha, beta).value;
            if reply > value {
                value = reply;
                best = Some(action);
            }
            if *self.config.pruning() {
                if value >= beta {
                    self.stats.cutoffs += 1;
                    return Evaluation::new(value, Some(action));
                }
                alpha = alpha.max(value);
            }
        }
        Evaluation::new(value, best)
    }

    /// Best value and action for O, searching within `(alpha, beta)`.
    ///
    /// Mirror image of [`Search::maximize`].
    pub fn minimize(&mut self, board: &Board, alpha: i32, mut beta: i32) -> Evaluation {
        self.stats.nodes += 1;
        if terminal(board) {
            return Evaluation::new(utility(board), None);
        }

        let mut value = i32::MAX;
        let mut best = None;
        for (action, child) in successors(board) {
            let reply = self.maximize(&child, alpha, beta).value;
            if reply < value {
                value = reply;
                best = Some(action);
            }
            if *self.config.pruning() {
                if value <= alpha {
                    self.stats.cutoffs += 1;
                    return Evaluation::new(value, Some(action));
                }
                beta = beta.min(value);
            }
        }
        Evaluation::new(value, best)
    }
}

/// Every legal action paired with the board it produces, in row-major order.
///
/// Equivalent to pairing [`crate::actions`] with [`crate::result`], minus
/// the re-validation of squares already known to be empty.
fn successors(board: &Board) -> impl Iterator<Item = (Action, Board)> + '_ {
    let mover = player(board);
    Position::ALL
        .into_iter()
        .filter(move |pos| board.is_empty(*pos))
        .map(move |pos| (pos.action(), board.with_mark(pos, mover)))
}

/// Returns the optimal action for the side to move, or `None` if the
/// board is terminal.
#[instrument(skip(board))]
pub fn minimax(board: &Board) -> Option<Action> {
    Search::default().best_action(board)
}

/// Game-theoretic value of the board under optimal play by both sides.
#[instrument(skip(board))]
pub fn value(board: &Board) -> i32 {
    if terminal(board) {
        return utility(board);
    }
    *Search::default().evaluate(board).value()
}

/// Alpha-beta maximizing search with the default configuration.
pub fn maximize(board: &Board, alpha: i32, beta: i32) -> Evaluation {
    Search::default().maximize(board, alpha, beta)
}

/// Alpha-beta minimizing search with the default configuration.
pub fn minimize(board: &Board, alpha: i32, beta: i32) -> Evaluation {
    Search::default().minimize(board, alpha, beta)
}
