//! Minimax search with alpha-beta pruning
//!
//! The search explores the tree in place: every child is reached with
//! [`apply`] and left with [`undo`], so the caller's board is restored
//! exactly when a call returns, on success and on error alike.
//!
//! # Features
//!
//! - Fixed-depth minimax from the root player's perspective
//! - Alpha-beta cutoffs in generation order, ties kept by first move
//! - Iterative deepening with a wall-clock deadline checked between siblings
//!
//! # Example
//!
//! ```
//! use octi::board::{Board, Player};
//! use octi::eval::HeuristicEvaluator;
//! use octi::search::Searcher;
//!
//! let mut searcher = Searcher::new();
//! let mut board = Board::starting();
//!
//! let result = searcher.search(&mut board, Player::First, 2, &HeuristicEvaluator).unwrap();
//! println!("Best move: {}", result.best_move);
//! ```

use std::time::{Duration, Instant};

use tracing::debug;

use crate::board::{Board, Player};
use crate::error::SearchError;
use crate::eval::Evaluator;
use crate::rules::{apply, legal_moves_for, undo, winner_on_board, CaptureRule, Move};

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found
    pub best_move: Move,
    /// Minimax score of the best move, from the searching player's view
    pub score: f64,
    /// Depth completed
    pub depth: u8,
    /// Total nodes visited
    pub nodes: u64,
}

/// Minimax searcher.
///
/// Holds only configuration and counters; the board and the evaluator are
/// borrowed per call.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    capture_rule: CaptureRule,
    nodes: u64,
    deadline: Option<Instant>,
    stopped: bool,
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Searcher applying captures with the given rule
    #[must_use]
    pub fn with_capture_rule(capture_rule: CaptureRule) -> Self {
        Self {
            capture_rule,
            ..Self::default()
        }
    }

    #[inline]
    pub fn capture_rule(&self) -> CaptureRule {
        self.capture_rule
    }

    /// Nodes visited by the last call
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Fixed-depth search. A depth of 0 is treated as 1: the root always
    /// expands one ply so that a move can be returned.
    pub fn search<E: Evaluator + ?Sized>(
        &mut self,
        board: &mut Board,
        player: Player,
        depth: u8,
        evaluator: &E,
    ) -> Result<SearchResult, SearchError> {
        self.nodes = 0;
        self.deadline = None;
        self.stopped = false;
        let depth = depth.max(1);
        let mut result = self.search_root(board, player, depth, evaluator)?;
        result.nodes = self.nodes;
        debug!(depth, nodes = self.nodes, score = result.score, best = %result.best_move, "search complete");
        Ok(result)
    }

    /// Iterative deepening from depth 1 up to `max_depth`, stopping once
    /// `time_limit` has elapsed.
    ///
    /// The deadline is checked between sibling expansions. An iteration cut
    /// short is discarded, except for depth 1, whose partial result still
    /// names a legal move.
    pub fn search_timed<E: Evaluator + ?Sized>(
        &mut self,
        board: &mut Board,
        player: Player,
        max_depth: u8,
        time_limit: Duration,
        evaluator: &E,
    ) -> Result<SearchResult, SearchError> {
        self.nodes = 0;
        self.stopped = false;
        self.deadline = Some(Instant::now() + time_limit);

        let mut best: Option<SearchResult> = None;
        for depth in 1..=max_depth.max(1) {
            let result = self.search_root(board, player, depth, evaluator)?;
            if self.stopped && best.is_some() {
                debug!(depth, "iteration interrupted by deadline");
                break;
            }
            debug!(depth, nodes = self.nodes, score = result.score, best = %result.best_move, "iteration complete");
            best = Some(result);
            if self.stopped {
                break;
            }
        }

        self.deadline = None;
        // The loop runs at least once and search_root errors when there are no moves
        let mut result = best.ok_or(SearchError::NoLegalMoves)?;
        result.nodes = self.nodes;
        Ok(result)
    }

    fn out_of_time(&mut self) -> bool {
        if !self.stopped {
            if let Some(deadline) = self.deadline {
                self.stopped = Instant::now() >= deadline;
            }
        }
        self.stopped
    }

    fn search_root<E: Evaluator + ?Sized>(
        &mut self,
        board: &mut Board,
        player: Player,
        depth: u8,
        evaluator: &E,
    ) -> Result<SearchResult, SearchError> {
        self.nodes += 1;
        let moves = legal_moves_for(board, player);
        if moves.is_empty() {
            return Err(SearchError::NoLegalMoves);
        }

        let mut alpha = f64::NEG_INFINITY;
        let beta = f64::INFINITY;
        let mut best: Option<(Move, f64)> = None;

        for mv in moves {
            if best.is_some() && self.out_of_time() {
                break;
            }
            let token = apply(board, &mv, self.capture_rule)?;
            let score = self.minimax(board, player.opponent(), player, depth - 1, alpha, beta, evaluator);
            undo(board, token)?;
            let score = score?;

            if best.as_ref().map_or(true, |(_, s)| score > *s) {
                best = Some((mv, score));
            }
            alpha = alpha.max(score);
        }

        let (best_move, score) = best.ok_or(SearchError::NoLegalMoves)?;
        Ok(SearchResult {
            best_move,
            score,
            depth,
            nodes: self.nodes,
        })
    }

    #[allow(clippy::too_many_arguments)]
    fn minimax<E: Evaluator + ?Sized>(
        &mut self,
        board: &mut Board,
        to_move: Player,
        root: Player,
        depth: u8,
        mut alpha: f64,
        mut beta: f64,
        evaluator: &E,
    ) -> Result<f64, SearchError> {
        self.nodes += 1;

        if depth == 0 || winner_on_board(board).is_some() {
            return Ok(evaluator.score(board, root));
        }
        let moves = legal_moves_for(board, to_move);
        if moves.is_empty() {
            return Ok(evaluator.score(board, root));
        }

        let maximizing = to_move == root;
        let mut best = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };

        for (i, mv) in moves.iter().enumerate() {
            if i > 0 && self.out_of_time() {
                break;
            }
            let token = apply(board, mv, self.capture_rule)?;
            let score = self.minimax(board, to_move.opponent(), root, depth - 1, alpha, beta, evaluator);
            undo(board, token)?;
            let score = score?;

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if beta <= alpha {
                break;
            }
        }

        Ok(best)
    }
}

/// Best move for `player` at a fixed depth.
///
/// The board is borrowed mutably for exploration and restored before
/// returning.
pub fn best_move<E: Evaluator + ?Sized>(
    board: &mut Board,
    player: Player,
    depth: u8,
    evaluator: &E,
) -> Result<Move, SearchError> {
    Searcher::new()
        .search(board, player, depth, evaluator)
        .map(|result| result.best_move)
}
