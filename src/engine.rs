//! Main AI engine integrating search and evaluation
//!
//! This module provides the automated player. The search follows a priority
//! system:
//!
//! 1. **Immediate win**: any move that lands on the goal row or removes the
//!    opponent's last pod is played at once
//! 2. **Alpha-Beta**: minimax search, fixed-depth or under a time limit
//!
//! # Example
//!
//! ```
//! use octi::{AIEngine, Board, Player};
//!
//! // Use smaller depth for faster example
//! let mut engine = AIEngine::with_config(2, 0);
//! let board = Board::starting();
//!
//! let result = engine.get_move_with_stats(&board, Player::First).unwrap();
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::{Duration, Instant};

use tracing::debug;

use crate::board::{Board, Player};
use crate::error::SearchError;
use crate::eval::{Evaluator, HeuristicEvaluator, Score};
use crate::rules::{apply, is_eliminated, legal_moves_for, reaches_goal, undo, CaptureRule, Move};
use crate::search::{SearchResult, Searcher};

/// Type of search that produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Found a move that wins on the spot
    ImmediateWin,
    /// Regular alpha-beta search result
    AlphaBeta,
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Move>,
    /// Evaluation score of the best move
    pub score: f64,
    /// Type of search that found this move
    pub search_type: SearchType,
    /// Depth completed by the search
    pub depth: u8,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    /// Create a result for an immediate win
    #[inline]
    fn immediate_win(mv: Move, time_ms: u64, nodes: u64) -> Self {
        Self {
            best_move: Some(mv),
            score: Score::WIN,
            search_type: SearchType::ImmediateWin,
            depth: 1,
            time_ms,
            nodes,
        }
    }

    /// Create a result from alpha-beta search
    #[inline]
    fn from_alphabeta(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: Some(result.best_move),
            score: result.score,
            search_type: SearchType::AlphaBeta,
            depth: result.depth,
            time_ms,
            nodes: result.nodes,
        }
    }
}

/// Automated Octi player.
///
/// # Configuration
///
/// - Maximum search depth
/// - Time limit per move (0 disables iterative deepening and searches the
///   full depth)
/// - Evaluator (defaults to [`HeuristicEvaluator`])
/// - Capture rule used while exploring
pub struct AIEngine<E = HeuristicEvaluator> {
    searcher: Searcher,
    evaluator: E,
    max_depth: u8,
    time_limit: Option<Duration>,
}

impl AIEngine<HeuristicEvaluator> {
    /// Create a new AI engine with default settings.
    ///
    /// Default configuration:
    /// - Maximum depth of 4
    /// - 1000ms time limit
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(4, 1000)
    }

    /// Create an AI engine with custom configuration.
    ///
    /// # Arguments
    ///
    /// * `max_depth` - Maximum search depth
    /// * `time_limit_ms` - Time limit in milliseconds, 0 for none
    #[must_use]
    pub fn with_config(max_depth: u8, time_limit_ms: u64) -> Self {
        Self::with_evaluator(HeuristicEvaluator, max_depth, time_limit_ms)
    }
}

impl Default for AIEngine<HeuristicEvaluator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Evaluator> AIEngine<E> {
    /// Create an AI engine scoring leaves with a caller-supplied evaluator
    #[must_use]
    pub fn with_evaluator(evaluator: E, max_depth: u8, time_limit_ms: u64) -> Self {
        Self {
            searcher: Searcher::new(),
            evaluator,
            max_depth: max_depth.max(1),
            time_limit: (time_limit_ms > 0).then(|| Duration::from_millis(time_limit_ms)),
        }
    }

    /// Use the given capture rule while exploring
    #[must_use]
    pub fn with_capture_rule(mut self, rule: CaptureRule) -> Self {
        self.searcher = Searcher::with_capture_rule(rule);
        self
    }

    /// Get the best move for the given position, or `None` if there is no
    /// legal move or the search failed.
    #[must_use]
    pub fn get_move(&mut self, board: &Board, player: Player) -> Option<Move> {
        self.get_move_with_stats(board, player)
            .ok()
            .and_then(|result| result.best_move)
    }

    /// Get the best move with detailed search statistics.
    ///
    /// The caller's board is not touched; the search runs on a copy.
    pub fn get_move_with_stats(&mut self, board: &Board, player: Player) -> Result<MoveResult, SearchError> {
        let start = Instant::now();
        let mut work_board = board.clone();

        // 1. Check for immediate winning move
        if let Some((mv, nodes)) = self.find_immediate_win(&mut work_board, player)? {
            debug!(%mv, "immediate win");
            return Ok(MoveResult::immediate_win(mv, elapsed_ms(start), nodes));
        }

        // 2. Alpha-Beta search
        let result = match self.time_limit {
            Some(limit) => self
                .searcher
                .search_timed(&mut work_board, player, self.max_depth, limit, &self.evaluator)?,
            None => self
                .searcher
                .search(&mut work_board, player, self.max_depth, &self.evaluator)?,
        };
        Ok(MoveResult::from_alphabeta(result, elapsed_ms(start)))
    }

    /// Find a move that wins on the spot.
    fn find_immediate_win(&self, board: &mut Board, player: Player) -> Result<Option<(Move, u64)>, SearchError> {
        let moves = legal_moves_for(board, player);
        if moves.is_empty() {
            return Err(SearchError::NoLegalMoves);
        }

        let rule = self.searcher.capture_rule();
        let opponent = player.opponent();
        for (tried, mv) in moves.into_iter().enumerate() {
            let token = apply(board, &mv, rule)?;
            let wins = token.landing().is_some_and(|to| reaches_goal(player, to))
                || is_eliminated(board, opponent);
            undo(board, token)?;
            if wins {
                return Ok(Some((mv, tried as u64 + 1)));
            }
        }
        Ok(None)
    }

    /// Set the maximum search depth.
    pub fn set_max_depth(&mut self, depth: u8) {
        self.max_depth = depth.max(1);
    }

    /// Get the current maximum search depth.
    #[must_use]
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    #[must_use]
    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }
}

#[inline]
fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}
