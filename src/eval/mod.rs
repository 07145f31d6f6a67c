//! Position evaluation
//!
//! The search only needs the [`Evaluator`] capability: a deterministic score
//! for a board from one player's point of view. Any `Fn(&Board, Player) -> f64`
//! qualifies, so a learned model can be plugged in as a closure.
//! [`HeuristicEvaluator`] is the default used by the engine and the GUI.

pub mod heuristic;

pub use heuristic::{evaluate, HeuristicEvaluator, Score};

use crate::board::{Board, Player};

/// Scores a board; higher is better for `perspective`.
///
/// Must be deterministic for a fixed board, otherwise search results are
/// not reproducible.
pub trait Evaluator {
    fn score(&self, board: &Board, perspective: Player) -> f64;
}

impl<F> Evaluator for F
where
    F: Fn(&Board, Player) -> f64,
{
    #[inline]
    fn score(&self, board: &Board, perspective: Player) -> f64 {
        self(board, perspective)
    }
}
