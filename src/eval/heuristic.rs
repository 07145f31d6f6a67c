//! Heuristic evaluation function for Octi board positions
//!
//! Scores a position from material and progress:
//! - Win/loss detection (goal row or elimination)
//! - Pods on board
//! - Prongs attached (each one is a move option and a life)
//! - Advancement toward the goal row
//!
//! The score is symmetric: `evaluate(b, p) == -evaluate(b, p.opponent())`.

use crate::board::{Board, Player};
use crate::rules::winner_on_board;

use super::Evaluator;

/// Score weights
pub struct Score;

impl Score {
    pub const WIN: f64 = 1_000_000.0;
    pub const POD: f64 = 100.0;
    pub const PRONG: f64 = 15.0;
    /// Per row travelled from the start row toward the goal row
    pub const ADVANCE: f64 = 8.0;
}

/// Evaluate the board from the perspective of the given player.
///
/// Returns `Score::WIN` for a won position, `-Score::WIN` for a lost one.
#[must_use]
pub fn evaluate(board: &Board, player: Player) -> f64 {
    match winner_on_board(board) {
        Some(winner) if winner == player => return Score::WIN,
        Some(_) => return -Score::WIN,
        None => {}
    }

    material(board, player) - material(board, player.opponent())
}

fn material(board: &Board, player: Player) -> f64 {
    let start = i32::from(player.start_row());
    let toward_goal = if player.goal_row() > player.start_row() { 1 } else { -1 };

    board
        .pods_of(player)
        .map(|(pos, pod)| {
            let advanced = ((i32::from(pos.row) - start) * toward_goal).max(0);
            Score::POD + Score::PRONG * pod.prongs.len() as f64 + Score::ADVANCE * f64::from(advanced)
        })
        .sum()
}

/// [`evaluate`] as an [`Evaluator`]
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicEvaluator;

impl Evaluator for HeuristicEvaluator {
    fn score(&self, board: &Board, perspective: Player) -> f64 {
        evaluate(board, perspective)
    }
}
