//! Search module for the Octi AI
//!
//! Contains:
//! - Minimax with alpha-beta pruning over in-place apply/undo
//! - Iterative deepening under a wall-clock limit

pub mod minimax;

pub use minimax::{best_move, SearchResult, Searcher};
