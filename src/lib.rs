//! Octi rules engine and AI
//!
//! A rules engine and adversarial search for Octi, a two-player game on an
//! 8x8 board:
//! - Pods carry up to four prongs (N, S, E, W)
//! - A pod steps one cell along any of its prongs, capturing an opposing pod
//!   it steps onto by stripping one of its prongs
//! - Any pod may jump two cells, orthogonally or diagonally, over an occupied
//!   cell onto an empty one; jumps chain and never capture
//! - A turn may instead attach a new prong
//! - Reaching the opponent's home row, or removing all opposing pods, wins
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board, pods, positions and directions
//! - [`rules`]: Move generation, apply/undo, win conditions, move notation
//! - [`game`]: Match state machine (turns, record, wins and draws)
//! - [`eval`]: The `Evaluator` capability and a heuristic implementation
//! - [`search`]: Minimax with alpha-beta pruning
//! - [`engine`]: AI engine integrating search and evaluation
//! - [`ui`]: Desktop GUI
//!
//! # Quick Start
//!
//! ```
//! use octi::{AIEngine, Match, MatchConfig};
//!
//! let mut game = Match::new(MatchConfig::default());
//! let mut engine = AIEngine::with_config(2, 0);
//!
//! // AI plays the opening move for player 0
//! if let Some(mv) = engine.get_move(game.board(), game.current_player()) {
//!     game.submit_move(mv.clone()).unwrap();
//!     println!("AI plays {}", mv);
//! }
//! ```

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Direction, Player, Pod, Pos, Prongs, BOARD_SIZE};
pub use engine::{AIEngine, MoveResult, SearchType};
pub use error::{MoveError, ParseMoveError, RulesError, SearchError};
pub use eval::{Evaluator, HeuristicEvaluator};
pub use game::{DrawReason, Match, MatchConfig, Outcome, WinType};
pub use rules::{legal_moves_for, CaptureRule, Move, UndoToken};
pub use search::{best_move, Searcher};
