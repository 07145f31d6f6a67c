//! Match orchestration
//!
//! [`Match`] owns the board for the life of a game, validates and applies
//! submitted moves, keeps the move record and decides wins and draws. Every
//! front-end (GUI, CLI, automated player) goes through [`Match::submit_move`].
//!
//! # Example
//!
//! ```
//! use octi::{Match, MatchConfig, Move, Pos, Direction};
//!
//! let mut game = Match::new(MatchConfig::default());
//! game.submit_move(Move::ProngAdd { at: Pos::new(1, 2), direction: Direction::S }).unwrap();
//! assert_eq!(game.move_log().len(), 1);
//! ```

use tracing::{debug, info, warn};

use crate::board::{Board, Player};
use crate::error::MoveError;
use crate::rules::{apply, has_legal_moves, is_eliminated, is_legal, legal_moves_for, reaches_goal, CaptureRule, Move};

/// Default move limit before a match is drawn
pub const DEFAULT_MAX_MOVES: usize = 100;

/// Match settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    /// Total moves (both players) after which the match is a draw
    pub max_moves: usize,
    pub capture_rule: CaptureRule,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_moves: DEFAULT_MAX_MOVES,
            capture_rule: CaptureRule::default(),
        }
    }
}

/// How a match was won
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinType {
    /// A pod reached the opponent's home row
    HomeRow,
    /// The opponent has no pods left
    Elimination,
}

/// Why a match was drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawReason {
    MoveLimit,
    NoMoves,
}

/// Final result of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won { winner: Player, win_type: WinType },
    Draw(DrawReason),
}

impl Outcome {
    #[inline]
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won { winner, .. } => Some(*winner),
            Outcome::Draw(_) => None,
        }
    }
}

/// State of one match
#[derive(Debug, Clone)]
pub struct Match {
    board: Board,
    current: Player,
    outcome: Option<Outcome>,
    record: Vec<(Player, Move)>,
    config: MatchConfig,
}

impl Match {
    /// New match from the standard setup, player 0 to move
    pub fn new(config: MatchConfig) -> Self {
        Self::from_position(Board::starting(), Player::First, config)
    }

    /// New match from an arbitrary position
    pub fn from_position(board: Board, to_move: Player, config: MatchConfig) -> Self {
        Self {
            board,
            current: to_move,
            outcome: None,
            record: Vec::new(),
            config,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// Winner or draw, once the match is over
    #[inline]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Moves played so far, oldest first
    #[inline]
    pub fn move_log(&self) -> &[(Player, Move)] {
        &self.record
    }

    #[inline]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Legal moves for the player to move (empty once the match is over)
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_over() {
            return Vec::new();
        }
        legal_moves_for(&self.board, self.current)
    }

    /// Validate and play a move for the current player.
    ///
    /// A rejected move leaves the match untouched.
    pub fn submit_move(&mut self, mv: Move) -> Result<(), MoveError> {
        if self.outcome.is_some() {
            warn!(%mv, "move submitted after the match ended");
            return Err(MoveError::GameOver);
        }

        let player = self.current;
        if !is_legal(&self.board, player, &mv) {
            warn!(%player, %mv, "illegal move rejected");
            return Err(MoveError::IllegalMove(mv));
        }

        let token = apply(&mut self.board, &mv, self.config.capture_rule)?;
        debug!(%player, %mv, "move applied");
        self.record.push((player, mv));

        // Win check runs before any draw check
        let opponent = player.opponent();
        if token.landing().is_some_and(|to| reaches_goal(player, to)) {
            self.finish(Outcome::Won {
                winner: player,
                win_type: WinType::HomeRow,
            });
        } else if is_eliminated(&self.board, opponent) {
            self.finish(Outcome::Won {
                winner: player,
                win_type: WinType::Elimination,
            });
        } else if self.record.len() >= self.config.max_moves {
            self.finish(Outcome::Draw(DrawReason::MoveLimit));
        } else if !has_legal_moves(&self.board, player) && !has_legal_moves(&self.board, opponent) {
            self.finish(Outcome::Draw(DrawReason::NoMoves));
        }

        if self.outcome.is_none() {
            self.current = opponent;
        }
        Ok(())
    }

    fn finish(&mut self, outcome: Outcome) {
        info!(?outcome, moves = self.record.len(), "match over");
        self.outcome = Some(outcome);
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::new(MatchConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Direction, Pos};

    fn prong(row: u8, col: u8, direction: Direction) -> Move {
        Move::ProngAdd {
            at: Pos::new(row, col),
            direction,
        }
    }

    fn step(from: (u8, u8), to: (u8, u8)) -> Move {
        Move::Step {
            from: Pos::new(from.0, from.1),
            to: Pos::new(to.0, to.1),
        }
    }

    #[test]
    fn test_new_match() {
        let game = Match::default();
        assert_eq!(game.current_player(), Player::First);
        assert!(game.outcome().is_none());
        assert!(game.move_log().is_empty());
        assert_eq!(game.legal_moves().len(), 16);
    }

    #[test]
    fn test_turns_alternate_and_log() {
        let mut game = Match::default();
        game.submit_move(prong(1, 2, Direction::S)).expect("legal");
        assert_eq!(game.current_player(), Player::Second);
        game.submit_move(prong(6, 2, Direction::N)).expect("legal");
        assert_eq!(game.current_player(), Player::First);
        assert_eq!(
            game.move_log(),
            &[
                (Player::First, prong(1, 2, Direction::S)),
                (Player::Second, prong(6, 2, Direction::N)),
            ]
        );
    }

    #[test]
    fn test_illegal_move_rejected_without_mutation() {
        let mut game = Match::default();
        let before = game.board().clone();

        let err = game.submit_move(step((1, 2), (2, 2))).expect_err("no prong yet");
        assert_eq!(err, MoveError::IllegalMove(step((1, 2), (2, 2))));
        // Opponent's pod
        assert!(game.submit_move(prong(6, 2, Direction::N)).is_err());

        assert_eq!(game.board(), &before);
        assert!(game.move_log().is_empty());
        assert_eq!(game.current_player(), Player::First);
    }

    #[test]
    fn test_off_board_move_rejected() {
        let mut game = Match::default();
        let before = game.board().clone();
        let mv = Move::Step {
            from: Pos { row: 8, col: 0 },
            to: Pos { row: 7, col: 0 },
        };
        assert_eq!(game.submit_move(mv.clone()), Err(MoveError::IllegalMove(mv)));
        assert_eq!(game.board(), &before);
        assert!(game.move_log().is_empty());
        assert_eq!(game.current_player(), Player::First);
    }

    #[test]
    fn test_duplicate_prong_is_illegal() {
        let mut game = Match::default();
        game.submit_move(prong(1, 2, Direction::S)).expect("legal");
        game.submit_move(prong(6, 2, Direction::N)).expect("legal");
        assert!(matches!(
            game.submit_move(prong(1, 2, Direction::S)),
            Err(MoveError::IllegalMove(_))
        ));
    }

    #[test]
    fn test_draw_by_move_limit() {
        let config = MatchConfig {
            max_moves: 2,
            ..MatchConfig::default()
        };
        let mut game = Match::new(config);
        game.submit_move(prong(1, 2, Direction::S)).expect("legal");
        assert!(game.outcome().is_none());
        game.submit_move(prong(6, 2, Direction::N)).expect("legal");
        assert_eq!(game.outcome(), Some(Outcome::Draw(DrawReason::MoveLimit)));
        assert_eq!(game.submit_move(prong(1, 3, Direction::S)), Err(MoveError::GameOver));
        assert!(game.legal_moves().is_empty());
    }

    #[test]
    fn test_home_row_win_beats_move_limit() {
        let mut board = Board::starting();
        board.place_pod(Pos::new(6, 0), Player::First, &[Direction::S]);
        let config = MatchConfig {
            max_moves: 1,
            ..MatchConfig::default()
        };
        let mut game = Match::from_position(board, Player::First, config);
        game.submit_move(step((6, 0), (7, 0))).expect("legal");
        assert_eq!(
            game.outcome(),
            Some(Outcome::Won {
                winner: Player::First,
                win_type: WinType::HomeRow
            })
        );
        // Winner keeps the turn marker
        assert_eq!(game.current_player(), Player::First);
    }

    #[test]
    fn test_player_one_wins_on_row_zero() {
        let mut board = Board::starting();
        board.place_pod(Pos::new(1, 7), Player::First, &[]);
        board.place_pod(Pos::new(2, 7), Player::Second, &[]);
        let mut game = Match::from_position(board, Player::Second, MatchConfig::default());
        game.submit_move(Move::jump(Pos::new(2, 7), &[Pos::new(0, 7)]))
            .expect("legal");
        assert_eq!(game.outcome().and_then(|o| o.winner()), Some(Player::Second));
    }

    #[test]
    fn test_win_by_elimination() {
        let mut board = Board::new();
        board.place_pod(Pos::new(3, 3), Player::First, &[Direction::E]);
        board.place_pod(Pos::new(3, 4), Player::Second, &[Direction::W]);
        let mut game = Match::from_position(board, Player::First, MatchConfig::default());
        game.submit_move(step((3, 3), (3, 4))).expect("legal");
        assert_eq!(
            game.outcome(),
            Some(Outcome::Won {
                winner: Player::First,
                win_type: WinType::Elimination
            })
        );
    }

    #[test]
    fn test_strict_capture_does_not_win_home_row() {
        // Attacker stays put under the strict rule, so the target row does not count
        let mut board = Board::new();
        board.place_pod(Pos::new(6, 3), Player::First, &[Direction::S]);
        board.place_pod(Pos::new(7, 3), Player::Second, &[Direction::N, Direction::E]);
        let config = MatchConfig {
            capture_rule: CaptureRule::Strict,
            ..MatchConfig::default()
        };
        let mut game = Match::from_position(board, Player::First, config);
        game.submit_move(step((6, 3), (7, 3))).expect("legal");
        assert!(game.outcome().is_none());
        assert_eq!(game.board().owner_at(Pos::new(7, 3)), Some(Player::Second));
        assert_eq!(game.current_player(), Player::Second);
    }

    #[test]
    fn test_scenario_step_after_prong() {
        let mut game = Match::default();
        game.submit_move(prong(1, 2, Direction::S)).expect("legal");
        game.submit_move(prong(6, 2, Direction::N)).expect("legal");
        assert!(game.legal_moves().contains(&step((1, 2), (2, 2))));
        game.submit_move(step((1, 2), (2, 2))).expect("legal");
        assert_eq!(game.board().owner_at(Pos::new(2, 2)), Some(Player::First));
    }
}
