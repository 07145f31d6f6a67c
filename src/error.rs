use crate::board::Pos;
use crate::rules::Move;

/// Internal-consistency failures in move application.
///
/// These indicate a bug in the caller (an undo token replayed against a
/// board it was not produced from), never a user mistake.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    #[error("board does not match move record at {at}: {reason}")]
    InvalidState { at: Pos, reason: &'static str },
}

/// Errors returned when submitting a move to a match.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("illegal move: {0}")]
    IllegalMove(Move),

    #[error("game is already over")]
    GameOver,

    #[error("internal error: {0}")]
    Internal(#[from] RulesError),
}

/// Errors returned by the search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("no legal moves in this position")]
    NoLegalMoves,

    #[error("search aborted: {0}")]
    InvalidState(#[from] RulesError),
}

/// Errors from parsing the textual move encoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseMoveError {
    #[error("empty move")]
    Empty,

    #[error("unknown move kind '{0}' (expected STEP, JUMP or PRONG)")]
    UnknownKind(String),

    #[error("invalid position '{0}'")]
    BadPosition(String),

    #[error("invalid direction '{0}'")]
    BadDirection(String),

    #[error("missing {0}")]
    Missing(&'static str),

    #[error("unexpected trailing input '{0}'")]
    Trailing(String),
}
