//! Move application and undo
//!
//! [`apply`] mutates the board in place and returns an [`UndoToken`];
//! [`undo`] consumes the token and restores the exact prior board. The
//! search explores the tree with this pair instead of cloning boards.

use crate::board::{Board, Direction, Pod, Pos};
use crate::error::RulesError;

use super::moves::Move;

/// How a capturing step resolves when the defender survives with prongs left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureRule {
    /// The attacker always moves into the defender's cell, replacing
    /// whatever is left of the defender
    #[default]
    Overwrite,
    /// The attacker moves in only when the defender was eliminated;
    /// otherwise it stays put and the weakened defender remains
    Strict,
}

/// Everything needed to reverse one applied move
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UndoToken {
    /// Pod relocated from `from` to the empty cell `to` (steps and jump chains)
    Relocate { from: Pos, to: Pos },
    /// Capturing step
    Capture {
        from: Pos,
        to: Pos,
        /// Defender as it was before the capture
        defender: Pod,
        /// Prong stripped from the defender, if it had any
        removed: Option<Direction>,
        /// Whether the attacker ended up on `to`
        attacker_moved: bool,
    },
    /// Prong appended to the pod at `at`
    ProngAdd { at: Pos, direction: Direction },
}

impl UndoToken {
    /// Cell the moving pod landed on, if it moved
    pub fn landing(&self) -> Option<Pos> {
        match self {
            UndoToken::Relocate { to, .. } => Some(*to),
            UndoToken::Capture {
                to, attacker_moved, ..
            } => attacker_moved.then_some(*to),
            UndoToken::ProngAdd { .. } => None,
        }
    }

    /// Whether the defender of a capture left the board for good.
    /// Under [`CaptureRule::Overwrite`] a surviving defender is still replaced.
    pub fn removed_pod(&self) -> Option<Pod> {
        match self {
            UndoToken::Capture {
                defender,
                attacker_moved,
                ..
            } if *attacker_moved => Some(*defender),
            _ => None,
        }
    }
}

fn invalid(at: Pos, reason: &'static str) -> RulesError {
    RulesError::InvalidState { at, reason }
}

/// Apply a move the caller has already validated.
///
/// Preconditions are checked before anything is mutated, so an error leaves
/// the board untouched.
pub fn apply(board: &mut Board, mv: &Move, rule: CaptureRule) -> Result<UndoToken, RulesError> {
    match mv {
        Move::Step { from, to } => apply_step(board, *from, *to, rule),
        Move::Jump { from, path } => {
            let to = *path.last().ok_or_else(|| invalid(*from, "jump without landing"))?;
            relocate(board, *from, to)
        }
        Move::ProngAdd { at, direction } => {
            let pod = board
                .pod_mut(*at)
                .ok_or_else(|| invalid(*at, "no pod to attach a prong to"))?;
            if !pod.prongs.push(*direction) {
                return Err(invalid(*at, "prong already attached"));
            }
            Ok(UndoToken::ProngAdd {
                at: *at,
                direction: *direction,
            })
        }
    }
}

fn apply_step(board: &mut Board, from: Pos, to: Pos, rule: CaptureRule) -> Result<UndoToken, RulesError> {
    let attacker = board
        .cell_at(from)
        .ok_or_else(|| invalid(from, "no pod to move"))?;

    let Some(defender) = board.cell_at(to) else {
        return relocate(board, from, to);
    };
    if defender.owner == attacker.owner {
        return Err(invalid(to, "cannot capture own pod"));
    }

    let mut weakened = defender;
    let removed = weakened.prongs.pop();
    let eliminated = weakened.prongs.is_empty();
    let attacker_moved = eliminated || rule == CaptureRule::Overwrite;

    if attacker_moved {
        board.take(from);
        board.put(to, attacker);
    } else {
        board.put(to, weakened);
    }

    Ok(UndoToken::Capture {
        from,
        to,
        defender,
        removed,
        attacker_moved,
    })
}

fn relocate(board: &mut Board, from: Pos, to: Pos) -> Result<UndoToken, RulesError> {
    if !board.is_empty(to) {
        return Err(invalid(to, "destination occupied"));
    }
    let pod = board.take(from).ok_or_else(|| invalid(from, "no pod to move"))?;
    board.put(to, pod);
    Ok(UndoToken::Relocate { from, to })
}

/// Reverse a move applied with [`apply`].
///
/// Returns [`RulesError::InvalidState`] if the token does not fit the board,
/// in which case the board is left unchanged.
pub fn undo(board: &mut Board, token: UndoToken) -> Result<(), RulesError> {
    match token {
        UndoToken::Relocate { from, to } => {
            if !board.is_empty(from) {
                return Err(invalid(from, "origin occupied on undo"));
            }
            let pod = board.take(to).ok_or_else(|| invalid(to, "no pod to move back"))?;
            board.put(from, pod);
        }
        UndoToken::Capture {
            from,
            to,
            defender,
            attacker_moved,
            ..
        } => {
            if attacker_moved {
                if !board.is_empty(from) {
                    return Err(invalid(from, "origin occupied on undo"));
                }
                if board.owner_at(to) != Some(defender.owner.opponent()) {
                    return Err(invalid(to, "attacker missing on undo"));
                }
                let attacker = board.take(to).ok_or_else(|| invalid(to, "no attacker to move back"))?;
                board.put(from, attacker);
            } else {
                if board.owner_at(to) != Some(defender.owner) {
                    return Err(invalid(to, "weakened defender missing on undo"));
                }
                if board.is_empty(from) {
                    return Err(invalid(from, "attacker missing on undo"));
                }
            }
            board.put(to, defender);
        }
        UndoToken::ProngAdd { at, direction } => {
            let pod = board
                .pod_mut(at)
                .ok_or_else(|| invalid(at, "no pod to detach a prong from"))?;
            if pod.prongs.last() != Some(direction) {
                return Err(invalid(at, "prong was not the last attached"));
            }
            pod.prongs.pop();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Player;
    use crate::rules::legal_moves_for;

    fn step(from: (u8, u8), to: (u8, u8)) -> Move {
        Move::Step {
            from: Pos::new(from.0, from.1),
            to: Pos::new(to.0, to.1),
        }
    }

    #[test]
    fn test_step_and_undo_restores_board() {
        let mut board = Board::starting();
        board.place_pod(Pos::new(1, 2), Player::First, &[Direction::S]);
        let before = board.clone();

        let token = apply(&mut board, &step((1, 2), (2, 2)), CaptureRule::default()).expect("apply");
        assert!(board.is_empty(Pos::new(1, 2)));
        assert_eq!(board.owner_at(Pos::new(2, 2)), Some(Player::First));
        assert_eq!(token.landing(), Some(Pos::new(2, 2)));

        undo(&mut board, token).expect("undo");
        assert_eq!(board, before);
    }

    #[test]
    fn test_prong_add_and_undo() {
        let mut board = Board::starting();
        let before = board.clone();
        let mv = Move::ProngAdd {
            at: Pos::new(6, 3),
            direction: Direction::N,
        };
        let token = apply(&mut board, &mv, CaptureRule::default()).expect("apply");
        let pod = board.cell_at(Pos::new(6, 3)).expect("pod");
        assert!(pod.has_prong(Direction::N));
        assert_eq!(token.landing(), None);

        undo(&mut board, token).expect("undo");
        assert_eq!(board, before);
    }

    #[test]
    fn test_duplicate_prong_rejected_without_mutation() {
        let mut board = Board::new();
        board.place_pod(Pos::new(2, 2), Player::First, &[Direction::E]);
        let before = board.clone();
        let mv = Move::ProngAdd {
            at: Pos::new(2, 2),
            direction: Direction::E,
        };
        assert!(apply(&mut board, &mv, CaptureRule::default()).is_err());
        assert_eq!(board, before);
    }

    #[test]
    fn test_capture_removes_last_prong_and_overwrites() {
        let mut board = Board::new();
        board.place_pod(Pos::new(3, 3), Player::First, &[Direction::E]);
        board.place_pod(Pos::new(3, 4), Player::Second, &[Direction::W, Direction::N]);
        let before = board.clone();

        let token = apply(&mut board, &step((3, 3), (3, 4)), CaptureRule::Overwrite).expect("apply");
        match &token {
            UndoToken::Capture {
                removed,
                attacker_moved,
                ..
            } => {
                assert_eq!(*removed, Some(Direction::N));
                assert!(*attacker_moved);
            }
            other => panic!("expected capture, got {:?}", other),
        }
        assert_eq!(board.owner_at(Pos::new(3, 4)), Some(Player::First));
        assert_eq!(board.pod_count(Player::Second), 0);
        assert!(token.removed_pod().is_some());

        undo(&mut board, token).expect("undo");
        assert_eq!(board, before);
    }

    #[test]
    fn test_strict_capture_keeps_weakened_defender() {
        let mut board = Board::new();
        board.place_pod(Pos::new(3, 3), Player::First, &[Direction::E]);
        board.place_pod(Pos::new(3, 4), Player::Second, &[Direction::W, Direction::N]);
        let before = board.clone();

        let token = apply(&mut board, &step((3, 3), (3, 4)), CaptureRule::Strict).expect("apply");
        assert_eq!(token.landing(), None);
        assert_eq!(board.owner_at(Pos::new(3, 3)), Some(Player::First));
        let defender = board.cell_at(Pos::new(3, 4)).expect("defender survives");
        assert_eq!(defender.prongs.as_slice(), &[Direction::W]);
        assert_eq!(board.total_pods(), 2);

        undo(&mut board, token).expect("undo");
        assert_eq!(board, before);
    }

    #[test]
    fn test_strict_capture_eliminates_last_prong() {
        let mut board = Board::new();
        board.place_pod(Pos::new(3, 3), Player::First, &[Direction::E]);
        board.place_pod(Pos::new(3, 4), Player::Second, &[Direction::W]);
        let before = board.clone();

        let token = apply(&mut board, &step((3, 3), (3, 4)), CaptureRule::Strict).expect("apply");
        assert_eq!(token.landing(), Some(Pos::new(3, 4)));
        assert_eq!(board.pod_count(Player::Second), 0);
        assert_eq!(board.total_pods(), 1);

        undo(&mut board, token).expect("undo");
        assert_eq!(board, before);
    }

    #[test]
    fn test_capture_bare_pod() {
        let mut board = Board::new();
        board.place_pod(Pos::new(3, 3), Player::First, &[Direction::S]);
        board.place_pod(Pos::new(4, 3), Player::Second, &[]);

        let token = apply(&mut board, &step((3, 3), (4, 3)), CaptureRule::Strict).expect("apply");
        assert!(matches!(token, UndoToken::Capture { removed: None, attacker_moved: true, .. }));
        assert_eq!(board.pod_count(Player::Second), 0);
    }

    #[test]
    fn test_jump_chain_leaves_midpoints() {
        let mut board = Board::new();
        board.place_pod(Pos::new(0, 0), Player::First, &[]);
        board.place_pod(Pos::new(1, 0), Player::Second, &[Direction::N]);
        board.place_pod(Pos::new(3, 0), Player::First, &[Direction::E]);
        let before = board.clone();

        let mv = Move::jump(Pos::new(0, 0), &[Pos::new(2, 0), Pos::new(4, 0)]);
        let token = apply(&mut board, &mv, CaptureRule::default()).expect("apply");
        assert_eq!(board.owner_at(Pos::new(4, 0)), Some(Player::First));
        assert_eq!(board.cell_at(Pos::new(1, 0)), before.cell_at(Pos::new(1, 0)));
        assert_eq!(board.cell_at(Pos::new(3, 0)), before.cell_at(Pos::new(3, 0)));
        assert_eq!(board.total_pods(), 3);

        undo(&mut board, token).expect("undo");
        assert_eq!(board, before);
    }

    #[test]
    fn test_undo_against_wrong_board_fails() {
        let mut board = Board::starting();
        board.place_pod(Pos::new(1, 2), Player::First, &[Direction::S]);
        let token = apply(&mut board, &step((1, 2), (2, 2)), CaptureRule::default()).expect("apply");

        let mut other = Board::starting();
        let before = other.clone();
        let err = undo(&mut other, token).expect_err("mismatched board");
        assert!(matches!(err, RulesError::InvalidState { .. }));
        assert_eq!(other, before);
    }

    #[test]
    fn test_capture_undo_rejects_defender_in_attacker_cell() {
        let mut board = Board::new();
        board.place_pod(Pos::new(3, 3), Player::First, &[Direction::E]);
        board.place_pod(Pos::new(3, 4), Player::Second, &[Direction::W]);
        let token = apply(&mut board, &step((3, 3), (3, 4)), CaptureRule::Overwrite).expect("apply");

        // Same shape, but the capturing cell now holds one of the defender's pods
        let mut other = Board::new();
        other.place_pod(Pos::new(3, 4), Player::Second, &[Direction::N]);
        let before = other.clone();
        let err = undo(&mut other, token).expect_err("wrong occupant");
        assert!(matches!(err, RulesError::InvalidState { .. }));
        assert_eq!(other, before);
    }

    #[test]
    fn test_every_starting_move_undoes() {
        let mut board = Board::starting();
        let before = board.clone();
        for mv in legal_moves_for(&board, Player::First) {
            let token = apply(&mut board, &mv, CaptureRule::default()).expect("apply");
            undo(&mut board, token).expect("undo");
            assert_eq!(board, before);
        }
    }
}
