//! Game rules for Octi
//!
//! This module implements the rule set:
//! - Move representation and textual encoding
//! - Legal move generation (steps, captures, jump chains, prong additions)
//! - Move application with exact undo
//! - Win conditions (goal row, elimination)

pub mod apply;
pub mod movegen;
pub mod moves;
pub mod notation;
pub mod win;

// Re-exports for convenient access
pub use apply::{apply, undo, CaptureRule, UndoToken};
pub use movegen::{has_legal_moves, is_legal, legal_moves_for};
pub use moves::{JumpPath, Move};
pub use win::{is_eliminated, reaches_goal, winner_on_board};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Player};
    use proptest::prelude::*;

    /// Play a pseudo-random game from the start, picking moves by index
    fn playout(choices: &[u16], rule: CaptureRule) -> (Board, Player) {
        let mut board = Board::starting();
        let mut player = Player::First;
        for &choice in choices {
            if winner_on_board(&board).is_some() {
                break;
            }
            let moves = legal_moves_for(&board, player);
            if moves.is_empty() {
                break;
            }
            let mv = &moves[choice as usize % moves.len()];
            apply(&mut board, mv, rule).expect("legal move applies");
            player = player.opponent();
        }
        (board, player)
    }

    fn rule_strategy() -> impl Strategy<Value = CaptureRule> {
        prop_oneof![Just(CaptureRule::Overwrite), Just(CaptureRule::Strict)]
    }

    proptest! {
        #[test]
        fn undo_is_exact_inverse(choices in prop::collection::vec(any::<u16>(), 0..60), rule in rule_strategy()) {
            let (mut board, player) = playout(&choices, rule);
            let before = board.clone();
            for mv in legal_moves_for(&before, player) {
                let token = apply(&mut board, &mv, rule).expect("apply");
                undo(&mut board, token).expect("undo");
                prop_assert_eq!(&board, &before);
            }
        }

        #[test]
        fn pod_count_conservation(choices in prop::collection::vec(any::<u16>(), 0..60), rule in rule_strategy()) {
            let (board, player) = playout(&choices, rule);
            let total = board.total_pods();
            for mv in legal_moves_for(&board, player) {
                let mut next = board.clone();
                let defender = match &mv {
                    Move::Step { to, .. } => board.cell_at(*to),
                    _ => None,
                };
                apply(&mut next, &mv, rule).expect("apply");
                match defender {
                    None => prop_assert_eq!(next.total_pods(), total),
                    Some(def) => {
                        let lost = total - next.total_pods();
                        prop_assert!(lost <= 1);
                        if rule == CaptureRule::Strict {
                            prop_assert_eq!(lost == 1, def.prongs.len() <= 1);
                        }
                    }
                }
            }
        }

        #[test]
        fn prongs_stay_unique(choices in prop::collection::vec(any::<u16>(), 0..80), rule in rule_strategy()) {
            let (board, player) = playout(&choices, rule);
            for p in Player::BOTH {
                for (_, pod) in board.pods_of(p) {
                    let dirs = pod.prongs.as_slice();
                    for (i, d) in dirs.iter().enumerate() {
                        prop_assert!(!dirs[i + 1..].contains(d));
                    }
                }
            }
            for mv in legal_moves_for(&board, player) {
                if let Move::ProngAdd { at, direction } = mv {
                    let pod = board.cell_at(at).expect("pod");
                    prop_assert!(!pod.has_prong(direction));
                }
            }
        }

        #[test]
        fn jumps_never_capture(choices in prop::collection::vec(any::<u16>(), 0..60), rule in rule_strategy()) {
            let (board, player) = playout(&choices, rule);
            for mv in legal_moves_for(&board, player) {
                let Move::Jump { from, path } = &mv else { continue };
                let mut next = board.clone();
                apply(&mut next, &mv, rule).expect("apply");
                let mut at = *from;
                for &landing in path {
                    let mid = crate::board::Pos::new(
                        ((at.row as u16 + landing.row as u16) / 2) as u8,
                        ((at.col as u16 + landing.col as u16) / 2) as u8,
                    );
                    prop_assert!(board.cell_at(mid).is_some());
                    prop_assert_eq!(next.cell_at(mid), board.cell_at(mid));
                    at = landing;
                }
            }
        }
    }
}
