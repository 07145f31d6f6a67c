//! Win conditions
//!
//! A player wins by landing a pod on the opponent's home row, or by
//! leaving the opponent with no pods.

use crate::board::{Board, Player, Pos};

/// Whether a pod of `player` landing on `pos` wins the match
#[inline]
pub fn reaches_goal(player: Player, pos: Pos) -> bool {
    pos.row == player.goal_row()
}

/// Whether `player` has no pods left
#[inline]
pub fn is_eliminated(board: &Board, player: Player) -> bool {
    board.pods_of(player).next().is_none()
}

/// Winner implied by the board alone, if any.
///
/// Used by the search to stop at terminal nodes. A pod on its goal row is
/// checked before elimination, matching the order of the turn check.
pub fn winner_on_board(board: &Board) -> Option<Player> {
    for player in Player::BOTH {
        if board.pods_of(player).any(|(pos, _)| reaches_goal(player, pos)) {
            return Some(player);
        }
    }
    for player in Player::BOTH {
        if is_eliminated(board, player.opponent()) && !is_eliminated(board, player) {
            return Some(player);
        }
    }
    None
}
