//! Legal move generation
//!
//! This is the only place reachability is computed. The game engine, the
//! search and the GUI all go through [`legal_moves_for`].
//!
//! Per pod, in row-major pod order, moves are emitted as:
//! 1. steps along each active prong (attachment order), including capture steps
//! 2. jump chains, depth-first, every prefix of a chain being its own move
//! 3. prong additions for each missing direction (N, S, E, W order)

use crate::board::{Board, Player, Pod, Pos, TOTAL_CELLS};

use super::moves::{JumpPath, Move};

/// The eight double-step displacements: orthogonal first, then diagonal
const JUMP_OFFSETS: [(i32, i32); 8] = [
    (-2, 0),
    (2, 0),
    (0, 2),
    (0, -2),
    (-2, 2),
    (-2, -2),
    (2, 2),
    (2, -2),
];

/// Enumerate every legal move for `player`.
///
/// Derived fresh from the board on every call.
pub fn legal_moves_for(board: &Board, player: Player) -> Vec<Move> {
    let mut moves = Vec::new();
    for (pos, pod) in board.pods_of(player) {
        push_steps(board, pos, &pod, &mut moves);
        push_jumps(board, pos, &mut moves);
        moves.extend(pod.prongs.missing().map(|direction| Move::ProngAdd { at: pos, direction }));
    }
    moves
}

/// Check whether `mv` is legal for `player` on this board
pub fn is_legal(board: &Board, player: Player, mv: &Move) -> bool {
    // Caller-built positions may lie off the board; reject before indexing
    let on_board = match mv {
        Move::Step { from, to } => from.on_board() && to.on_board(),
        Move::Jump { from, path } => from.on_board() && path.iter().all(|p| p.on_board()),
        Move::ProngAdd { at, .. } => at.on_board(),
    };
    if !on_board || board.owner_at(mv.origin()) != Some(player) {
        return false;
    }
    legal_moves_for(board, player).contains(mv)
}

/// Whether `player` has at least one legal move
pub fn has_legal_moves(board: &Board, player: Player) -> bool {
    board.pods_of(player).any(|(pos, pod)| {
        let mut moves = Vec::new();
        push_steps(board, pos, &pod, &mut moves);
        if !moves.is_empty() || pod.prongs.missing().next().is_some() {
            return true;
        }
        push_jumps(board, pos, &mut moves);
        !moves.is_empty()
    })
}

fn push_steps(board: &Board, from: Pos, pod: &Pod, out: &mut Vec<Move>) {
    for dir in pod.prongs.iter() {
        let Some(to) = from.step(dir) else {
            continue;
        };
        match board.owner_at(to) {
            None => out.push(Move::Step { from, to }),
            // Capture: the defender's own prongs never block
            Some(owner) if owner != pod.owner => out.push(Move::Step { from, to }),
            Some(_) => {}
        }
    }
}

fn push_jumps(board: &Board, from: Pos, out: &mut Vec<Move>) {
    let mut visited = [false; TOTAL_CELLS];
    visited[from.to_index()] = true;
    let mut path = JumpPath::new();
    extend_jumps(board, from, from, &mut path, &mut visited, out);
}

/// Depth-first chain extension. A landing cell already reached from this
/// origin is never revisited, which bounds the chains per pod.
///
/// The jumping pod still sits on its origin during generation. That cell can
/// never be a midpoint: landings share the origin's parity, midpoints don't.
fn extend_jumps(
    board: &Board,
    origin: Pos,
    at: Pos,
    path: &mut JumpPath,
    visited: &mut [bool; TOTAL_CELLS],
    out: &mut Vec<Move>,
) {
    for (dr, dc) in JUMP_OFFSETS {
        let Some(landing) = at.offset(dr, dc) else {
            continue;
        };
        let Some(mid) = at.offset(dr / 2, dc / 2) else {
            continue;
        };
        if visited[landing.to_index()] || board.is_empty(mid) || !board.is_empty(landing) {
            continue;
        }

        visited[landing.to_index()] = true;
        path.push(landing);
        out.push(Move::Jump {
            from: origin,
            path: path.clone(),
        });
        extend_jumps(board, origin, landing, path, visited, out);
        path.pop();
    }
}
