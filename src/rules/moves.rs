//! Move representation

use smallvec::SmallVec;

use crate::board::{Direction, Pos};

/// Landing cells of a jump chain, in order
pub type JumpPath = SmallVec<[Pos; 4]>;

/// A single logical turn
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Move {
    /// One cell along an active prong, onto an empty cell or an opposing pod
    Step { from: Pos, to: Pos },
    /// One or more two-cell hops over occupied midpoints; `path` is never empty
    Jump { from: Pos, path: JumpPath },
    /// Attach a new prong
    ProngAdd { at: Pos, direction: Direction },
}

impl Move {
    /// Cell of the pod that acts
    #[inline]
    pub fn origin(&self) -> Pos {
        match self {
            Move::Step { from, .. } | Move::Jump { from, .. } => *from,
            Move::ProngAdd { at, .. } => *at,
        }
    }

    /// Cell the acting pod targets: the step destination, the final jump
    /// landing, or the pod itself for a prong addition
    pub fn target(&self) -> Pos {
        match self {
            Move::Step { to, .. } => *to,
            Move::Jump { from, path } => path.last().copied().unwrap_or(*from),
            Move::ProngAdd { at, .. } => *at,
        }
    }

    /// Whether the move relocates a pod
    #[inline]
    pub fn is_relocation(&self) -> bool {
        !matches!(self, Move::ProngAdd { .. })
    }

    /// Convenience constructor for a jump chain
    pub fn jump(from: Pos, path: &[Pos]) -> Move {
        Move::Jump {
            from,
            path: JumpPath::from_slice(path),
        }
    }
}
