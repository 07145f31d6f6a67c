//! Board structure with pod placement

use std::fmt;

use super::{Direction, Player, Pod, Pos, Prongs, BOARD_SIZE, TOTAL_CELLS};

/// Columns holding pods and bases at setup
const START_COLS: [u8; 4] = [2, 3, 4, 5];

/// Game board: every cell is empty or holds one pod
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Pod>; TOTAL_CELLS],
}

impl Board {
    /// Empty board
    pub fn new() -> Self {
        Self {
            cells: [None; TOTAL_CELLS],
        }
    }

    /// Standard setup: four bare pods per player on their base cells
    pub fn starting() -> Self {
        let mut board = Self::new();
        for player in Player::BOTH {
            for pos in board.bases_of(player) {
                board.place_pod(pos, player, &[]);
            }
        }
        board
    }

    /// Get the pod at a position
    #[inline]
    pub fn cell_at(&self, pos: Pos) -> Option<Pod> {
        self.cells[pos.to_index()]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.cells[pos.to_index()].is_none()
    }

    /// Owner of the pod at a position, if any
    #[inline]
    pub fn owner_at(&self, pos: Pos) -> Option<Player> {
        self.cells[pos.to_index()].map(|pod| pod.owner)
    }

    /// Place a pod. Overwrites any previous occupant; meant for setup.
    /// Duplicate directions in `prongs` are dropped.
    pub fn place_pod(&mut self, pos: Pos, player: Player, prongs: &[Direction]) {
        self.cells[pos.to_index()] = Some(Pod::new(player, Prongs::from_slice(prongs)));
    }

    /// Base cells of a player
    pub fn bases_of(&self, player: Player) -> [Pos; 4] {
        let row = player.start_row();
        START_COLS.map(|col| Pos::new(row, col))
    }

    /// Pods of a player in row-major order
    pub fn pods_of(&self, player: Player) -> impl Iterator<Item = (Pos, Pod)> + '_ {
        self.cells.iter().enumerate().filter_map(move |(idx, cell)| match cell {
            Some(pod) if pod.owner == player => Some((Pos::from_index(idx), *pod)),
            _ => None,
        })
    }

    #[inline]
    pub fn pod_count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|cell| matches!(cell, Some(pod) if pod.owner == player))
            .count()
    }

    /// Total pods on board
    #[inline]
    pub fn total_pods(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Remove and return the pod at a position (move application only)
    #[inline]
    pub(crate) fn take(&mut self, pos: Pos) -> Option<Pod> {
        self.cells[pos.to_index()].take()
    }

    /// Put a pod on a cell, returning the previous occupant (move application only)
    #[inline]
    pub(crate) fn put(&mut self, pos: Pos, pod: Pod) -> Option<Pod> {
        self.cells[pos.to_index()].replace(pod)
    }

    #[inline]
    pub(crate) fn pod_mut(&mut self, pos: Pos) -> Option<&mut Pod> {
        self.cells[pos.to_index()].as_mut()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders one row per line: `.` for empty, the owner index for a pod.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if col > 0 {
                    write!(f, " ")?;
                }
                match self.cell_at(Pos::new(row as u8, col as u8)) {
                    Some(pod) => write!(f, "{}", pod.owner.index())?,
                    None => write!(f, ".")?,
                }
            }
            if row + 1 < BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
