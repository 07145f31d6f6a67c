//! Pods and their prong sets

use std::hash::{Hash, Hasher};

use super::{Direction, Player};

/// Set of active prongs, kept in attachment order.
///
/// Order matters: a capture strips the most recently attached prong, and
/// undo must put a pod back with its prongs in the same order.
#[derive(Debug, Clone, Copy)]
pub struct Prongs {
    dirs: [Direction; 4],
    len: u8,
}

impl Prongs {
    #[inline]
    pub const fn new() -> Self {
        Self {
            dirs: [Direction::N; 4],
            len: 0,
        }
    }

    /// Build from a slice, dropping duplicates (first occurrence wins)
    pub fn from_slice(dirs: &[Direction]) -> Self {
        let mut prongs = Self::new();
        for &dir in dirs {
            prongs.push(dir);
        }
        prongs
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[Direction] {
        &self.dirs[..self.len as usize]
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        self.as_slice().iter().copied()
    }

    #[inline]
    pub fn contains(&self, dir: Direction) -> bool {
        self.as_slice().contains(&dir)
    }

    /// Directions that could still be attached, in canonical order
    pub fn missing(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.into_iter().filter(|&d| !self.contains(d))
    }

    /// Attach a prong. Returns false if it is already present.
    pub fn push(&mut self, dir: Direction) -> bool {
        if self.contains(dir) {
            return false;
        }
        debug_assert!(self.len < 4);
        self.dirs[self.len as usize] = dir;
        self.len += 1;
        true
    }

    /// Detach the most recently attached prong
    pub fn pop(&mut self) -> Option<Direction> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let dir = self.dirs[self.len as usize];
        self.dirs[self.len as usize] = Direction::N;
        Some(dir)
    }

    #[inline]
    pub fn last(&self) -> Option<Direction> {
        self.as_slice().last().copied()
    }
}

impl Default for Prongs {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Prongs {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for Prongs {}

impl Hash for Prongs {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

/// A player's piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pod {
    pub owner: Player,
    pub prongs: Prongs,
}

impl Pod {
    #[inline]
    pub fn new(owner: Player, prongs: Prongs) -> Self {
        Self { owner, prongs }
    }

    #[inline]
    pub fn bare(owner: Player) -> Self {
        Self::new(owner, Prongs::new())
    }

    #[inline]
    pub fn has_prong(&self, dir: Direction) -> bool {
        self.prongs.contains(dir)
    }
}
