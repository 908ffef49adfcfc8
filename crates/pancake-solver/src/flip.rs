//! Prefix flips: the only move in the burnt pancake puzzle.
//!
//! Flipping at index `k` reverses the top `k + 1` pancakes and turns each of
//! them over. The move costs `k + 1`. Applying the same flip twice restores
//! the starting stack.

use std::fmt;

use serde::Serialize;

use crate::stack::Stack;

/// A flip of the prefix `[0, index]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Flip {
    pub index: usize,
}

impl Flip {
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    /// Number of pancakes moved
    pub fn cost(self) -> u32 {
        self.index as u32 + 1
    }

    /// Position of the spatula: the boundary just below the flipped prefix
    pub fn boundary(self) -> usize {
        self.index + 1
    }
}

impl fmt::Display for Flip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "flip {}", self.boundary())
    }
}

impl Stack {
    /// New stack with the prefix `[0, flip.index]` reversed and turned over.
    ///
    /// # Panics
    /// If `flip.index` is not a valid position in the stack.
    pub fn flipped(&self, flip: Flip) -> Stack {
        let mut pancakes = self.pancakes.clone();
        let prefix = &mut pancakes[..flip.boundary()];
        prefix.reverse();
        for pancake in prefix.iter_mut() {
            *pancake = pancake.toggled();
        }
        Stack { pancakes }
    }

    /// Every flip that is legal on this stack, smallest first
    pub fn flips(&self) -> impl Iterator<Item = Flip> {
        (0..self.len()).map(Flip::new)
    }
}

/// All `N` successors of a stack, in flip-index order.
///
/// Nothing is filtered here; visited states are dropped by the search.
pub fn successors(stack: &Stack) -> Vec<(Flip, Stack)> {
    stack
        .flips()
        .map(|flip| (flip, stack.flipped(flip)))
        .collect()
}
