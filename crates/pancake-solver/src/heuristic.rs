//! Heuristic used by best-first search.

use crate::stack::Stack;

/// Size of the largest pancake that is not in its goal position.
///
/// Scans from the plate upward and stops at the first position whose
/// pancake has the wrong size. Orientation is not examined, so a stack
/// sorted by size scores 0 even if some pancakes are burnt side up.
pub fn largest_out_of_place(stack: &Stack) -> u32 {
    stack
        .pancakes()
        .iter()
        .enumerate()
        .rev()
        .find(|(i, pancake)| pancake.size as usize != i + 1)
        .map(|(i, _)| i as u32 + 1)
        .unwrap_or(0)
}
