//! Open-set structures for the two search strategies.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use crate::heuristic::largest_out_of_place;
use crate::stack::TieBreakKey;
use crate::tree::{NodeId, SearchTree};

/// Generated but not yet expanded nodes.
pub trait Frontier {
    /// Insert the surviving successors of one expansion.
    fn push_batch(&mut self, batch: Vec<NodeId>, tree: &SearchTree);

    /// Remove the next node to expand.
    fn pop(&mut self) -> Option<NodeId>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Strict first-in first-out queue for breadth-first search.
///
/// Each batch of siblings is ordered by tie-break key before it is queued.
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<NodeId>,
}

impl FifoFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for FifoFrontier {
    fn push_batch(&mut self, mut batch: Vec<NodeId>, tree: &SearchTree) {
        batch.sort_by_cached_key(|&id| tree.get(id).stack.tie_break_key());
        self.queue.extend(batch);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Frontier entry ordered by `(f, tie-break key, insertion order)`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ScoredNode {
    f: u32,
    key: TieBreakKey,
    seq: u64,
    node: NodeId,
}

// Min-heap: reversed so BinaryHeap pops the smallest entry
impl Ord for ScoredNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.key.cmp(&self.key))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for ScoredNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority queue for best-first (A*) search.
///
/// Pops the node with the lowest `f = g + h`, then the lowest tie-break key.
/// Entries with identical keys come out in insertion order, the same order a
/// stable full re-sort of the open list would give.
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    heap: BinaryHeap<ScoredNode>,
    next_seq: u64,
}

impl PriorityFrontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: NodeId, tree: &SearchTree) {
        let search_node = tree.get(node);
        let f = search_node.path_cost + largest_out_of_place(&search_node.stack);
        let key = search_node.stack.tie_break_key();
        self.heap.push(ScoredNode {
            f,
            key,
            seq: self.next_seq,
            node,
        });
        self.next_seq += 1;
    }
}

impl Frontier for PriorityFrontier {
    fn push_batch(&mut self, batch: Vec<NodeId>, tree: &SearchTree) {
        for node in batch {
            self.push(node, tree);
        }
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|entry| entry.node)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flip::Flip;
    use crate::stack::Stack;

    fn stack(s: &str) -> Stack {
        s.parse().unwrap()
    }

    #[test]
    fn test_fifo_sorts_siblings_by_tie_break() {
        let mut tree = SearchTree::new();
        let root = tree.add_root(stack("1b2b"));
        let a = tree.add_child(root, Flip::new(0), stack("1w2b"));
        let b = tree.add_child(root, Flip::new(1), stack("2w1w"));

        let mut frontier = FifoFrontier::new();
        frontier.push_batch(vec![b, a], &tree);
        // 1120 < 2111
        assert_eq!(frontier.pop(), Some(a));
        assert_eq!(frontier.pop(), Some(b));
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_fifo_keeps_batches_in_order() {
        let mut tree = SearchTree::new();
        let root = tree.add_root(stack("2w1w"));
        let later = tree.add_child(root, Flip::new(1), stack("1b2b"));
        let earlier = tree.add_child(root, Flip::new(0), stack("2b1w"));

        let mut frontier = FifoFrontier::new();
        frontier.push_batch(vec![earlier], &tree);
        frontier.push_batch(vec![later], &tree);
        assert_eq!(frontier.pop(), Some(earlier));
        assert_eq!(frontier.pop(), Some(later));
    }

    #[test]
    fn test_priority_pops_lowest_f() {
        let mut tree = SearchTree::new();
        let root = tree.add_root(stack("2w1w3w"));
        // g = 3, h = 3
        let far = tree.add_child(root, Flip::new(2), stack("3b1b2b"));
        // g = 1, h = 2
        let near = tree.add_child(root, Flip::new(0), stack("2b1w3w"));

        let mut frontier = PriorityFrontier::new();
        frontier.push_batch(vec![far, near], &tree);
        assert_eq!(frontier.pop(), Some(near));
        assert_eq!(frontier.pop(), Some(far));
    }

    #[test]
    fn test_priority_ties_use_tie_break_key() {
        let mut tree = SearchTree::new();
        let root = tree.add_root(stack("1w2w"));
        // g = 1 and h = 0 for both
        let white = tree.add_child(root, Flip::new(0), stack("1w2b"));
        let burnt = tree.add_child(root, Flip::new(0), stack("1b2b"));

        let mut frontier = PriorityFrontier::new();
        frontier.push(white, &tree);
        frontier.push(burnt, &tree);
        assert_eq!(frontier.pop(), Some(burnt));
        assert_eq!(frontier.pop(), Some(white));
    }

    #[test]
    fn test_priority_identical_keys_pop_in_insertion_order() {
        let mut tree = SearchTree::new();
        let root = tree.add_root(stack("1w2w"));
        let first = tree.add_child(root, Flip::new(0), stack("1b2w"));
        let second = tree.add_child(root, Flip::new(0), stack("1b2w"));

        let mut frontier = PriorityFrontier::new();
        frontier.push(first, &tree);
        frontier.push(second, &tree);
        assert_eq!(frontier.len(), 2);
        assert_eq!(frontier.pop(), Some(first));
        assert_eq!(frontier.pop(), Some(second));
    }
}
