//! Arena of explored search nodes.
//!
//! Nodes are addressed by [`NodeId`]. Each node owns the ids of its children
//! and keeps a plain parent id for walking back to the root. A state is
//! attached at most once per expansion, so the parent links never form a
//! cycle. Nothing is removed until the tree is dropped.

use std::collections::HashMap;

use crate::flip::Flip;
use crate::stack::Stack;

/// Handle to a node in a [`SearchTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One explored stack and how it was reached.
#[derive(Debug, Clone)]
pub struct SearchNode {
    pub stack: Stack,
    /// `None` for the root
    pub parent: Option<NodeId>,
    /// Flip applied to the parent to produce this node
    pub flip: Option<Flip>,
    /// Sum of flip costs from the root (g)
    pub path_cost: u32,
    /// Children keyed by stack signature
    pub children: HashMap<String, NodeId>,
}

impl SearchNode {
    /// Cost of the edge from the parent; 0 for the root
    pub fn edge_cost(&self) -> u32 {
        self.flip.map(Flip::cost).unwrap_or(0)
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

#[derive(Debug, Default)]
pub struct SearchTree {
    nodes: Vec<SearchNode>,
}

impl SearchTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_root(&mut self, stack: Stack) -> NodeId {
        self.push(SearchNode {
            stack,
            parent: None,
            flip: None,
            path_cost: 0,
            children: HashMap::new(),
        })
    }

    /// Attach `stack` below `parent`, reached by `flip`.
    pub fn add_child(&mut self, parent: NodeId, flip: Flip, stack: Stack) -> NodeId {
        let path_cost = self.nodes[parent.0].path_cost + flip.cost();
        let signature = stack.signature();
        let id = self.push(SearchNode {
            stack,
            parent: Some(parent),
            flip: Some(flip),
            path_cost,
            children: HashMap::new(),
        });
        self.nodes[parent.0].children.insert(signature, id);
        id
    }

    fn push(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// # Panics
    /// If `id` came from a different tree.
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Ids from `id` up to and including the root
    pub fn path_to_root(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = vec![id];
        let mut current = id;
        while let Some(parent) = self.nodes[current.0].parent {
            path.push(parent);
            current = parent;
        }
        path
    }
}
