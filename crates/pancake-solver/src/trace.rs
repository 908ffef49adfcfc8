//! Turning a goal node into an ordered, printable solution.
//!
//! Each rendered line is one stack on the path from the start to the goal.
//! A `|` marks the spatula position of the flip that produces the next
//! line; the goal line carries no marker. With costs enabled each line ends
//! in ` g:<g>, h:<h>`.

use std::fmt;

use serde::Serialize;

use crate::flip::Flip;
use crate::heuristic::largest_out_of_place;
use crate::stack::Stack;
use crate::tree::{NodeId, SearchTree};

/// Spatula marker inserted into rendered stacks
pub const SPATULA: char = '|';

/// One stack on the solution path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceStep {
    pub stack: Stack,
    /// Cost of the path from the start to this stack
    pub g: u32,
    /// Heuristic estimate for this stack
    pub h: u32,
    /// Flip that leads to the next step, `None` on the last step
    pub next_flip: Option<Flip>,
}

impl TraceStep {
    /// Stack tokens with the spatula marker, without costs
    pub fn render_stack(&self) -> String {
        let mut line = String::new();
        for (i, pancake) in self.stack.pancakes().iter().enumerate() {
            if self.next_flip.map(Flip::boundary) == Some(i) {
                line.push(SPATULA);
            }
            line.push_str(&pancake.to_string());
        }
        if self.next_flip.map(Flip::boundary) == Some(self.stack.len()) {
            line.push(SPATULA);
        }
        line
    }

    pub fn render(&self, show_costs: bool) -> String {
        if show_costs {
            format!("{} g:{}, h:{}", self.render_stack(), self.g, self.h)
        } else {
            self.render_stack()
        }
    }
}

/// Ordered path from the start stack to the goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trace {
    pub steps: Vec<TraceStep>,
}

impl Trace {
    /// Walk parent links from `goal` back to the root and lay the path out
    /// start first. `g` is summed from the edge costs and `h` is recomputed.
    pub fn reconstruct(tree: &SearchTree, goal: NodeId) -> Self {
        let mut path = tree.path_to_root(goal);
        path.reverse();

        let mut steps = Vec::with_capacity(path.len());
        let mut g = 0;
        for (i, &id) in path.iter().enumerate() {
            let node = tree.get(id);
            g += node.edge_cost();
            let next_flip = path.get(i + 1).and_then(|&next| tree.get(next).flip);
            steps.push(TraceStep {
                stack: node.stack.clone(),
                g,
                h: largest_out_of_place(&node.stack),
                next_flip,
            });
        }

        Self { steps }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of flips performed
    pub fn move_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Final cumulative `g`
    pub fn total_cost(&self) -> u32 {
        self.steps.last().map(|step| step.g).unwrap_or(0)
    }

    pub fn flips(&self) -> Vec<Flip> {
        self.steps.iter().filter_map(|step| step.next_flip).collect()
    }

    pub fn lines(&self, show_costs: bool) -> Vec<String> {
        self.steps.iter().map(|step| step.render(show_costs)).collect()
    }

    pub fn render(&self, show_costs: bool) -> String {
        self.lines(show_costs).join("\n")
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false))
    }
}
