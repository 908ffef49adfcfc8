//! Breadth-first and best-first (A*) search over pancake stacks.
//!
//! Both strategies share one expansion loop:
//!
//! 1. pop a node from the frontier, skipping it if its stack is already closed
//! 2. close it; if it is the goal, rebuild the path and stop
//! 3. otherwise generate all `N` flips, drop successors that are closed,
//!    attach the rest to the search tree and hand them to the frontier
//!
//! Breadth-first search minimizes the number of flips, not their total cost.
//! Best-first search orders by `g + h` and never reopens a closed stack,
//! even if a cheaper path to it turns up later.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{ParseError, SearchError};
use crate::flip::successors;
use crate::frontier::{FifoFrontier, Frontier, PriorityFrontier};
use crate::stack::Stack;
use crate::trace::Trace;
use crate::tree::{NodeId, SearchTree};

/// Search strategy. There is no default; callers must choose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    BreadthFirst,
    BestFirst,
}

impl Strategy {
    /// Mode token used in problem descriptions
    pub fn mode_token(self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "-b",
            Strategy::BestFirst => "-a",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::BreadthFirst => f.write_str("breadth-first"),
            Strategy::BestFirst => f.write_str("best-first"),
        }
    }
}

/// Parses a mode token: `-a` for best-first, `-b` for breadth-first.
impl FromStr for Strategy {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "-a" => Ok(Strategy::BestFirst),
            "-b" => Ok(Strategy::BreadthFirst),
            "" => Err(ParseError::MissingMode),
            other => Err(ParseError::UnknownMode(other.to_string())),
        }
    }
}

/// Configuration for a solver run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    pub strategy: Strategy,
    /// Append `g` and `h` to each rendered line
    pub show_costs: bool,
}

impl SolverConfig {
    /// Costs are shown for best-first search and hidden for breadth-first.
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            show_costs: strategy == Strategy::BestFirst,
        }
    }

    pub fn with_costs(mut self, show_costs: bool) -> Self {
        self.show_costs = show_costs;
        self
    }
}

/// Counters collected during one search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStats {
    /// Nodes popped and closed
    pub expanded: usize,
    /// Nodes attached to the search tree, root included
    pub generated: usize,
    /// Popped entries whose stack had already been closed
    pub skipped: usize,
    pub max_frontier: usize,
    pub elapsed_ms: u64,
}

/// A solved search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    pub strategy: Strategy,
    pub trace: Trace,
    pub stats: SearchStats,
}

impl Solution {
    pub fn move_count(&self) -> usize {
        self.trace.move_count()
    }

    pub fn total_cost(&self) -> u32 {
        self.trace.total_cost()
    }

    pub fn render(&self, show_costs: bool) -> String {
        self.trace.render(show_costs)
    }
}

/// Uninformed search with a FIFO frontier.
pub fn search_breadth_first(start: &Stack) -> Result<Solution, SearchError> {
    run(
        start,
        Strategy::BreadthFirst,
        FifoFrontier::new(),
        Stack::is_goal,
    )
}

/// A* search ordered by `(g + h, tie-break key)`.
pub fn search_best_first(start: &Stack) -> Result<Solution, SearchError> {
    run(
        start,
        Strategy::BestFirst,
        PriorityFrontier::new(),
        Stack::is_goal,
    )
}

/// Run the strategy named in `config`.
pub fn solve(start: &Stack, config: &SolverConfig) -> Result<Solution, SearchError> {
    match config.strategy {
        Strategy::BreadthFirst => search_breadth_first(start),
        Strategy::BestFirst => search_best_first(start),
    }
}

pub(crate) fn run<F, G>(
    start: &Stack,
    strategy: Strategy,
    mut frontier: F,
    is_goal: G,
) -> Result<Solution, SearchError>
where
    F: Frontier,
    G: Fn(&Stack) -> bool,
{
    let start_time = Instant::now();
    info!(
        event = "search_start",
        strategy = %strategy,
        start = %start,
        pancakes = start.len(),
    );

    let mut tree = SearchTree::new();
    let mut closed: HashSet<String> = HashSet::new();
    let mut stats = SearchStats::default();

    let root = tree.add_root(start.clone());
    frontier.push_batch(vec![root], &tree);
    stats.generated = 1;
    stats.max_frontier = 1;

    while let Some(id) = frontier.pop() {
        let stack = tree.get(id).stack.clone();
        if !closed.insert(stack.signature()) {
            stats.skipped += 1;
            continue;
        }
        stats.expanded += 1;

        if is_goal(&stack) {
            stats.elapsed_ms = start_time.elapsed().as_millis() as u64;
            let trace = Trace::reconstruct(&tree, id);
            info!(
                event = "search_end",
                strategy = %strategy,
                moves = trace.move_count(),
                cost = trace.total_cost(),
                expanded = stats.expanded,
                generated = stats.generated,
                duration_ms = stats.elapsed_ms,
            );
            return Ok(Solution {
                strategy,
                trace,
                stats,
            });
        }

        let batch: Vec<NodeId> = successors(&stack)
            .into_iter()
            .filter(|(_, next)| !closed.contains(&next.signature()))
            .map(|(flip, next)| tree.add_child(id, flip, next))
            .collect();

        debug!(
            event = "expand",
            node = id.index(),
            stack = %stack,
            g = tree.get(id).path_cost,
            successors = batch.len(),
        );

        stats.generated += batch.len();
        frontier.push_batch(batch, &tree);
        stats.max_frontier = stats.max_frontier.max(frontier.len());
    }

    stats.elapsed_ms = start_time.elapsed().as_millis() as u64;
    warn!(
        event = "search_exhausted",
        strategy = %strategy,
        expanded = stats.expanded,
        duration_ms = stats.elapsed_ms,
    );
    Err(SearchError::Exhausted {
        strategy,
        expanded: stats.expanded,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack(s: &str) -> Stack {
        s.parse().unwrap()
    }

    #[test]
    fn test_strategy_from_mode_token() {
        assert_eq!("-a".parse::<Strategy>(), Ok(Strategy::BestFirst));
        assert_eq!("-b".parse::<Strategy>(), Ok(Strategy::BreadthFirst));
        assert_eq!("".parse::<Strategy>(), Err(ParseError::MissingMode));
        assert_eq!(
            "-x".parse::<Strategy>(),
            Err(ParseError::UnknownMode("-x".to_string()))
        );
        assert_eq!(Strategy::BestFirst.mode_token(), "-a");
    }

    #[test]
    fn test_config_cost_display_follows_strategy() {
        assert!(SolverConfig::new(Strategy::BestFirst).show_costs);
        assert!(!SolverConfig::new(Strategy::BreadthFirst).show_costs);
        assert!(
            SolverConfig::new(Strategy::BreadthFirst)
                .with_costs(true)
                .show_costs
        );
    }

    #[test]
    fn test_already_solved() {
        for solution in [
            search_breadth_first(&Stack::goal(4)).unwrap(),
            search_best_first(&Stack::goal(4)).unwrap(),
        ] {
            assert_eq!(solution.render(true), "1w2w3w4w g:0, h:0");
            assert_eq!(solution.stats.expanded, 1);
            assert_eq!(solution.move_count(), 0);
        }
    }

    #[test]
    fn test_single_pancake() {
        let solution = search_breadth_first(&stack("1b")).unwrap();
        assert_eq!(solution.render(false), "1b|\n1w");
        assert_eq!(solution.total_cost(), 1);
    }

    #[test]
    fn test_two_pancakes() {
        let bfs = search_breadth_first(&stack("2b1w")).unwrap();
        let astar = search_best_first(&stack("2b1w")).unwrap();
        assert_eq!(bfs.render(true), "2b1w| g:0, h:2\n1b|2w g:2, h:0\n1w2w g:3, h:0");
        assert_eq!(astar.trace, bfs.trace);
        assert_eq!(astar.strategy, Strategy::BestFirst);
    }

    #[test]
    fn test_solve_dispatches_on_strategy() {
        let start = stack("3w1b2b4w");
        let config = SolverConfig::new(Strategy::BestFirst);
        let solution = solve(&start, &config).unwrap();
        assert_eq!(solution.strategy, Strategy::BestFirst);
        assert_eq!(solution.total_cost(), 8);
    }

    #[test]
    fn test_exhaustion_is_reported() {
        // No stack satisfies the goal, so every reachable state gets closed:
        // 2! orders times 2^2 orientations
        let result = run(
            &stack("2b1w"),
            Strategy::BreadthFirst,
            FifoFrontier::new(),
            |_| false,
        );
        assert_eq!(
            result,
            Err(SearchError::Exhausted {
                strategy: Strategy::BreadthFirst,
                expanded: 8,
            })
        );

        let result = run(
            &stack("1b2b3b"),
            Strategy::BestFirst,
            PriorityFrontier::new(),
            |_| false,
        );
        assert_eq!(
            result,
            Err(SearchError::Exhausted {
                strategy: Strategy::BestFirst,
                expanded: 48,
            })
        );
    }

    #[test]
    fn test_stats_are_consistent() {
        let solution = search_best_first(&stack("4b3w2b1w")).unwrap();
        let stats = &solution.stats;
        assert!(stats.expanded >= solution.trace.len());
        assert!(stats.generated >= stats.expanded);
        assert!(stats.max_frontier >= 1);
    }
}
