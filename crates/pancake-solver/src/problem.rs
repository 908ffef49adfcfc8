//! Problem descriptions such as `1b2b3b4b-a`.
//!
//! A description is the start stack followed by a mode token: `-a` selects
//! best-first (A*) search and `-b` breadth-first search. The mode is
//! required.

use std::str::FromStr;

use crate::error::{Error, ParseError};
use crate::solver::{solve, Solution, SolverConfig, Strategy};
use crate::stack::Stack;

/// A start stack paired with the search to run on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub stack: Stack,
    pub strategy: Strategy,
}

impl Problem {
    pub fn new(stack: Stack, strategy: Strategy) -> Self {
        Self { stack, strategy }
    }

    /// Solver configuration with the strategy's default cost display
    pub fn config(&self) -> SolverConfig {
        SolverConfig::new(self.strategy)
    }

    pub fn solve(&self) -> Result<Solution, Error> {
        Ok(solve(&self.stack, &self.config())?)
    }
}

impl FromStr for Problem {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (stack_text, mode) = match s.rfind('-') {
            Some(split) => s.split_at(split),
            None if s.is_empty() => return Err(ParseError::Empty),
            None => return Err(ParseError::MissingMode),
        };
        let strategy: Strategy = mode.parse()?;
        let stack: Stack = stack_text.parse()?;
        Ok(Self { stack, strategy })
    }
}
