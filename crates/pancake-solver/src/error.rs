//! Error types for the pancake solver.

use thiserror::Error;

use crate::solver::Strategy;

/// Malformed problem description.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No pancakes were given
    #[error("empty stack description")]
    Empty,

    /// A size was not followed by an orientation letter
    #[error("missing orientation letter at position {position}")]
    MissingOrientation { position: usize },

    /// Orientation letter other than 'b' or 'w'
    #[error("unknown orientation '{found}' at position {position} (expected 'b' or 'w')")]
    UnknownOrientation { position: usize, found: char },

    /// Size token that is not a positive number
    #[error("invalid pancake size '{found}' at position {position}")]
    InvalidSize { position: usize, found: String },

    /// Sizes are not exactly 1..=N
    #[error("pancake sizes must be a permutation of 1..={expected}")]
    NotAPermutation { expected: usize },

    /// Problem string has no trailing mode token
    #[error("missing search mode (expected -a or -b)")]
    MissingMode,

    /// Mode token other than "-a" or "-b"
    #[error("unknown search mode '{0}' (expected -a or -b)")]
    UnknownMode(String),
}

/// Search that ended without reaching the goal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("{strategy} search exhausted the frontier after {expanded} expansions")]
    Exhausted { strategy: Strategy, expanded: usize },
}

/// Main error type for solver operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Search(#[from] SearchError),
}

/// Result type alias for solver operations
pub type Result<T> = std::result::Result<T, Error>;
