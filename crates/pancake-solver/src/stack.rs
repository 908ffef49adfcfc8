//! Pancake stack representation.
//!
//! A [`Stack`] is an immutable, ordered sequence of pancakes listed from the
//! top of the stack (index 0) down to the plate. Sizes always form a
//! permutation of `1..=N`; orientation is free per pancake.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use smallvec::SmallVec;

use crate::error::ParseError;

/// Which side of a pancake faces up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Burnt,
    White,
}

impl Orientation {
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'b' => Some(Orientation::Burnt),
            'w' => Some(Orientation::White),
            _ => None,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Orientation::Burnt => 'b',
            Orientation::White => 'w',
        }
    }

    /// Digit used by the tie-break encoding
    pub fn digit(self) -> char {
        match self {
            Orientation::Burnt => '0',
            Orientation::White => '1',
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Orientation::Burnt => Orientation::White,
            Orientation::White => Orientation::Burnt,
        }
    }
}

/// A single pancake: its size and which side is up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Pancake {
    pub size: u8,
    pub orientation: Orientation,
}

impl Pancake {
    pub fn new(size: u8, orientation: Orientation) -> Self {
        Self { size, orientation }
    }

    pub fn burnt(size: u8) -> Self {
        Self::new(size, Orientation::Burnt)
    }

    pub fn white(size: u8) -> Self {
        Self::new(size, Orientation::White)
    }

    /// The same pancake turned over
    pub fn toggled(self) -> Self {
        Self::new(self.size, self.orientation.toggled())
    }
}

impl fmt::Display for Pancake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.size, self.orientation.letter())
    }
}

/// Deterministic numeric ordering of stacks.
///
/// Holds the decimal digits of the signature with `b` mapped to 0 and `w`
/// to 1. Compared as an unbounded integer: sizes never start with a zero
/// digit, so a shorter digit string is always the smaller number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TieBreakKey(String);

impl TieBreakKey {
    pub fn digits(&self) -> &str {
        &self.0
    }

    /// Numeric value, when it fits
    pub fn to_u128(&self) -> Option<u128> {
        self.0.parse().ok()
    }
}

impl Ord for TieBreakKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for TieBreakKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for TieBreakKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One puzzle configuration, top of the stack first.
///
/// Equality and hashing agree with the canonical [`signature`](Stack::signature).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Stack {
    pub(crate) pancakes: SmallVec<[Pancake; 16]>,
}

impl Stack {
    /// Build a stack, checking that the sizes are a permutation of `1..=N`.
    pub fn new(pancakes: impl IntoIterator<Item = Pancake>) -> Result<Self, ParseError> {
        let pancakes: SmallVec<[Pancake; 16]> = pancakes.into_iter().collect();
        if pancakes.is_empty() {
            return Err(ParseError::Empty);
        }

        let n = pancakes.len();
        let mut seen = vec![false; n];
        for pancake in &pancakes {
            let size = pancake.size as usize;
            if size == 0 || size > n || seen[size - 1] {
                return Err(ParseError::NotAPermutation { expected: n });
            }
            seen[size - 1] = true;
        }

        Ok(Self { pancakes })
    }

    /// The solved stack of `n` pancakes: `1w2w..nw`
    pub fn goal(n: u8) -> Self {
        Self {
            pancakes: (1..=n).map(Pancake::white).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.pancakes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pancakes.is_empty()
    }

    pub fn pancakes(&self) -> &[Pancake] {
        &self.pancakes
    }

    pub fn get(&self, index: usize) -> Option<&Pancake> {
        self.pancakes.get(index)
    }

    /// Every position `i` holds size `i + 1`, white side up
    pub fn is_goal(&self) -> bool {
        self.pancakes
            .iter()
            .enumerate()
            .all(|(i, p)| p.size as usize == i + 1 && p.orientation == Orientation::White)
    }

    /// Canonical signature, e.g. `1b2w3b4w`
    pub fn signature(&self) -> String {
        self.to_string()
    }

    pub fn tie_break_key(&self) -> TieBreakKey {
        let mut digits = String::with_capacity(self.pancakes.len() * 2);
        for pancake in &self.pancakes {
            digits.push_str(&pancake.size.to_string());
            digits.push(pancake.orientation.digit());
        }
        TieBreakKey(digits)
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pancake in &self.pancakes {
            write!(f, "{}", pancake)?;
        }
        Ok(())
    }
}

impl Serialize for Stack {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parses `<size><b|w>` tokens, e.g. `1b2b3b4b`. Sizes may span several
/// digits for stacks larger than nine.
impl FromStr for Stack {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut pancakes = Vec::new();
        let mut chars = s.chars().peekable();

        while chars.peek().is_some() {
            let position = pancakes.len();

            let mut digits = String::new();
            while let Some(c) = chars.next_if(|c| c.is_ascii_digit()) {
                digits.push(c);
            }
            if digits.is_empty() {
                let found = chars.next().map(String::from).unwrap_or_default();
                return Err(ParseError::InvalidSize { position, found });
            }
            let size: u8 = match digits.parse() {
                Ok(size) if size > 0 => size,
                _ => {
                    return Err(ParseError::InvalidSize {
                        position,
                        found: digits,
                    })
                }
            };

            let orientation = match chars.next() {
                None => return Err(ParseError::MissingOrientation { position }),
                Some(letter) => Orientation::from_letter(letter).ok_or(
                    ParseError::UnknownOrientation {
                        position,
                        found: letter,
                    },
                )?,
            };

            pancakes.push(Pancake::new(size, orientation));
        }

        Stack::new(pancakes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_signature() {
        let stack: Stack = "3w1b2b4w".parse().unwrap();
        assert_eq!(stack.len(), 4);
        assert_eq!(stack.pancakes()[0], Pancake::white(3));
        assert_eq!(stack.pancakes()[1], Pancake::burnt(1));
        assert_eq!(stack.signature(), "3w1b2b4w");
    }

    #[test]
    fn test_parse_multi_digit_sizes() {
        let text = "10w9b8b7b6b5b4b3b2b1b11w";
        let stack: Stack = text.parse().unwrap();
        assert_eq!(stack.len(), 11);
        assert_eq!(stack.pancakes()[0].size, 10);
        assert_eq!(stack.signature(), text);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Stack>(), Err(ParseError::Empty));
        assert_eq!(
            "1b2".parse::<Stack>(),
            Err(ParseError::MissingOrientation { position: 1 })
        );
        assert_eq!(
            "1b2x".parse::<Stack>(),
            Err(ParseError::UnknownOrientation {
                position: 1,
                found: 'x'
            })
        );
        assert_eq!(
            "bb".parse::<Stack>(),
            Err(ParseError::InvalidSize {
                position: 0,
                found: "b".to_string()
            })
        );
        assert_eq!(
            "0b1w".parse::<Stack>(),
            Err(ParseError::InvalidSize {
                position: 0,
                found: "0".to_string()
            })
        );
        assert_eq!(
            "1b1w".parse::<Stack>(),
            Err(ParseError::NotAPermutation { expected: 2 })
        );
        assert_eq!(
            "1b3w".parse::<Stack>(),
            Err(ParseError::NotAPermutation { expected: 2 })
        );
    }

    #[test]
    fn test_goal() {
        let goal = Stack::goal(4);
        assert_eq!(goal.signature(), "1w2w3w4w");
        assert!(goal.is_goal());

        let flipped_bottom: Stack = "1w2w3w4b".parse().unwrap();
        assert!(!flipped_bottom.is_goal());

        let misplaced: Stack = "2w1w3w4w".parse().unwrap();
        assert!(!misplaced.is_goal());
    }

    #[test]
    fn test_tie_break_key() {
        let stack: Stack = "1b2b3b4b".parse().unwrap();
        assert_eq!(stack.tie_break_key().digits(), "10203040");
        assert_eq!(stack.tie_break_key().to_u128(), Some(10203040));

        let white: Stack = "1w2w3w4w".parse().unwrap();
        assert_eq!(white.tie_break_key().to_u128(), Some(11213141));
        assert!(stack.tie_break_key() < white.tie_break_key());
    }

    #[test]
    fn test_tie_break_key_orders_numerically() {
        let short = TieBreakKey("99".to_string());
        let long = TieBreakKey("100".to_string());
        assert!(short < long);
    }

    #[test]
    fn test_equality_follows_signature() {
        let a: Stack = "2w1b".parse().unwrap();
        let b = Stack::new([Pancake::white(2), Pancake::burnt(1)]).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.signature(), b.signature());
    }

    #[test]
    fn test_serialize_as_signature() {
        let stack: Stack = "2w1b".parse().unwrap();
        assert_eq!(serde_json::to_string(&stack).unwrap(), "\"2w1b\"");
    }
}
