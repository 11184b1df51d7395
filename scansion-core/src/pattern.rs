//! Syllable patterns

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PatternError;

/// The canonical haiku pattern
pub const HAIKU: [u32; 3] = [5, 7, 5];

/// An ordered, non-empty sequence of positive syllable targets
///
/// Each element is the syllable budget of one output group. The sum of all
/// elements is computed once at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct Pattern {
    elements: Vec<u32>,
    sum: usize,
}

impl Pattern {
    /// Create a pattern, rejecting empty input and zero elements
    pub fn new(elements: Vec<u32>) -> Result<Self, PatternError> {
        if elements.is_empty() {
            return Err(PatternError::Empty);
        }
        if let Some(position) = elements.iter().position(|&e| e == 0) {
            return Err(PatternError::ZeroElement { position });
        }

        let sum = elements.iter().map(|&e| e as usize).sum();
        Ok(Self { elements, sum })
    }

    /// The 5-7-5 haiku pattern
    pub fn haiku() -> Self {
        Self {
            elements: HAIKU.to_vec(),
            sum: HAIKU.iter().map(|&e| e as usize).sum(),
        }
    }

    /// Pattern elements in order
    pub fn elements(&self) -> &[u32] {
        &self.elements
    }

    /// Number of groups a match produces
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True for a pattern with no elements, which `new` never builds
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Total syllable budget
    pub fn sum(&self) -> usize {
        self.sum
    }
}

impl TryFrom<Vec<u32>> for Pattern {
    type Error = PatternError;

    fn try_from(elements: Vec<u32>) -> Result<Self, Self::Error> {
        Self::new(elements)
    }
}

impl From<Pattern> for Vec<u32> {
    fn from(pattern: Pattern) -> Self {
        pattern.elements
    }
}

/// Parses `5-7-5`, `5,7,5` or `5 7 5`
impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let elements = s
            .split(|c: char| c == '-' || c == ',' || c.is_whitespace())
            .filter(|piece| !piece.is_empty())
            .map(|piece| {
                piece
                    .parse::<u32>()
                    .map_err(|_| PatternError::InvalidElement(piece.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(elements)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                f.write_str("-")?;
            }
            write!(f, "{element}")?;
        }
        Ok(())
    }
}
