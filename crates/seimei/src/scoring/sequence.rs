use super::Stroke;
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Longest surname or given name, in characters.
pub const MAX_NAME_LENGTH: usize = 4;

/// Raised when a stroke sequence cannot be scored.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("stroke sequence must hold at least one character")]
    Empty,
    #[error("stroke sequence holds {length} characters, at most 4 are supported")]
    TooLong { length: usize },
    #[error("stroke count {stroke} is outside the configured range {min}..={max}")]
    OutOfBounds { stroke: Stroke, min: Stroke, max: Stroke },
    #[error("'{value}' is not a comma separated list of stroke counts")]
    Malformed { value: String },
}

/// Per-character stroke counts of a surname or given name, in reading order.
///
/// Holds between one and [`MAX_NAME_LENGTH`] strokes. The value is `Copy` so
/// the search can pass sequences around without allocating.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StrokeSequence {
    strokes: [Stroke; MAX_NAME_LENGTH],
    len: u8,
}

impl StrokeSequence {
    pub fn new(strokes: &[Stroke]) -> Result<Self, InputError> {
        if strokes.is_empty() {
            return Err(InputError::Empty);
        }
        if strokes.len() > MAX_NAME_LENGTH {
            return Err(InputError::TooLong {
                length: strokes.len(),
            });
        }

        let mut padded = [0; MAX_NAME_LENGTH];
        padded[..strokes.len()].copy_from_slice(strokes);
        Ok(Self {
            strokes: padded,
            len: strokes.len() as u8,
        })
    }

    pub fn as_slice(&self) -> &[Stroke] {
        &self.strokes[..self.len()]
    }

    pub fn len(&self) -> usize {
        usize::from(self.len)
    }

    /// Never true for a constructed sequence.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn sum(&self) -> Stroke {
        self.as_slice().iter().sum()
    }

    pub fn first(&self) -> Stroke {
        self.strokes[0]
    }

    pub fn last(&self) -> Stroke {
        self.strokes[self.len() - 1]
    }

    /// Sum of every stroke but the last.
    pub fn sum_without_last(&self) -> Stroke {
        self.as_slice()[..self.len() - 1].iter().sum()
    }

    /// Sum of the trailing two strokes; a single stroke for one-character names.
    pub fn tail_pair_sum(&self) -> Stroke {
        let start = self.len().saturating_sub(2);
        self.as_slice()[start..].iter().sum()
    }
}

impl Ord for StrokeSequence {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl PartialOrd for StrokeSequence {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for StrokeSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl fmt::Display for StrokeSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (index, stroke) in self.as_slice().iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{stroke}")?;
        }
        write!(f, "]")
    }
}

impl Serialize for StrokeSequence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.as_slice())
    }
}

/// Parses `"5,3"` or `"5 3"` style input.
impl FromStr for StrokeSequence {
    type Err = InputError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let strokes = value
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(str::parse::<Stroke>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| InputError::Malformed {
                value: value.to_string(),
            })?;
        Self::new(&strokes)
    }
}
