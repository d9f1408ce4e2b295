use super::{Score, Stroke};
use crate::config::ConfigError;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

/// Highest score the table may assign.
pub const MAX_SCORE: Score = 5;

/// Largest stroke total a table may list.
pub const MAX_TABLE_STROKE: Stroke = 10_000;

/// Scores for strokes 1..=162, in stroke order.
#[rustfmt::skip]
const STANDARD_SCORES: [Score; 162] = [
    // 1..=10
    4, 1, 4, 1, 4, 4, 3, 3, 1, 1,
    // 11..=20
    4, 1, 4, 2, 5, 4, 3, 3, 1, 1,
    // 21..=30
    4, 2, 4, 5, 3, 3, 2, 2, 4, 2,
    // 31..=40
    5, 4, 4, 1, 4, 1, 4, 3, 4, 2,
    // 41..=50
    4, 2, 2, 1, 4, 2, 4, 3, 2, 2,
    // 51..=60
    2, 3, 2, 1, 2, 2, 3, 3, 2, 1,
    // 61..=70
    4, 1, 4, 1, 4, 1, 4, 4, 1, 1,
    // 71..=80
    3, 2, 3, 2, 3, 1, 3, 3, 1, 1,
    // 81..=90
    3, 4, 1, 4, 1, 4, 4, 3, 3, 1,
    // 91..=100
    1, 4, 1, 4, 2, 5, 4, 3, 3, 1,
    // 101..=110
    1, 4, 2, 4, 5, 3, 3, 2, 2, 4,
    // 111..=120
    2, 5, 4, 4, 1, 4, 1, 4, 3, 4,
    // 121..=130
    2, 4, 2, 2, 1, 4, 2, 4, 3, 2,
    // 131..=140
    2, 2, 4, 2, 1, 2, 2, 3, 3, 2,
    // 141..=150
    1, 4, 1, 4, 1, 4, 1, 4, 4, 1,
    // 151..=160
    1, 3, 2, 3, 2, 3, 1, 3, 3, 1,
    // 161..=162
    1, 4,
];

/// Immutable stroke total -> score mapping.
///
/// Lookups are total: any stroke outside the explicit domain scores `0`.
/// The table is read-only after construction and can be shared across
/// worker threads by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreTable {
    // Indexed by stroke; `None` marks strokes the table does not list.
    slots: Vec<Option<Score>>,
    len: usize,
}

#[derive(Debug, Deserialize)]
struct ScoreRow {
    stroke: Stroke,
    score: u32,
}

impl ScoreTable {
    /// The reference table covering strokes 1..=162.
    pub fn standard() -> Self {
        let mut slots = vec![None; STANDARD_SCORES.len() + 1];
        for (index, score) in STANDARD_SCORES.iter().enumerate() {
            slots[index + 1] = Some(*score);
        }
        Self {
            slots,
            len: STANDARD_SCORES.len(),
        }
    }

    pub fn from_entries<I>(entries: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (Stroke, Score)>,
    {
        let mut slots: Vec<Option<Score>> = Vec::new();
        let mut len = 0;

        for (stroke, score) in entries {
            if stroke == 0 || stroke > MAX_TABLE_STROKE {
                return Err(ConfigError::InvalidTableStroke { stroke });
            }
            if score > MAX_SCORE {
                return Err(ConfigError::ScoreOutOfBounds {
                    name: format!("stroke {stroke}"),
                    score: u32::from(score),
                });
            }

            let index = stroke as usize;
            if index >= slots.len() {
                slots.resize(index + 1, None);
            }
            if slots[index].replace(score).is_some() {
                return Err(ConfigError::DuplicateTableStroke { stroke });
            }
            len += 1;
        }

        Ok(Self { slots, len })
    }

    /// Parse a `stroke,score` CSV document with a header row.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut entries = Vec::new();
        for row in csv_reader.deserialize::<ScoreRow>() {
            let row = row?;
            let score = Score::try_from(row.score).map_err(|_| ConfigError::ScoreOutOfBounds {
                name: format!("stroke {}", row.stroke),
                score: row.score,
            })?;
            entries.push((row.stroke, score));
        }

        Self::from_entries(entries)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| ConfigError::ScoreTableIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file)
    }

    pub fn score(&self, stroke: Stroke) -> Score {
        self.slots
            .get(stroke as usize)
            .copied()
            .flatten()
            .unwrap_or(0)
    }

    /// Whether the table lists `stroke` explicitly.
    pub fn contains(&self, stroke: Stroke) -> bool {
        matches!(self.slots.get(stroke as usize), Some(Some(_)))
    }

    /// Explicit entries in ascending stroke order.
    pub fn entries(&self) -> impl Iterator<Item = (Stroke, Score)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(stroke, score)| score.map(|score| (stroke as Stroke, score)))
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
