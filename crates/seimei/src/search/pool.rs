use crate::config::{check_threshold, ConfigError, StrokeRange};
use crate::scoring::{Score, ScoreTable, Stroke, StrokeSequence, MAX_NAME_LENGTH};
use std::collections::BTreeMap;
use tracing::debug;

/// A stroke sequence whose summed strokes reached the pool threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolEntry {
    pub strokes: StrokeSequence,
    pub total: Stroke,
    pub score: Score,
}

/// Enumerates every stroke sequence of a given length whose total scores well.
pub struct StrokeComboPool<'t> {
    table: &'t ScoreTable,
    strokes: StrokeRange,
}

impl<'t> StrokeComboPool<'t> {
    pub fn new(table: &'t ScoreTable, strokes: StrokeRange) -> Self {
        Self { table, strokes }
    }

    /// Number of sequences of `length` strokes the range spans, before pruning.
    pub fn combinations(&self, length: usize) -> usize {
        let length = u32::try_from(length).unwrap_or(u32::MAX);
        self.strokes.width().saturating_pow(length)
    }

    /// Every sequence of `length` strokes with `score(sum) >= min_score`, in
    /// lexicographic order.
    pub fn generate(&self, length: usize, min_score: Score) -> Result<Vec<PoolEntry>, ConfigError> {
        if length == 0 || length > MAX_NAME_LENGTH {
            return Err(ConfigError::NameLengthOutOfBounds { length });
        }
        check_threshold("pool min_score", min_score)?;
        self.strokes.validate()?;

        let entries: Vec<PoolEntry> = cartesian_power(self.strokes, length)
            .filter_map(|strokes| {
                let total = strokes.sum();
                let score = self.table.score(total);
                (score >= min_score).then_some(PoolEntry {
                    strokes,
                    total,
                    score,
                })
            })
            .collect();

        debug!(
            length,
            enumerated = self.combinations(length),
            retained = entries.len(),
            "stroke pool generated"
        );
        Ok(entries)
    }
}

/// All `length`-character sequences over `strokes`, in lexicographic order.
pub fn cartesian_power(strokes: StrokeRange, length: usize) -> CartesianPower {
    CartesianPower {
        strokes,
        current: [strokes.min; MAX_NAME_LENGTH],
        length,
        exhausted: length == 0 || length > MAX_NAME_LENGTH || strokes.min > strokes.max,
    }
}

/// Odometer over the stroke range; the last position turns fastest.
#[derive(Debug, Clone)]
pub struct CartesianPower {
    strokes: StrokeRange,
    current: [Stroke; MAX_NAME_LENGTH],
    length: usize,
    exhausted: bool,
}

impl Iterator for CartesianPower {
    type Item = StrokeSequence;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let item = StrokeSequence::new(&self.current[..self.length]).ok()?;

        let mut position = self.length;
        loop {
            if position == 0 {
                self.exhausted = true;
                break;
            }
            position -= 1;
            if self.current[position] < self.strokes.max {
                self.current[position] += 1;
                break;
            }
            self.current[position] = self.strokes.min;
        }

        Some(item)
    }
}

/// Pool entries of every length, grouped by stroke total.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoolIndex {
    by_total: BTreeMap<Stroke, Vec<PoolEntry>>,
    len: usize,
}

impl PoolIndex {
    pub fn with_total(&self, total: Stroke) -> &[PoolEntry] {
        self.by_total
            .get(&total)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Distinct totals present in the pool, ascending.
    pub fn totals(&self) -> impl Iterator<Item = Stroke> + '_ {
        self.by_total.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl FromIterator<PoolEntry> for PoolIndex {
    fn from_iter<I: IntoIterator<Item = PoolEntry>>(iter: I) -> Self {
        let mut index = PoolIndex::default();
        for entry in iter {
            index.by_total.entry(entry.total).or_default().push(entry);
            index.len += 1;
        }
        index
    }
}
