use crate::config::{check_threshold, ConfigError};
use crate::scoring::{Score, ScoreTable, Stroke};
use serde::Serialize;

/// Heavenly/earthly totals that can lead to a high-scoring allocation, with
/// the three scores that qualified them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct QualifiedSumPair {
    pub heavenly_total: Stroke,
    pub earthly_total: Stroke,
    pub heavenly_score: Score,
    pub earthly_score: Score,
    pub total_score: Score,
}

impl QualifiedSumPair {
    pub fn total(&self) -> Stroke {
        self.heavenly_total + self.earthly_total
    }
}

/// Derives qualifying heavenly/earthly totals from the score table alone.
pub struct SumPairQualifier<'t> {
    table: &'t ScoreTable,
}

impl<'t> SumPairQualifier<'t> {
    pub fn new(table: &'t ScoreTable) -> Self {
        Self { table }
    }

    /// Ordered pairs `(h, e)`, repetition allowed, drawn from table strokes
    /// scoring at least `min_score_all`, where `h`, `e` and `h + e` all score
    /// at least `min_score_all` and one of them reaches `min_score_one`.
    pub fn qualify(
        &self,
        min_score_all: Score,
        min_score_one: Score,
    ) -> Result<Vec<QualifiedSumPair>, ConfigError> {
        check_threshold("min_score_all", min_score_all)?;
        check_threshold("min_score_one", min_score_one)?;

        let candidates: Vec<(Stroke, Score)> = self
            .table
            .entries()
            .filter(|(_, score)| *score >= min_score_all)
            .collect();

        let mut pairs = Vec::new();
        for &(heavenly_total, heavenly_score) in &candidates {
            for &(earthly_total, earthly_score) in &candidates {
                let total_score = self.table.score(heavenly_total + earthly_total);
                let scores = [heavenly_score, earthly_score, total_score];

                let all_reach = scores.iter().all(|score| *score >= min_score_all);
                let one_reaches = scores.iter().any(|score| *score >= min_score_one);
                if all_reach && one_reaches {
                    pairs.push(QualifiedSumPair {
                        heavenly_total,
                        earthly_total,
                        heavenly_score,
                        earthly_score,
                        total_score,
                    });
                }
            }
        }

        Ok(pairs)
    }
}
