use super::candidate::{BestCandidates, Candidate};
use super::pairs::QualifiedSumPair;
use super::pool::PoolIndex;
use crate::scoring::{InputError, KakuCalculator};
use tracing::debug;

/// Scores every surname/given-name combination behind one qualified pair.
pub struct PairEvaluator<'a> {
    calculator: KakuCalculator<'a>,
    pool: &'a PoolIndex,
}

impl<'a> PairEvaluator<'a> {
    pub fn new(calculator: KakuCalculator<'a>, pool: &'a PoolIndex) -> Self {
        Self { calculator, pool }
    }

    /// Surnames are pool entries totalling the pair's heavenly value, given
    /// names those totalling its earthly value, regardless of length. An
    /// empty side yields [`BestCandidates::empty`].
    pub fn evaluate(&self, pair: &QualifiedSumPair) -> Result<BestCandidates, InputError> {
        let surnames = self.pool.with_total(pair.heavenly_total);
        let givens = self.pool.with_total(pair.earthly_total);

        let mut best = BestCandidates::empty();
        if surnames.is_empty() || givens.is_empty() {
            return Ok(best);
        }

        for surname in surnames {
            for given in givens {
                let reading = self.calculator.calculate(&surname.strokes, &given.strokes)?;
                if best.admits(reading.overall()) {
                    best.offer(Candidate::new(surname.strokes, given.strokes, reading));
                }
            }
        }

        debug!(
            heavenly = pair.heavenly_total,
            earthly = pair.earthly_total,
            combinations = surnames.len() * givens.len(),
            best = ?best.best_score(),
            "pair evaluated"
        );
        Ok(best)
    }
}
