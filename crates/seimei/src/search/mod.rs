//! Exhaustive search for the stroke allocations with the highest overall score.
//!
//! The run has two parallel phases separated by a join: stroke pools are
//! generated per name length, then every qualified heavenly/earthly pair is
//! evaluated against the finished pool and the per-pair maxima are reduced
//! into the global result.

mod aggregate;
mod candidate;
mod evaluator;
mod pairs;
mod pool;

#[cfg(test)]
mod tests;

pub use aggregate::GlobalAggregator;
pub use candidate::{BestCandidates, Candidate};
pub use evaluator::PairEvaluator;
pub use pairs::{QualifiedSumPair, SumPairQualifier};
pub use pool::{cartesian_power, CartesianPower, PoolEntry, PoolIndex, StrokeComboPool};

use crate::config::{ConfigError, SearchConfig};
use crate::scoring::{InputError, KakuCalculator, Score, ScoreTable};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("stroke sequence rejected during evaluation: {0}")]
    Input(#[from] InputError),
    #[error("unable to start search workers: {0}")]
    Workers(#[from] rayon::ThreadPoolBuildError),
}

/// Receives progress at each phase boundary of a run.
pub trait SearchObserver {
    fn pool_ready(&self, _pool_size: usize) {}

    fn pairs_qualified(&self, _pairs: usize) {}

    fn evaluation_finished(&self, _best_score: Option<Score>, _candidates: usize) {}
}

/// Logs phase boundaries through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl SearchObserver for TracingObserver {
    fn pool_ready(&self, pool_size: usize) {
        info!(pool_size, "stroke pool ready");
    }

    fn pairs_qualified(&self, pairs: usize) {
        info!(pairs, "qualified sum pairs derived");
    }

    fn evaluation_finished(&self, best_score: Option<Score>, candidates: usize) {
        info!(?best_score, candidates, "evaluation finished");
    }
}

/// Counts reported for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchSummary {
    pub pool_size: usize,
    pub qualified_pairs: usize,
    pub best_score: Option<Score>,
    pub candidate_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    pub summary: SearchSummary,
    pub candidates: Vec<Candidate>,
}

/// Runs the pool, qualification, and evaluation stages on a bounded worker pool.
pub struct SearchEngine {
    config: SearchConfig,
    table: ScoreTable,
    workers: rayon::ThreadPool,
}

impl SearchEngine {
    /// `workers == 0` sizes the pool to the available hardware parallelism.
    pub fn new(config: SearchConfig, table: ScoreTable, workers: usize) -> Result<Self, SearchError> {
        config.validate()?;
        let workers = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|index| format!("seimei-worker-{index}"))
            .build()?;

        Ok(Self {
            config,
            table,
            workers,
        })
    }

    pub fn table(&self) -> &ScoreTable {
        &self.table
    }

    pub fn calculator(&self) -> KakuCalculator<'_> {
        KakuCalculator::new(&self.table, self.config.strokes)
    }

    pub fn run(&self) -> Result<SearchOutcome, SearchError> {
        self.run_with(&TracingObserver)
    }

    pub fn run_with<O>(&self, observer: &O) -> Result<SearchOutcome, SearchError>
    where
        O: SearchObserver + ?Sized,
    {
        let mut summary = SearchSummary::default();

        let pool = self.build_pool()?;
        summary.pool_size = pool.len();
        observer.pool_ready(pool.len());
        if pool.is_empty() {
            warn!("no stroke sequence reaches the pool threshold");
            return Ok(SearchOutcome {
                summary,
                candidates: Vec::new(),
            });
        }

        let pairs = self.qualify_pairs()?;
        summary.qualified_pairs = pairs.len();
        observer.pairs_qualified(pairs.len());
        if pairs.is_empty() {
            warn!("no heavenly/earthly pair qualifies");
            return Ok(SearchOutcome {
                summary,
                candidates: Vec::new(),
            });
        }

        let best = self.evaluate_pairs(&pool, &pairs)?.into_sorted();
        let (best_score, candidates) = best.into_parts();
        summary.best_score = best_score;
        summary.candidate_count = candidates.len();
        observer.evaluation_finished(best_score, candidates.len());
        if candidates.is_empty() {
            warn!("no allocation reached a score");
        }

        Ok(SearchOutcome {
            summary,
            candidates,
        })
    }

    /// Phase one: one task per name length, joined into a single index.
    pub fn build_pool(&self) -> Result<PoolIndex, SearchError> {
        let generator = StrokeComboPool::new(&self.table, self.config.strokes);
        let lengths: Vec<usize> = self.config.name_lengths.iter().collect();
        let min_score = self.config.min_score_all;

        let per_length = self.workers.install(|| {
            lengths
                .par_iter()
                .map(|length| generator.generate(*length, min_score))
                .collect::<Result<Vec<_>, _>>()
        })?;

        Ok(per_length.into_iter().flatten().collect())
    }

    pub fn qualify_pairs(&self) -> Result<Vec<QualifiedSumPair>, SearchError> {
        let pairs = SumPairQualifier::new(&self.table)
            .qualify(self.config.min_score_all, self.config.min_score_one)?;
        Ok(pairs)
    }

    /// Phase two: one task per pair, reduced with [`GlobalAggregator::combine`].
    /// The first failing task fails the whole reduction.
    pub fn evaluate_pairs(
        &self,
        pool: &PoolIndex,
        pairs: &[QualifiedSumPair],
    ) -> Result<BestCandidates, SearchError> {
        let evaluator = PairEvaluator::new(self.calculator(), pool);

        let best = self.workers.install(|| {
            pairs
                .par_iter()
                .map(|pair| evaluator.evaluate(pair))
                .try_reduce(BestCandidates::empty, |left, right| {
                    Ok(GlobalAggregator::combine(left, right))
                })
        })?;

        Ok(best)
    }
}
