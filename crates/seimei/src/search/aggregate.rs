use super::candidate::BestCandidates;

/// Folds per-pair results into the global maximum and its tied candidates.
///
/// Pairs without candidates contribute nothing; ties across pairs are
/// concatenated without deduplication.
pub struct GlobalAggregator;

impl GlobalAggregator {
    pub fn aggregate<I>(results: I) -> BestCandidates
    where
        I: IntoIterator<Item = BestCandidates>,
    {
        results
            .into_iter()
            .fold(BestCandidates::empty(), Self::combine)
    }

    /// Associative and commutative up to candidate order, so partial
    /// results may be combined in any grouping.
    pub fn combine(left: BestCandidates, right: BestCandidates) -> BestCandidates {
        left.merge(right)
    }
}
