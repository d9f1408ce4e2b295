use crate::scoring::{KakuReading, Score, StrokeSequence};
use serde::Serialize;

/// A fully scored surname/given-name allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Candidate {
    pub surname: StrokeSequence,
    pub given: StrokeSequence,
    pub reading: KakuReading,
    pub overall: Score,
}

impl Candidate {
    pub fn new(surname: StrokeSequence, given: StrokeSequence, reading: KakuReading) -> Self {
        Self {
            surname,
            given,
            overall: reading.overall(),
            reading,
        }
    }
}

/// The maximal score seen over some set of allocations and every allocation
/// that reached it.
///
/// `best_score` is `None` when nothing was evaluated. Merging is associative
/// and commutative up to candidate order, so results can be combined in any
/// grouping; [`BestCandidates::into_sorted`] fixes the order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BestCandidates {
    best_score: Option<Score>,
    candidates: Vec<Candidate>,
}

impl BestCandidates {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn best_score(&self) -> Option<Score> {
        self.best_score
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Record one allocation. A higher score drops every retained tie.
    pub fn offer(&mut self, candidate: Candidate) {
        match self.best_score {
            Some(best) if candidate.overall < best => {}
            Some(best) if candidate.overall == best => self.candidates.push(candidate),
            _ => {
                self.best_score = Some(candidate.overall);
                self.candidates.clear();
                self.candidates.push(candidate);
            }
        }
    }

    /// Whether an allocation scoring `overall` would be retained.
    pub fn admits(&self, overall: Score) -> bool {
        self.best_score.map_or(true, |best| overall >= best)
    }

    pub fn merge(mut self, other: Self) -> Self {
        match self.best_score.cmp(&other.best_score) {
            std::cmp::Ordering::Greater => self,
            std::cmp::Ordering::Less => other,
            std::cmp::Ordering::Equal => {
                self.candidates.extend(other.candidates);
                self
            }
        }
    }

    /// Candidates ordered by surname, then given name.
    pub fn into_sorted(mut self) -> Self {
        self.candidates
            .sort_by(|a, b| (a.surname, a.given).cmp(&(b.surname, b.given)));
        self
    }

    pub fn into_parts(self) -> (Option<Score>, Vec<Candidate>) {
        (self.best_score, self.candidates)
    }
}
