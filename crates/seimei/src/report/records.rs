use crate::scoring::{Score, Stroke, StrokeSequence};
use crate::search::Candidate;
use serde::Serialize;

/// One output row: a candidate flattened to the published column layout.
///
/// Serializes stroke sequences as integer arrays; [`CandidateRecord::csv_row`]
/// renders them as `[a, b]` cells instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateRecord {
    pub surname_length: usize,
    pub surname_strokes: StrokeSequence,
    pub given_length: usize,
    pub given_strokes: StrokeSequence,
    pub heavenly_stroke: Stroke,
    pub heavenly_score: Score,
    pub earthly_stroke: Stroke,
    pub earthly_score: Score,
    pub human_stroke: Stroke,
    pub human_score: Score,
    pub outer_stroke: Stroke,
    pub outer_score: Score,
    pub work_stroke: Stroke,
    pub work_score: Score,
    pub family_stroke: Stroke,
    pub family_score: Score,
    pub total_stroke: Stroke,
    pub total_score: Score,
    pub overall_score: Score,
}

impl CandidateRecord {
    pub const HEADERS: [&'static str; 19] = [
        "surname_length",
        "surname_strokes",
        "given_length",
        "given_strokes",
        "heavenly_stroke",
        "heavenly_score",
        "earthly_stroke",
        "earthly_score",
        "human_stroke",
        "human_score",
        "outer_stroke",
        "outer_score",
        "work_stroke",
        "work_score",
        "family_stroke",
        "family_score",
        "total_stroke",
        "total_score",
        "overall_score",
    ];

    /// Cells in [`CandidateRecord::HEADERS`] order.
    pub fn csv_row(&self) -> [String; 19] {
        [
            self.surname_length.to_string(),
            self.surname_strokes.to_string(),
            self.given_length.to_string(),
            self.given_strokes.to_string(),
            self.heavenly_stroke.to_string(),
            self.heavenly_score.to_string(),
            self.earthly_stroke.to_string(),
            self.earthly_score.to_string(),
            self.human_stroke.to_string(),
            self.human_score.to_string(),
            self.outer_stroke.to_string(),
            self.outer_score.to_string(),
            self.work_stroke.to_string(),
            self.work_score.to_string(),
            self.family_stroke.to_string(),
            self.family_score.to_string(),
            self.total_stroke.to_string(),
            self.total_score.to_string(),
            self.overall_score.to_string(),
        ]
    }
}

impl From<&Candidate> for CandidateRecord {
    fn from(candidate: &Candidate) -> Self {
        let values = &candidate.reading.values;
        let scores = &candidate.reading.scores;
        Self {
            surname_length: candidate.surname.len(),
            surname_strokes: candidate.surname,
            given_length: candidate.given.len(),
            given_strokes: candidate.given,
            heavenly_stroke: values.heavenly,
            heavenly_score: scores.heavenly,
            earthly_stroke: values.earthly,
            earthly_score: scores.earthly,
            human_stroke: values.human,
            human_score: scores.human,
            outer_stroke: values.outer,
            outer_score: scores.outer,
            work_stroke: values.work,
            work_score: scores.work,
            family_stroke: values.family,
            family_score: scores.family,
            total_stroke: values.total,
            total_score: scores.total,
            overall_score: candidate.overall,
        }
    }
}
