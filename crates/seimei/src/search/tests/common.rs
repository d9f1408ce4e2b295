use crate::config::{LengthRange, SearchConfig, StrokeRange};
use crate::scoring::{KakuCalculator, ScoreTable, Stroke, StrokeSequence};
use crate::search::{Candidate, PoolIndex, SearchEngine};

/// Small table used throughout: strokes 1..=6.
pub(super) fn synthetic_table() -> ScoreTable {
    ScoreTable::from_entries([(1, 4), (2, 1), (3, 4), (4, 1), (5, 4), (6, 5)])
        .expect("synthetic table is valid")
}

pub(super) fn synthetic_config(max_length: usize) -> SearchConfig {
    SearchConfig {
        strokes: StrokeRange { min: 1, max: 6 },
        name_lengths: LengthRange {
            min: 1,
            max: max_length,
        },
        min_score_all: 4,
        min_score_one: 5,
    }
}

pub(super) fn synthetic_engine(max_length: usize) -> SearchEngine {
    SearchEngine::new(synthetic_config(max_length), synthetic_table(), 2)
        .expect("engine builds")
}

pub(super) fn seq(strokes: &[Stroke]) -> StrokeSequence {
    StrokeSequence::new(strokes).expect("valid sequence")
}

pub(super) fn candidate(
    calculator: &KakuCalculator<'_>,
    surname: &[Stroke],
    given: &[Stroke],
) -> Candidate {
    let surname = seq(surname);
    let given = seq(given);
    let reading = calculator.calculate(&surname, &given).expect("reading");
    Candidate::new(surname, given, reading)
}

pub(super) fn pool_for(engine: &SearchEngine) -> PoolIndex {
    engine.build_pool().expect("pool builds")
}
