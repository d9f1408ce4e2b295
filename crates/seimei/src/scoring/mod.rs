//! Stroke-count arithmetic: the score table, stroke sequences, and the seven aspects.

mod kaku;
mod sequence;
mod table;

pub use kaku::{Aspect, KakuCalculator, KakuReading, KakuScores, KakuValues};
pub use sequence::{InputError, StrokeSequence, MAX_NAME_LENGTH};
pub use table::{ScoreTable, MAX_SCORE, MAX_TABLE_STROKE};

/// Stroke count of a character, or a sum of stroke counts.
pub type Stroke = u32;

/// Fortune score looked up from the score table.
pub type Score = u8;
