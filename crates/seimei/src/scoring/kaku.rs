use super::{InputError, Score, ScoreTable, Stroke, StrokeSequence};
use crate::config::StrokeRange;
use serde::Serialize;

/// The seven derived values of a name allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Aspect {
    Heavenly,
    Earthly,
    Human,
    Outer,
    Work,
    Family,
    Total,
}

impl Aspect {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Heavenly,
            Self::Earthly,
            Self::Human,
            Self::Outer,
            Self::Work,
            Self::Family,
            Self::Total,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Heavenly => "Heavenly (tenkaku)",
            Self::Earthly => "Earthly (chikaku)",
            Self::Human => "Human (jinkaku)",
            Self::Outer => "Outer (gaikaku)",
            Self::Work => "Work (shigoto)",
            Self::Family => "Family (katei)",
            Self::Total => "Total (soukaku)",
        }
    }
}

/// Stroke value of each aspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct KakuValues {
    pub heavenly: Stroke,
    pub earthly: Stroke,
    pub human: Stroke,
    pub outer: Stroke,
    pub work: Stroke,
    pub family: Stroke,
    pub total: Stroke,
}

impl KakuValues {
    pub fn get(&self, aspect: Aspect) -> Stroke {
        match aspect {
            Aspect::Heavenly => self.heavenly,
            Aspect::Earthly => self.earthly,
            Aspect::Human => self.human,
            Aspect::Outer => self.outer,
            Aspect::Work => self.work,
            Aspect::Family => self.family,
            Aspect::Total => self.total,
        }
    }
}

/// Score-table lookup of each aspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct KakuScores {
    pub heavenly: Score,
    pub earthly: Score,
    pub human: Score,
    pub outer: Score,
    pub work: Score,
    pub family: Score,
    pub total: Score,
}

impl KakuScores {
    pub fn get(&self, aspect: Aspect) -> Score {
        match aspect {
            Aspect::Heavenly => self.heavenly,
            Aspect::Earthly => self.earthly,
            Aspect::Human => self.human,
            Aspect::Outer => self.outer,
            Aspect::Work => self.work,
            Aspect::Family => self.family,
            Aspect::Total => self.total,
        }
    }

    /// Sum of the seven scores, the value the search maximizes.
    pub fn overall(&self) -> Score {
        self.heavenly
            + self.earthly
            + self.human
            + self.outer
            + self.work
            + self.family
            + self.total
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct KakuReading {
    pub values: KakuValues,
    pub scores: KakuScores,
}

impl KakuReading {
    pub fn overall(&self) -> Score {
        self.scores.overall()
    }
}

/// Given-name length classes that select the outer and family rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GivenShape {
    Single,
    Double,
    Triple,
    Quadruple,
}

impl GivenShape {
    fn of(given: &StrokeSequence) -> Self {
        match given.len() {
            1 => Self::Single,
            2 => Self::Double,
            3 => Self::Triple,
            _ => Self::Quadruple,
        }
    }

    fn outer_right(self, given: &StrokeSequence) -> Stroke {
        match self {
            Self::Single => 1,
            Self::Double => given.last(),
            Self::Triple => given.tail_pair_sum(),
            // Four-character names use the trailing pair as well, not the trailing three.
            Self::Quadruple => given.tail_pair_sum(),
        }
    }

    fn family(self, surname: &StrokeSequence, given: &StrokeSequence) -> Stroke {
        match self {
            Self::Quadruple => surname.last() + given.first() + given.tail_pair_sum(),
            Self::Single | Self::Double | Self::Triple => surname.last() + given.sum(),
        }
    }
}

/// Computes the seven aspects of a surname/given-name allocation.
///
/// Stateless apart from borrowing the score table and the stroke bounds it
/// validates against, so one calculator can be shared by every worker.
#[derive(Debug, Clone, Copy)]
pub struct KakuCalculator<'t> {
    table: &'t ScoreTable,
    bounds: StrokeRange,
}

impl<'t> KakuCalculator<'t> {
    pub fn new(table: &'t ScoreTable, bounds: StrokeRange) -> Self {
        Self { table, bounds }
    }

    pub fn calculate(
        &self,
        surname: &StrokeSequence,
        given: &StrokeSequence,
    ) -> Result<KakuReading, InputError> {
        self.check_bounds(surname)?;
        self.check_bounds(given)?;

        let values = aspect_values(surname, given);
        Ok(KakuReading {
            values,
            scores: self.score_values(&values),
        })
    }

    fn check_bounds(&self, sequence: &StrokeSequence) -> Result<(), InputError> {
        if sequence.is_empty() {
            return Err(InputError::Empty);
        }
        match sequence
            .as_slice()
            .iter()
            .find(|stroke| !self.bounds.contains(**stroke))
        {
            Some(stroke) => Err(InputError::OutOfBounds {
                stroke: *stroke,
                min: self.bounds.min,
                max: self.bounds.max,
            }),
            None => Ok(()),
        }
    }

    fn score_values(&self, values: &KakuValues) -> KakuScores {
        KakuScores {
            heavenly: self.table.score(values.heavenly),
            earthly: self.table.score(values.earthly),
            human: self.table.score(values.human),
            outer: self.table.score(values.outer),
            work: self.table.score(values.work),
            family: self.table.score(values.family),
            total: self.table.score(values.total),
        }
    }
}

fn aspect_values(surname: &StrokeSequence, given: &StrokeSequence) -> KakuValues {
    let shape = GivenShape::of(given);
    let heavenly = surname.sum();
    let earthly = given.sum();

    let outer_left = if surname.len() == 1 {
        1
    } else {
        surname.sum_without_last()
    };

    KakuValues {
        heavenly,
        earthly,
        human: surname.last() + given.first(),
        outer: outer_left + shape.outer_right(given),
        work: heavenly + given.first(),
        family: shape.family(surname, given),
        total: heavenly + earthly,
    }
}
