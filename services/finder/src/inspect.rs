use crate::cli::{load_config, ConfigArgs};
use clap::Args;
use seimei::error::AppError;
use seimei::scoring::{Aspect, KakuCalculator, KakuReading, StrokeSequence};
use std::fmt::Write;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    #[command(flatten)]
    pub(crate) config: ConfigArgs,
    /// Surname strokes per character, e.g. `5,3`
    #[arg(long)]
    pub(crate) surname: StrokeSequence,
    /// Given-name strokes per character, e.g. `4,2`
    #[arg(long)]
    pub(crate) given: StrokeSequence,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let config = load_config(&args.config)?;
    config.search.strokes.validate()?;
    let table = config.load_score_table()?;

    let calculator = KakuCalculator::new(&table, config.search.strokes);
    let reading = calculator.calculate(&args.surname, &args.given)?;

    print!("{}", render_reading(&args.surname, &args.given, &reading));

    Ok(())
}

/// One header line, one line per aspect in display order, then the overall score.
fn render_reading(
    surname: &StrokeSequence,
    given: &StrokeSequence,
    reading: &KakuReading,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Surname {surname} / given {given}");
    for aspect in Aspect::ordered() {
        let _ = writeln!(
            out,
            "  {:<20} stroke {:>3}  score {}",
            aspect.label(),
            reading.values.get(aspect),
            reading.scores.get(aspect)
        );
    }
    let _ = writeln!(out, "  Overall score: {}", reading.overall());
    out
}
