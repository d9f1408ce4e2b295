use crate::cli::SearchArgs;
use seimei::error::AppError;
use seimei::report::{self, SearchReport};
use seimei::scoring::Score;
use seimei::search::{SearchEngine, SearchObserver, SearchOutcome};
use seimei::telemetry;
use tracing::info;

/// Prints the progress narrative between phases.
struct ConsoleObserver {
    min_score_all: Score,
    min_score_one: Score,
}

impl SearchObserver for ConsoleObserver {
    fn pool_ready(&self, pool_size: usize) {
        println!(
            "Stroke pool (total scoring {} or more): {} sequences",
            self.min_score_all, pool_size
        );
    }

    fn pairs_qualified(&self, pairs: usize) {
        println!(
            "Heavenly/earthly pairs (all >= {}, one >= {}): {}",
            self.min_score_all, self.min_score_one, pairs
        );
        if pairs > 0 {
            println!("Evaluating {pairs} pairs in parallel...");
        }
    }

    fn evaluation_finished(&self, best_score: Option<Score>, candidates: usize) {
        match best_score {
            Some(best) => println!("Best overall score: {best} ({candidates} allocations)"),
            None => println!("Best overall score: none"),
        }
    }
}

pub(crate) fn run_search(args: SearchArgs) -> Result<(), AppError> {
    let config = args.load_config()?;

    telemetry::init(&config.telemetry)?;

    let table = config.load_score_table()?;
    info!(
        table_entries = table.len(),
        custom_table = config.score_table.is_some(),
        "score table loaded"
    );

    let search = config.search;
    println!(
        "Searching names of {}..={} characters per part, {}..={} strokes per character",
        search.name_lengths.min, search.name_lengths.max, search.strokes.min, search.strokes.max
    );

    let engine = SearchEngine::new(search, table, config.runtime.workers)?;
    let observer = ConsoleObserver {
        min_score_all: search.min_score_all,
        min_score_one: search.min_score_one,
    };
    let outcome = engine.run_with(&observer)?;
    render_top(&outcome);

    let report = SearchReport::new(search, &outcome);
    report::write_to_path(&config.output.path, config.output.format, &report)?;
    println!(
        "Saved {} rows to {}",
        report.candidates.len(),
        config.output.path.display()
    );

    Ok(())
}

const PREVIEW_ROWS: usize = 5;

fn render_top(outcome: &SearchOutcome) {
    if outcome.candidates.is_empty() {
        println!("No allocation reached the thresholds.");
        return;
    }

    println!("First allocations:");
    for candidate in outcome.candidates.iter().take(PREVIEW_ROWS) {
        println!(
            "  - surname {} / given {} -> {}",
            candidate.surname, candidate.given, candidate.overall
        );
    }
    if outcome.candidates.len() > PREVIEW_ROWS {
        println!("  ... {} more", outcome.candidates.len() - PREVIEW_ROWS);
    }
}
