use crate::inspect::{run_score, ScoreArgs};
use crate::search::run_search;
use clap::{Args, Parser, Subcommand};
use seimei::config::{AppConfig, OutputFormat};
use seimei::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "seimei-finder",
    about = "Search stroke allocations for the highest seven-aspect name fortune score",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the exhaustive search and write the winning allocations (default command)
    Search(SearchArgs),
    /// Show the seven aspects and scores of one surname/given-name allocation
    Score(ScoreArgs),
}

/// Flags shared by every command that needs the search configuration.
#[derive(Args, Debug, Default, Clone)]
pub(crate) struct ConfigArgs {
    /// Smallest stroke count per character
    #[arg(long)]
    pub(crate) min_stroke: Option<u32>,
    /// Largest stroke count per character
    #[arg(long)]
    pub(crate) max_stroke: Option<u32>,
    /// CSV score table with a `stroke,score` header (defaults to the built-in table)
    #[arg(long)]
    pub(crate) score_table: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct SearchArgs {
    #[command(flatten)]
    pub(crate) config: ConfigArgs,
    /// Shortest surname/given name, in characters
    #[arg(long)]
    pub(crate) min_length: Option<usize>,
    /// Longest surname/given name, in characters
    #[arg(long)]
    pub(crate) max_length: Option<usize>,
    /// Score every pruning aspect must reach
    #[arg(long)]
    pub(crate) min_score_all: Option<u8>,
    /// Score at least one of heavenly, earthly and total must reach
    #[arg(long)]
    pub(crate) min_score_one: Option<u8>,
    /// Result file path
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
    /// Result file format: csv or json
    #[arg(long)]
    pub(crate) format: Option<OutputFormat>,
    /// Worker threads (0 uses every available core)
    #[arg(long)]
    pub(crate) threads: Option<usize>,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Search(SearchArgs::default()));

    match command {
        Command::Search(args) => run_search(args),
        Command::Score(args) => run_score(args),
    }
}

/// Load configuration from the environment, then apply flag overrides.
pub(crate) fn load_config(args: &ConfigArgs) -> Result<AppConfig, AppError> {
    let mut config = AppConfig::load()?;
    args.apply(&mut config);
    Ok(config)
}

impl ConfigArgs {
    /// Flags win over whatever the environment supplied.
    pub(crate) fn apply(&self, config: &mut AppConfig) {
        if let Some(min) = self.min_stroke {
            config.search.strokes.min = min;
        }
        if let Some(max) = self.max_stroke {
            config.search.strokes.max = max;
        }
        if let Some(path) = &self.score_table {
            config.score_table = Some(path.clone());
        }
    }
}

impl SearchArgs {
    pub(crate) fn load_config(&self) -> Result<AppConfig, AppError> {
        let mut config = load_config(&self.config)?;
        self.apply(&mut config);
        Ok(config)
    }

    fn apply(&self, config: &mut AppConfig) {
        if let Some(min) = self.min_length {
            config.search.name_lengths.min = min;
        }
        if let Some(max) = self.max_length {
            config.search.name_lengths.max = max;
        }
        if let Some(score) = self.min_score_all {
            config.search.min_score_all = score;
        }
        if let Some(score) = self.min_score_one {
            config.search.min_score_one = score;
        }
        if let Some(path) = &self.output {
            config.output.path = path.clone();
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if let Some(threads) = self.threads {
            config.runtime.workers = threads;
        }
    }
}
