use crate::scoring::{
    Score, ScoreTable, Stroke, MAX_NAME_LENGTH, MAX_SCORE, MAX_TABLE_STROKE,
};
use serde::Serialize;
use std::env;
use std::fmt;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::str::FromStr;

/// Largest stroke count accepted for a single character.
pub const STROKE_CEILING: Stroke = 255;

/// Top-level configuration for a search run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub search: SearchConfig,
    pub score_table: Option<PathBuf>,
    pub output: OutputConfig,
    pub runtime: RuntimeConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let defaults = SearchConfig::default();
        let search = SearchConfig {
            strokes: StrokeRange {
                min: env_or("SEIMEI_MIN_STROKE", defaults.strokes.min)?,
                max: env_or("SEIMEI_MAX_STROKE", defaults.strokes.max)?,
            },
            name_lengths: LengthRange {
                min: env_or("SEIMEI_MIN_NAME_LENGTH", defaults.name_lengths.min)?,
                max: env_or("SEIMEI_MAX_NAME_LENGTH", defaults.name_lengths.max)?,
            },
            min_score_all: env_or("SEIMEI_MIN_SCORE_ALL", defaults.min_score_all)?,
            min_score_one: env_or("SEIMEI_MIN_SCORE_ONE", defaults.min_score_one)?,
        };

        let score_table = env::var("SEIMEI_SCORE_TABLE")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let output = OutputConfig {
            path: env::var("SEIMEI_OUTPUT")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_OUTPUT)),
            format: env_or("SEIMEI_OUTPUT_FORMAT", OutputFormat::Csv)?,
        };

        let runtime = RuntimeConfig {
            workers: env_or("SEIMEI_THREADS", 0)?,
        };

        let log_level = env::var("SEIMEI_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            search,
            score_table,
            output,
            runtime,
            telemetry: TelemetryConfig { log_level },
        })
    }

    /// Resolve the score table: the configured CSV file, or the built-in table.
    pub fn load_score_table(&self) -> Result<ScoreTable, ConfigError> {
        match &self.score_table {
            Some(path) => ScoreTable::from_path(path),
            None => Ok(ScoreTable::standard()),
        }
    }
}

const DEFAULT_OUTPUT: &str = "lucky_name_list.csv";

fn env_or<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        Err(_) => Ok(default),
    }
}

/// Bounds and thresholds that define the search space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchConfig {
    pub strokes: StrokeRange,
    pub name_lengths: LengthRange,
    /// Every aspect considered while pruning must reach this score.
    pub min_score_all: Score,
    /// At least one of heavenly, earthly and total must reach this score.
    pub min_score_one: Score,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            strokes: StrokeRange { min: 1, max: 30 },
            name_lengths: LengthRange { min: 1, max: 4 },
            min_score_all: 4,
            min_score_one: 5,
        }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.strokes.validate()?;
        self.name_lengths.validate()?;
        check_threshold("min_score_all", self.min_score_all)?;
        check_threshold("min_score_one", self.min_score_one)?;
        Ok(())
    }
}

pub(crate) fn check_threshold(name: &'static str, score: Score) -> Result<(), ConfigError> {
    if score > MAX_SCORE {
        return Err(ConfigError::ScoreOutOfBounds {
            name: name.to_string(),
            score: u32::from(score),
        });
    }
    Ok(())
}

/// Inclusive range of stroke counts a single character may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StrokeRange {
    pub min: Stroke,
    pub max: Stroke,
}

impl StrokeRange {
    pub fn contains(&self, stroke: Stroke) -> bool {
        (self.min..=self.max).contains(&stroke)
    }

    /// Number of distinct stroke counts in the range.
    pub fn width(&self) -> usize {
        if self.min > self.max {
            0
        } else {
            (self.max - self.min) as usize + 1
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min == 0 || self.min > self.max || self.max > STROKE_CEILING {
            return Err(ConfigError::InvalidRange {
                name: "stroke",
                min: self.min as usize,
                max: self.max as usize,
            });
        }
        Ok(())
    }
}

/// Inclusive range of character counts for a surname or given name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LengthRange {
    pub min: usize,
    pub max: usize,
}

impl LengthRange {
    pub fn iter(&self) -> RangeInclusive<usize> {
        self.min..=self.max
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min == 0 || self.min > self.max || self.max > MAX_NAME_LENGTH {
            return Err(ConfigError::InvalidRange {
                name: "name length",
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Where and how the result set is written.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub path: PathBuf,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::UnknownFormat {
                value: other.to_string(),
            }),
        }
    }
}

/// Worker pool sizing. Zero means one worker per available core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub workers: usize,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidValue {
        key: &'static str,
        value: String,
    },
    InvalidRange {
        name: &'static str,
        min: usize,
        max: usize,
    },
    NameLengthOutOfBounds {
        length: usize,
    },
    ScoreOutOfBounds {
        name: String,
        score: u32,
    },
    InvalidTableStroke {
        stroke: Stroke,
    },
    DuplicateTableStroke {
        stroke: Stroke,
    },
    UnknownFormat {
        value: String,
    },
    ScoreTableIo {
        path: PathBuf,
        source: std::io::Error,
    },
    ScoreTableCsv {
        source: csv::Error,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidValue { key, value } => {
                write!(f, "{key} has an invalid value '{value}'")
            }
            ConfigError::InvalidRange { name, min, max } => {
                write!(f, "{name} range {min}..={max} is empty or out of bounds")
            }
            ConfigError::NameLengthOutOfBounds { length } => write!(
                f,
                "name length {length} is outside 1..={MAX_NAME_LENGTH}"
            ),
            ConfigError::ScoreOutOfBounds { name, score } => {
                write!(f, "{name} score {score} is outside 0..={MAX_SCORE}")
            }
            ConfigError::InvalidTableStroke { stroke } => {
                write!(
                    f,
                    "score table stroke {stroke} is outside 1..={MAX_TABLE_STROKE}"
                )
            }
            ConfigError::DuplicateTableStroke { stroke } => {
                write!(f, "score table lists stroke {stroke} more than once")
            }
            ConfigError::UnknownFormat { value } => {
                write!(f, "output format '{value}' is not one of csv, json")
            }
            ConfigError::ScoreTableIo { path, .. } => {
                write!(f, "unable to read score table {}", path.display())
            }
            ConfigError::ScoreTableCsv { .. } => write!(f, "score table is not valid CSV"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::ScoreTableIo { source, .. } => Some(source),
            ConfigError::ScoreTableCsv { source } => Some(source),
            _ => None,
        }
    }
}

impl From<csv::Error> for ConfigError {
    fn from(source: csv::Error) -> Self {
        Self::ScoreTableCsv { source }
    }
}
