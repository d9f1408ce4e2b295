//! Serializes a finished search into CSV rows or a JSON report.

mod records;

pub use records::CandidateRecord;

use crate::config::{OutputFormat, SearchConfig};
use crate::error::AppError;
use crate::search::{SearchOutcome, SearchSummary};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Everything a consumer needs to interpret a result file.
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    pub generated_at: DateTime<Utc>,
    pub config: SearchConfig,
    pub summary: SearchSummary,
    pub candidates: Vec<CandidateRecord>,
}

impl SearchReport {
    pub fn new(config: SearchConfig, outcome: &SearchOutcome) -> Self {
        Self::at(Utc::now(), config, outcome)
    }

    pub fn at(generated_at: DateTime<Utc>, config: SearchConfig, outcome: &SearchOutcome) -> Self {
        Self {
            generated_at,
            config,
            summary: outcome.summary,
            candidates: outcome.candidates.iter().map(CandidateRecord::from).collect(),
        }
    }
}

/// Header row followed by one row per record; the header is written even
/// when there are no records.
pub fn write_csv<W: Write>(writer: W, records: &[CandidateRecord]) -> Result<(), csv::Error> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(CandidateRecord::HEADERS)?;
    for record in records {
        csv_writer.write_record(record.csv_row())?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(writer: W, report: &SearchReport) -> Result<(), serde_json::Error> {
    serde_json::to_writer_pretty(writer, report)
}

pub fn write_to_path(
    path: &Path,
    format: OutputFormat,
    report: &SearchReport,
) -> Result<(), AppError> {
    let mut writer = BufWriter::new(File::create(path)?);
    match format {
        OutputFormat::Csv => write_csv(&mut writer, &report.candidates)?,
        OutputFormat::Json => {
            write_json(&mut writer, report)?;
            writer.write_all(b"\n")?;
        }
    }
    writer.flush()?;

    info!(
        path = %path.display(),
        ?format,
        rows = report.candidates.len(),
        "results written"
    );
    Ok(())
}
