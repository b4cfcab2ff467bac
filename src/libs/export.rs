//! Session history export for external analysis and backup.
//!
//! Exports a slice of completed entries as CSV or JSON, to stdout or to a
//! file. CSV rows carry both raw second counts and pre-formatted durations
//! so spreadsheets work without extra conversion; JSON preserves the
//! on-disk record shape.

use super::formatter::format_duration;
use super::session::LogEntry;
use anyhow::Result;
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

/// Supported export output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values for spreadsheets and simple tooling.
    Csv,
    /// Pretty-printed JSON preserving the record structure.
    Json,
}

/// One CSV output row.
#[derive(Debug, Serialize)]
struct ExportRecord {
    tag: String,
    start_time: String,
    end_time: String,
    duration_seconds: i64,
    total_paused_seconds: i64,
    duration_formatted: String,
    total_paused_formatted: String,
}

impl From<&LogEntry> for ExportRecord {
    fn from(entry: &LogEntry) -> Self {
        ExportRecord {
            tag: entry.tag.clone(),
            start_time: entry.start_time.to_rfc3339(),
            end_time: entry.end_time.to_rfc3339(),
            duration_seconds: entry.duration.num_seconds(),
            total_paused_seconds: entry.total_paused.num_seconds(),
            duration_formatted: format_duration(&entry.duration),
            total_paused_formatted: format_duration(&entry.total_paused),
        }
    }
}

pub struct Exporter {
    format: ExportFormat,
    output: Option<PathBuf>,
}

impl Exporter {
    pub fn new(format: ExportFormat, output: Option<PathBuf>) -> Self {
        Exporter { format, output }
    }

    /// Writes the entries in the configured format and destination.
    pub fn export(&self, entries: &[LogEntry]) -> Result<()> {
        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(File::create(path)?),
            None => Box::new(io::stdout()),
        };

        match self.format {
            ExportFormat::Csv => write_csv(writer, entries),
            ExportFormat::Json => write_json(writer, entries),
        }
    }
}

fn write_csv(writer: Box<dyn Write>, entries: &[LogEntry]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for entry in entries {
        csv_writer.serialize(ExportRecord::from(entry))?;
    }
    csv_writer.flush()?;
    Ok(())
}

fn write_json(mut writer: Box<dyn Write>, entries: &[LogEntry]) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, entries)?;
    writeln!(writer)?;
    Ok(())
}
