use crate::commands::log::parse_month;
use crate::libs::export::{ExportFormat, Exporter};
use crate::libs::log_reader::{LogReader, DEFAULT_MAX_ENTRIES};
use crate::libs::messages::Message;
use crate::{msg_success, msg_warning};
use anyhow::Result;
use chrono::Local;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Export format
    #[arg(long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Output file path (stdout when omitted)
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Export sessions from today
    #[arg(long)]
    today: bool,

    /// Export sessions from this week
    #[arg(long)]
    week: bool,

    /// Export sessions from this month
    #[arg(long)]
    month: bool,

    /// Export all session history
    #[arg(long)]
    all: bool,

    /// Specific month to export (YYYY-MM)
    #[arg(long)]
    date: Option<String>,
}

/// Exports session history with the same period filters as the log view.
pub fn cmd(args: ExportArgs) -> Result<()> {
    let reader = LogReader::new()?;
    let now = Local::now();

    let entries = if args.all {
        reader.read_all()?
    } else if let Some(input) = args.date.as_deref() {
        reader.read_month(parse_month(input)?, 0)?
    } else if args.month {
        reader.read_month(now.date_naive(), 0)?
    } else if args.today || args.week {
        reader.read_recent(0, args.today, args.week, now)?
    } else {
        reader.read_recent(DEFAULT_MAX_ENTRIES, false, false, now)?
    };

    if entries.is_empty() {
        msg_warning!(Message::NoEntriesToExport);
        return Ok(());
    }

    Exporter::new(args.format, args.output.clone()).export(&entries)?;

    if let Some(path) = &args.output {
        msg_success!(Message::ExportCompleted {
            path: path.display().to_string(),
            count: entries.len(),
        });
    }
    Ok(())
}
