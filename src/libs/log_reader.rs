//! Read path of the append-only session history.
//!
//! This module answers every query shape over the monthly log partitions
//! without loading the whole history into memory when a limit is given.
//!
//! ## Reading Strategy
//!
//! 1. **Partition selection**: only the partitions a filter could match are
//!    opened. A today filter needs the current month; a week filter needs
//!    the current and previous months (a week can span a month boundary);
//!    a month query needs exactly one partition.
//! 2. **Streaming parse**: each partition is scanned line by line. Blank
//!    lines are skipped and a line that fails to decode is dropped silently,
//!    so partial corruption never blocks access to the rest of history.
//! 3. **Early termination**: partitions are visited newest first and reading
//!    stops once enough entries are accumulated. This is an optimization,
//!    not a correctness requirement, because entries are re-sorted by end
//!    time after loading and the limit is applied again afterwards.
//!
//! Any caller-supplied limit is clamped to [`MAX_ENTRIES_LIMIT`] to bound
//! memory regardless of caller mistakes; only [`LogReader::read_all`] is
//! exempt. Scanning an unusually large number of lines emits an advisory
//! warning on stderr.

use super::calendar::{is_this_week, is_today, month_start, parse_month_prefix, previous_month, same_month};
use super::data_storage::DataStorage;
use super::error::TideError;
use super::log_store::PARTITION_SUFFIX;
use super::messages::Message;
use super::session::LogEntry;
use crate::msg_warning;
use anyhow::Result;
use chrono::{DateTime, Local, NaiveDate};
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Entries shown by default when the caller does not ask for a count.
pub const DEFAULT_MAX_ENTRIES: usize = 10;
/// Ceiling applied to every caller-supplied limit except `read_all`.
pub const MAX_ENTRIES_LIMIT: usize = 1000;
/// Scanned-line count past which the advisory large-dataset warning fires.
const WARNING_THRESHOLD: usize = 10_000;

/// Partition selection rule derived from the requested query.
enum Filter {
    None,
    Today,
    Week,
    Month(NaiveDate),
}

pub struct LogReader {
    log_dir: PathBuf,
}

impl LogReader {
    pub fn new() -> Result<Self> {
        Ok(LogReader {
            log_dir: DataStorage::new().log_dir()?,
        })
    }

    /// Reader over an explicit directory. Used by tests.
    pub fn with_dir(log_dir: PathBuf) -> Self {
        LogReader { log_dir }
    }

    /// Reads the most recent entries, newest first.
    ///
    /// A `limit` of zero means no limit. The today/week predicates are
    /// applied as a post-filter after loading, and the limit is enforced
    /// again afterwards so filtering never uncovers extra entries.
    pub fn read_recent(&self, limit: usize, filter_today: bool, filter_week: bool, now: DateTime<Local>) -> Result<Vec<LogEntry>> {
        let filter = if filter_today {
            Filter::Today
        } else if filter_week {
            Filter::Week
        } else {
            Filter::None
        };
        let mut entries = self.read_entries(limit, &filter, now)?;

        if filter_today || filter_week {
            entries.retain(|entry| {
                (!filter_today || is_today(&entry.end_time, &now)) && (!filter_week || is_this_week(&entry.end_time, &now))
            });
            if limit > 0 && entries.len() > limit {
                entries.truncate(limit);
            }
        }

        Ok(entries)
    }

    /// Reads entries from the single partition covering `month`.
    pub fn read_month(&self, month: NaiveDate, limit: usize) -> Result<Vec<LogEntry>> {
        self.read_entries(limit, &Filter::Month(month), Local::now())
    }

    /// Reads every entry across all partitions, ignoring any limit.
    pub fn read_all(&self) -> Result<Vec<LogEntry>> {
        self.read_entries(0, &Filter::None, Local::now())
    }

    fn read_entries(&self, limit: usize, filter: &Filter, now: DateTime<Local>) -> Result<Vec<LogEntry>> {
        // A zero limit means unlimited and passes through; anything else is
        // clamped to the hard cap.
        let limit = limit.min(MAX_ENTRIES_LIMIT);
        let files = self.relevant_files(filter, now)?;
        if files.is_empty() {
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        let mut total_lines = 0;

        for file in &files {
            let (file_entries, lines) = match read_single_file(file) {
                Ok(result) => result,
                Err(e) => {
                    msg_warning!(Message::LogFileReadFailed {
                        path: file.display().to_string(),
                        error: e.to_string(),
                    });
                    continue;
                }
            };

            entries.extend(file_entries);
            total_lines += lines;

            // Enough entries gathered; later files only hold older months.
            if limit > 0 && entries.len() >= limit {
                break;
            }
        }

        if total_lines > WARNING_THRESHOLD {
            msg_warning!(Message::LargeDatasetDetected {
                lines: total_lines,
                files: files.len(),
            });
        }

        // Per-file order is file order, not global order; sort before the
        // limit is applied.
        entries.sort_by(|a, b| b.end_time.cmp(&a.end_time));
        if limit > 0 && entries.len() > limit {
            entries.truncate(limit);
        }

        Ok(entries)
    }

    /// Partitions relevant to the filter, newest first.
    ///
    /// Files whose names do not carry a valid `YYYYMM` prefix are included
    /// when no date filter is requested but skipped under one, since their
    /// month cannot be established.
    fn relevant_files(&self, filter: &Filter, now: DateTime<Local>) -> Result<Vec<PathBuf>> {
        if !self.log_dir.exists() {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for dir_entry in fs::read_dir(&self.log_dir)? {
            let path = dir_entry?.path();
            let name = match path.file_name().and_then(|n| n.to_str()) {
                Some(name) => name,
                None => continue,
            };
            if !name.ends_with(PARTITION_SUFFIX) {
                continue;
            }

            let keep = match filter {
                Filter::None => true,
                _ => match parse_month_prefix(name) {
                    Some(file_month) => match filter {
                        Filter::Month(target) => same_month(file_month, *target),
                        Filter::Today => same_month(file_month, now.date_naive()),
                        Filter::Week => {
                            let current = month_start(now.date_naive());
                            same_month(file_month, current) || same_month(file_month, previous_month(current))
                        }
                        Filter::None => true,
                    },
                    None => false,
                },
            };
            if keep {
                files.push(path);
            }
        }

        // YYYYMM prefixes sort chronologically, so reverse name order is
        // newest first.
        files.sort();
        files.reverse();
        Ok(files)
    }
}

/// Reads one partition, returning the parsed entries and the number of
/// lines scanned. Blank and malformed lines are skipped.
fn read_single_file(path: &Path) -> Result<(Vec<LogEntry>, usize), TideError> {
    let file = File::open(path)?;
    let mut entries = Vec::new();
    let mut line_count = 0;

    for line in BufReader::new(file).lines() {
        let line = line?;
        line_count += 1;

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match serde_json::from_str::<LogEntry>(trimmed) {
            Ok(entry) => entries.push(entry),
            Err(_) => continue,
        }
    }

    Ok((entries, line_count))
}
