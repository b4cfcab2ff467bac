//! Write path of the append-only session history.
//!
//! Completed sessions are appended as one JSON record per line to a file
//! partitioned by the calendar month of the entry's end time, named
//! `<YYYYMM>_sessions.jsonl`. Partitions are strictly append-only; the one
//! mutation ever performed is entry deletion, implemented as a rewrite into
//! a temporary file in the same directory followed by an atomic rename, so
//! a crash mid-rewrite leaves the original partition intact.

use super::calendar::month_prefix;
use super::data_storage::DataStorage;
use super::error::TideError;
use super::session::LogEntry;
use anyhow::Result;
use chrono::{DateTime, Local};
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Suffix shared by all monthly partition files.
pub const PARTITION_SUFFIX: &str = "_sessions.jsonl";

pub struct LogStore {
    log_dir: PathBuf,
}

impl LogStore {
    pub fn new() -> Result<Self> {
        Ok(LogStore {
            log_dir: DataStorage::new().log_dir()?,
        })
    }

    /// Store backed by an explicit directory. Used by tests.
    pub fn with_dir(log_dir: PathBuf) -> Self {
        LogStore { log_dir }
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    /// Path of the partition holding entries that ended in `date`'s month.
    pub fn partition_path(&self, date: &DateTime<Local>) -> PathBuf {
        self.log_dir.join(format!("{}{}", month_prefix(date), PARTITION_SUFFIX))
    }

    /// Appends one entry to the partition matching its end time, creating
    /// the directory and file as needed. Existing content is never touched.
    pub fn append(&self, entry: &LogEntry) -> Result<(), TideError> {
        let path = self.partition_path(&entry.end_time);
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        let mut line = serde_json::to_string(entry).map_err(TideError::Encode)?;
        line.push('\n');

        let mut file = OpenOptions::new().append(true).create(true).open(&path)?;
        file.write_all(line.as_bytes())?;
        Ok(())
    }

    /// Removes every record matching `target` on `(start_time, tag)` from
    /// its partition.
    ///
    /// There is no unique id per entry, so duplicate records sharing both
    /// fields are removed together in one call. Unparseable lines are
    /// dropped from the rewritten partition as well.
    ///
    /// Returns `EntryNotFound` (leaving the partition untouched) when no
    /// line matched.
    pub fn delete_entry(&self, target: &LogEntry) -> Result<(), TideError> {
        let path = self.partition_path(&target.end_time);
        let file = File::open(&path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                TideError::EntryNotFound
            } else {
                TideError::Io(e)
            }
        })?;

        // The temporary file lives in the same directory so the final
        // rename cannot cross a filesystem boundary.
        let tmp_path = path.with_extension("jsonl.tmp");
        let mut found = false;
        {
            let mut writer = BufWriter::new(File::create(&tmp_path)?);
            for line in BufReader::new(file).lines() {
                let line = line?;
                let entry: LogEntry = match serde_json::from_str(&line) {
                    Ok(entry) => entry,
                    Err(_) => continue,
                };

                if entry.start_time == target.start_time && entry.tag == target.tag {
                    found = true;
                } else {
                    writeln!(writer, "{}", line)?;
                }
            }
            writer.flush()?;
        }

        if found {
            fs::rename(&tmp_path, &path)?;
            Ok(())
        } else {
            let _ = fs::remove_file(&tmp_path);
            Err(TideError::EntryNotFound)
        }
    }
}
