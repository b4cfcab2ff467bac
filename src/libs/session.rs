//! Active-session record, lifecycle state machine, and the single-file store.
//!
//! At most one session exists at a time, persisted as a single JSON object.
//! All mutation goes through [`Session`]'s transition methods and the
//! [`SessionStore`] load/save interface, so the state machine's transitions
//! are the only place the pause-accounting invariants are enforced.
//!
//! ## Pause Accounting
//!
//! Elapsed active time is always `now - start_time - total_paused`. While a
//! session is paused, the reference point is `paused_at` instead of `now`,
//! so a paused session never silently accrues time. `total_paused` grows by
//! exactly `now - paused_at` on each resume and never decreases.
//!
//! ## Staleness
//!
//! A session left active or paused past an externally configured threshold
//! is considered stale. The check is a pure predicate; abandoning a stale
//! session (converting it into an `[ABANDONED]` log entry and freeing the
//! slot) only happens from an explicit call site, never inside `load`.

use super::data_storage::DataStorage;
use super::error::TideError;
use anyhow::Result;
use chrono::{DateTime, Duration, Local};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Tag suffix appended when a stale session is abandoned instead of ended.
pub const ABANDONED_SUFFIX: &str = " [ABANDONED]";

/// Serialization helper storing `chrono::Duration` values as whole seconds.
pub(crate) mod duration_secs {
    use chrono::Duration;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(value.num_seconds())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        Ok(Duration::seconds(i64::deserialize(deserializer)?))
    }
}

pub(crate) fn zero_duration() -> Duration {
    Duration::zero()
}

fn duration_is_zero(d: &Duration) -> bool {
    d.is_zero()
}

fn clamp_non_negative(d: Duration) -> Duration {
    if d < Duration::zero() {
        Duration::zero()
    } else {
        d
    }
}

/// A deep work session in progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Free-text label describing the work; may be empty.
    #[serde(default)]
    pub tag: String,
    /// Instant the session began. Immutable once set.
    pub start_time: DateTime<Local>,
    /// Optional planned length; zero means no target.
    #[serde(with = "duration_secs", default = "zero_duration", skip_serializing_if = "duration_is_zero")]
    pub target_duration: Duration,
    /// Instant the most recent pause began; only meaningful while paused.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paused_at: Option<DateTime<Local>>,
    #[serde(default)]
    pub is_paused: bool,
    /// Cumulative time spent paused across all pause/resume cycles.
    #[serde(with = "duration_secs", default = "zero_duration")]
    pub total_paused: Duration,
}

/// An immutable record of a completed (or abandoned) session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(default)]
    pub tag: String,
    pub start_time: DateTime<Local>,
    pub end_time: DateTime<Local>,
    /// Total active time; pause time is excluded.
    #[serde(with = "duration_secs", default = "zero_duration")]
    pub duration: Duration,
    #[serde(with = "duration_secs", default = "zero_duration")]
    pub total_paused: Duration,
}

impl Session {
    pub fn new(tag: &str, target_duration: Duration, now: DateTime<Local>) -> Self {
        Session {
            tag: tag.to_string(),
            start_time: now,
            target_duration,
            paused_at: None,
            is_paused: false,
            total_paused: Duration::zero(),
        }
    }

    /// Elapsed active time, pause time excluded, clamped to zero.
    ///
    /// While paused this is the working time as of the pause point, not as
    /// of `now`; the time spent sitting in the pause is a separate number
    /// reported by [`Session::paused_for`].
    pub fn elapsed(&self, now: DateTime<Local>) -> Duration {
        let reference = match self.paused_at {
            Some(paused_at) if self.is_paused => paused_at,
            _ => now,
        };
        clamp_non_negative(reference - self.start_time - self.total_paused)
    }

    /// How long the current pause has lasted. Zero when not paused.
    pub fn paused_for(&self, now: DateTime<Local>) -> Duration {
        match self.paused_at {
            Some(paused_at) if self.is_paused => clamp_non_negative(now - paused_at),
            _ => Duration::zero(),
        }
    }

    /// Active -> Paused. Returns `false` and leaves the record untouched
    /// when the session is already paused.
    pub fn pause(&mut self, now: DateTime<Local>) -> bool {
        if self.is_paused {
            return false;
        }
        self.is_paused = true;
        self.paused_at = Some(now);
        true
    }

    /// Paused -> Active, folding the elapsed pause into `total_paused`.
    /// Returns `false` when the session is already active.
    pub fn resume(&mut self, now: DateTime<Local>) -> bool {
        if !self.is_paused {
            return false;
        }
        if let Some(paused_at) = self.paused_at.take() {
            self.total_paused = self.total_paused + (now - paused_at);
        }
        self.is_paused = false;
        true
    }

    /// The instant the session is considered to have ended: the pause point
    /// for a paused session, `now` otherwise.
    pub fn end_point(&self, now: DateTime<Local>) -> DateTime<Local> {
        match self.paused_at {
            Some(paused_at) if self.is_paused => paused_at,
            _ => now,
        }
    }

    /// True when the session has sat in its current state strictly longer
    /// than `threshold`: paused sessions are measured from the pause point,
    /// active ones from their start.
    pub fn is_stale(&self, threshold: Duration, now: DateTime<Local>) -> bool {
        match self.paused_at {
            Some(paused_at) if self.is_paused => now - paused_at > threshold,
            _ => now - self.start_time > threshold,
        }
    }

    /// Converts the session into the immutable record appended to the log.
    pub fn to_entry(&self, now: DateTime<Local>) -> LogEntry {
        let end_time = self.end_point(now);
        LogEntry {
            tag: self.tag.clone(),
            start_time: self.start_time,
            end_time,
            duration: clamp_non_negative(end_time - self.start_time - self.total_paused),
            total_paused: self.total_paused,
        }
    }

    /// Like [`Session::to_entry`], with the abandoned marker on the tag.
    pub fn to_abandoned_entry(&self, now: DateTime<Local>) -> LogEntry {
        let mut entry = self.to_entry(now);
        entry.tag.push_str(ABANDONED_SUFFIX);
        entry
    }
}

/// Single-file store for the at-most-one active session.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new() -> Result<Self> {
        Ok(SessionStore {
            path: DataStorage::new().session_path()?,
        })
    }

    /// Store backed by an explicit file path. Used by tests.
    pub fn with_path(path: PathBuf) -> Self {
        SessionStore { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Loads the active session. A missing file is `SessionNotFound`; a file
    /// that does not parse is `SessionDecode`, which callers must treat as a
    /// hard error rather than guessing at the contents.
    pub fn load(&self) -> Result<Session, TideError> {
        if !self.path.exists() {
            return Err(TideError::SessionNotFound);
        }
        let data = fs::read_to_string(&self.path)?;
        serde_json::from_str(&data).map_err(|source| TideError::SessionDecode {
            path: self.path.clone(),
            source,
        })
    }

    /// Serializes and overwrites the session file, creating the parent
    /// directory if absent.
    pub fn save(&self, session: &Session) -> Result<(), TideError> {
        if let Some(dir) = self.path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }
        let data = serde_json::to_string(session).map_err(TideError::Encode)?;
        fs::write(&self.path, data)?;
        Ok(())
    }

    /// Removes the session file, freeing the single-session slot.
    pub fn delete(&self) -> Result<(), TideError> {
        fs::remove_file(&self.path)?;
        Ok(())
    }
}
