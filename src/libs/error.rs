//! Error types for the session and log storage layers.
//!
//! Commands generally work with `anyhow::Result`, but the storage layer
//! distinguishes a few conditions callers must react to differently:
//! a missing session or log entry is an expected "nothing to do" case,
//! while a corrupted session file is a hard error because the active
//! session is the single source of truth.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TideError {
    /// No active session file is present.
    #[error("no active session")]
    SessionNotFound,

    /// The session file exists but does not contain a valid session record.
    #[error("session file at {path} is corrupted: {source}")]
    SessionDecode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The entry targeted for deletion was not found in its partition.
    #[error("log entry not found")]
    EntryNotFound,

    /// A record could not be encoded for writing.
    #[error("failed to encode record: {0}")]
    Encode(#[source] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
