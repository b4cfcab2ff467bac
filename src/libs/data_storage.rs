use anyhow::Result;
use std::env::consts::OS;
use std::env::var;
use std::fs;
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "tide";

/// File holding the single active-session record.
pub const SESSION_FILE_NAME: &str = "session.json";
/// Directory (under the base path) holding the monthly log partitions.
pub const LOG_DIR_NAME: &str = "logs";
/// Directory (under the base path) holding user lifecycle hook scripts.
pub const HOOKS_DIR_NAME: &str = "hooks";

/// Environment variable overriding the session file location.
pub const ENV_SESSION_PATH: &str = "TIDE_SESSION_PATH";
/// Environment variable overriding the log partition directory.
pub const ENV_LOG_PATH: &str = "TIDE_LOG_PATH";

#[derive(Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    pub fn new() -> Self {
        let base_path = match OS {
            "windows" => var("LOCALAPPDATA").unwrap_or_else(|_| ".".into()),
            "macos" => var("HOME").unwrap_or_else(|_| ".".into()) + "/Library/Application Support",
            _ => var("XDG_DATA_HOME").unwrap_or_else(|_| var("HOME").unwrap_or_else(|_| ".".into()) + "/.local/share"),
        };
        let base_path = Path::new(&base_path).join(APP_NAME);

        Self { base_path }
    }

    pub fn get_path(&self, file_name: &str) -> Result<PathBuf> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)?;
        }
        Ok(self.base_path.join(file_name))
    }

    /// Path of the active-session file, honoring `TIDE_SESSION_PATH`.
    pub fn session_path(&self) -> Result<PathBuf> {
        if let Ok(path) = var(ENV_SESSION_PATH) {
            if !path.is_empty() {
                return Ok(PathBuf::from(path));
            }
        }
        self.get_path(SESSION_FILE_NAME)
    }

    /// Directory containing the monthly log partitions, honoring `TIDE_LOG_PATH`.
    ///
    /// The directory is not created here; the write path creates it on first
    /// append and the read path treats a missing directory as an empty log.
    pub fn log_dir(&self) -> Result<PathBuf> {
        if let Ok(path) = var(ENV_LOG_PATH) {
            if !path.is_empty() {
                return Ok(PathBuf::from(path));
            }
        }
        Ok(self.base_path.join(LOG_DIR_NAME))
    }

    /// Path of the user hook script for a lifecycle event.
    pub fn hook_path(&self, event: &str) -> PathBuf {
        self.base_path.join(HOOKS_DIR_NAME).join(event)
    }
}
