//! Diagnostic pass over the local setup.
//!
//! Verifies that the config file parses, the session file is readable (and
//! not stale), and the log directory is usable. Never mutates anything.

use crate::libs::config::{Config, CONFIG_FILE_NAME};
use crate::libs::data_storage::DataStorage;
use crate::libs::error::TideError;
use crate::libs::messages::Message;
use crate::libs::session::SessionStore;
use crate::{msg_error, msg_print, msg_success, msg_warning};
use anyhow::Result;
use chrono::Local;

pub fn cmd() -> Result<()> {
    msg_print!(Message::DoctorRunning);
    let mut all_good = true;

    // Config file: missing is fine, unparseable is not.
    let storage = DataStorage::new();
    match storage.get_path(CONFIG_FILE_NAME) {
        Ok(config_path) if !config_path.exists() => {
            msg_success!(Message::DoctorConfigDefaults);
        }
        Ok(config_path) => match Config::read() {
            Ok(_) => msg_success!(Message::DoctorConfigOk(config_path.display().to_string())),
            Err(e) => {
                msg_error!(Message::DoctorConfigParseFailed {
                    path: config_path.display().to_string(),
                    error: e.to_string(),
                });
                all_good = false;
            }
        },
        Err(e) => {
            msg_error!(Message::DoctorConfigParseFailed {
                path: CONFIG_FILE_NAME.to_string(),
                error: e.to_string(),
            });
            all_good = false;
        }
    }

    // Session file: readable when present, plus a staleness heads-up.
    let store = SessionStore::new()?;
    match store.load() {
        Ok(session) => {
            msg_success!(Message::DoctorSessionOk(store.path().display().to_string()));
            let config = Config::read().unwrap_or_default();
            if session.is_stale(config.stale_threshold(), Local::now()) {
                msg_warning!(Message::DoctorSessionStale(session.tag));
            }
        }
        Err(TideError::SessionNotFound) => msg_success!(Message::DoctorSessionNone),
        Err(e) => {
            msg_error!(Message::DoctorSessionCorrupted {
                path: store.path().display().to_string(),
                error: e.to_string(),
            });
            all_good = false;
        }
    }

    // Log directory: must be a directory if it exists at all.
    let log_dir = storage.log_dir()?;
    if !log_dir.exists() {
        msg_success!(Message::DoctorLogDirWillCreate(log_dir.display().to_string()));
    } else if log_dir.is_dir() {
        msg_success!(Message::DoctorLogDirOk(log_dir.display().to_string()));
    } else {
        msg_error!(Message::DoctorLogDirInvalid(log_dir.display().to_string()));
        all_good = false;
    }

    println!();
    if all_good {
        msg_print!(Message::DoctorAllGood);
    } else {
        msg_warning!(Message::DoctorIssuesFound);
    }
    Ok(())
}
