//! Complete the current session and log it.
//!
//! Ending must always free the single-session slot. A failure to append the
//! history record is reported as a warning and the session file is removed
//! anyway, so the user is never trapped in a session that thinks it is
//! still active after they asked to end it.

use crate::libs::formatter::format_duration;
use crate::libs::hooks;
use crate::libs::log_store::LogStore;
use crate::libs::messages::Message;
use crate::libs::session::SessionStore;
use crate::{msg_print, msg_warning};
use anyhow::Result;
use chrono::Local;

pub fn cmd() -> Result<()> {
    let store = SessionStore::new()?;
    if !store.exists() {
        msg_print!(Message::NoSessionToEnd);
        return Ok(());
    }

    let session = store.load()?;
    let now = Local::now();

    // A paused session ends at its pause point, so no time accrues after
    // the user stepped away.
    let entry = session.to_entry(now);

    match LogStore::new() {
        Ok(log) => {
            if let Err(e) = log.append(&entry) {
                msg_warning!(Message::SessionLogFailed(e.to_string()));
            }
        }
        Err(e) => msg_warning!(Message::SessionLogFailed(e.to_string())),
    }

    if let Err(e) = store.delete() {
        msg_warning!(Message::SessionFileRemoveFailed(e.to_string()));
    }

    msg_print!(Message::SessionComplete {
        tag: session.tag.clone(),
        total: format_duration(&entry.duration),
    });
    msg_print!(Message::CarryFocusForward, true);
    hooks::run(hooks::ON_END, &session.tag);
    Ok(())
}
