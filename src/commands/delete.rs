//! Interactively delete a session from the log.
//!
//! Lists the ten most recent sessions, asks which one to remove, and
//! confirms before rewriting the partition. Deletion matches on
//! `(start_time, tag)`, so duplicate records sharing both fields are
//! removed together.

use crate::libs::error::TideError;
use crate::libs::formatter::format_duration;
use crate::libs::log_reader::LogReader;
use crate::libs::log_store::LogStore;
use crate::libs::messages::Message;
use crate::{msg_error, msg_print, msg_success};
use anyhow::Result;
use chrono::Local;
use dialoguer::{theme::ColorfulTheme, Confirm, Select};

pub fn cmd() -> Result<()> {
    let reader = LogReader::new()?;
    let entries = reader.read_recent(10, false, false, Local::now())?;

    if entries.is_empty() {
        msg_print!(Message::NoSessionsToDelete);
        return Ok(());
    }

    let labels: Vec<String> = entries
        .iter()
        .map(|entry| {
            format!(
                "{} - {} ({})",
                entry.start_time.format("%Y-%m-%d %H:%M"),
                entry.tag,
                format_duration(&entry.duration)
            )
        })
        .collect();

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSelectSessionToDelete.to_string())
        .items(&labels)
        .default(0)
        .interact_opt()?;

    let index = match selection {
        Some(index) => index,
        None => {
            msg_print!(Message::OperationCancelled);
            return Ok(());
        }
    };

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptConfirmDelete.to_string())
        .default(false)
        .interact()?;
    if !confirmed {
        msg_print!(Message::OperationCancelled);
        return Ok(());
    }

    match LogStore::new()?.delete_entry(&entries[index]) {
        Ok(()) => msg_success!(Message::SessionDeleted),
        Err(TideError::EntryNotFound) => msg_error!(Message::LogEntryNotFound),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
