use crate::libs::log_reader::LogReader;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;
use chrono::Local;

/// Shows a compact summary of the sessions completed today.
pub fn cmd() -> Result<()> {
    let reader = LogReader::new()?;
    let entries = reader.read_recent(100, true, false, Local::now())?;

    if entries.is_empty() {
        msg_print!(Message::NoSessionsToday);
        return Ok(());
    }

    View::recent(&entries);
    Ok(())
}
