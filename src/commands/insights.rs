use crate::libs::log_reader::LogReader;
use crate::libs::messages::Message;
use crate::libs::stats::calculate_insights;
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;

/// Minimum history size for the analysis to say anything meaningful.
const MIN_SESSIONS: usize = 10;

/// Analyzes the full session history for work patterns: busiest day,
/// average session length, and where the time actually went.
pub fn cmd() -> Result<()> {
    let reader = LogReader::new()?;
    let entries = reader.read_all()?;

    if entries.len() < MIN_SESSIONS {
        msg_print!(Message::InsightsNotEnoughData(entries.len()));
        return Ok(());
    }

    View::insights(&calculate_insights(&entries));
    Ok(())
}
