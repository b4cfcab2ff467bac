use crate::libs::log_reader::LogReader;
use crate::libs::messages::Message;
use crate::libs::stats::daily_totals;
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;
use chrono::{Duration, Local};

/// Renders the yearly contribution graph and summary numbers.
pub fn cmd() -> Result<()> {
    let reader = LogReader::new()?;
    let entries = reader.read_all()?;

    if entries.is_empty() {
        msg_print!(Message::NoSessionsLogged);
        return Ok(());
    }

    let now = Local::now();
    let one_year_ago = now.date_naive() - Duration::days(365);
    let totals = daily_totals(&entries, one_year_ago);

    View::dashboard(&totals, now);
    Ok(())
}
