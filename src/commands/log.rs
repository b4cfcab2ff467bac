//! Display the session history.
//!
//! The default view lists the ten most recent sessions. Date filters narrow
//! the window; `--stats` switches to an aggregate summary; `--all` walks
//! the entire history.

use crate::libs::calendar::{is_this_week, is_today, same_month};
use crate::libs::log_reader::{LogReader, DEFAULT_MAX_ENTRIES};
use crate::libs::messages::Message;
use crate::libs::session::LogEntry;
use crate::libs::stats::calculate_stats;
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_print};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;

#[derive(Debug, Args)]
pub struct LogArgs {
    /// Show aggregate statistics instead of the entry list
    #[arg(long)]
    stats: bool,

    /// Only sessions completed today
    #[arg(long)]
    today: bool,

    /// Only sessions completed this week
    #[arg(long)]
    week: bool,

    /// Only sessions completed this month
    #[arg(long)]
    month: bool,

    /// Show the entire history
    #[arg(long)]
    all: bool,

    /// Specific month to show (YYYY-MM)
    #[arg(long)]
    date: Option<String>,
}

pub(crate) fn parse_month(input: &str) -> Result<NaiveDate> {
    match NaiveDate::parse_from_str(&format!("{}-01", input), "%Y-%m-%d") {
        Ok(month) => Ok(month),
        Err(_) => msg_bail_anyhow!(Message::InvalidMonthFormat(input.to_string())),
    }
}

pub fn cmd(args: LogArgs) -> Result<()> {
    let reader = LogReader::new()?;
    let now = Local::now();

    let target_month = args.date.as_deref().map(parse_month).transpose()?;

    let entries: Vec<LogEntry> = if let Some(month) = target_month {
        reader.read_month(month, DEFAULT_MAX_ENTRIES)?
    } else if args.all {
        let mut all = reader.read_all()?;
        if args.today || args.week || args.month {
            all.retain(|entry| {
                (!args.today || is_today(&entry.end_time, &now))
                    && (!args.week || is_this_week(&entry.end_time, &now))
                    && (!args.month || same_month(entry.end_time.date_naive(), now.date_naive()))
            });
        }
        all
    } else if args.month {
        reader.read_month(now.date_naive(), DEFAULT_MAX_ENTRIES)?
    } else {
        reader.read_recent(DEFAULT_MAX_ENTRIES, args.today, args.week, now)?
    };

    if entries.is_empty() {
        msg_print!(Message::NoSessionsLogged);
        return Ok(());
    }

    let period = period_label(&args, target_month);
    if args.stats {
        View::stats(&calculate_stats(&entries, 10), &period);
    } else {
        View::entries(&entries, &period);
    }
    Ok(())
}

fn period_label(args: &LogArgs, target_month: Option<NaiveDate>) -> String {
    if let Some(month) = target_month {
        return format!("{} sessions", month.format("%B %Y"));
    }
    if args.today {
        "Today's sessions".to_string()
    } else if args.week {
        "This week's sessions".to_string()
    } else if args.month {
        "This month's sessions".to_string()
    } else if args.all {
        "All sessions".to_string()
    } else {
        "Recent sessions".to_string()
    }
}
