use crate::libs::config::Config;
use crate::libs::formatter::{format_duration, format_minutes};
use crate::libs::log_reader::LogReader;
use crate::libs::messages::Message;
use crate::{msg_print, msg_success};
use anyhow::Result;
use chrono::{Duration, Local};
use clap::Args;

#[derive(Debug, Args)]
pub struct GoalArgs {
    /// Set your daily focus goal in minutes
    #[arg(long)]
    set: Option<u64>,
}

/// Sets or views the daily focus goal. The view compares today's completed
/// focus time against the configured target.
pub fn cmd(args: GoalArgs) -> Result<()> {
    if let Some(minutes) = args.set {
        let mut config = Config::read()?;
        config.daily_goal = Some(minutes);
        config.save()?;
        msg_success!(Message::GoalSet(format_minutes(minutes)));
        return Ok(());
    }

    let config = Config::read()?;
    let goal_minutes = match config.daily_goal {
        Some(minutes) if minutes > 0 => minutes,
        _ => {
            msg_print!(Message::GoalNotSet);
            return Ok(());
        }
    };
    let goal = Duration::minutes(goal_minutes as i64);

    let reader = LogReader::new()?;
    let entries = reader.read_recent(1000, true, false, Local::now())?;
    let total = entries.iter().fold(Duration::zero(), |acc, e| acc + e.duration);

    let percent = total.num_seconds() * 100 / goal.num_seconds().max(1);
    msg_print!(Message::GoalProgress {
        done: format_duration(&total),
        goal: format_duration(&goal),
        percent,
    });
    Ok(())
}
